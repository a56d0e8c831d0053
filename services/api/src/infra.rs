use assess_align::assessment::{AnswerMap, SessionId, SessionStore, SessionStoreError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local session storage. Submissions are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, AnswerMap>>>,
}

impl InMemorySessionStore {
    fn guard(&self) -> Result<MutexGuard<'_, HashMap<SessionId, AnswerMap>>, SessionStoreError> {
        self.sessions
            .lock()
            .map_err(|_| SessionStoreError::Unavailable("session mutex poisoned".to_string()))
    }
}

impl SessionStore for InMemorySessionStore {
    fn save(&self, session: SessionId, answers: AnswerMap) -> Result<(), SessionStoreError> {
        self.guard()?.insert(session, answers);
        Ok(())
    }

    fn load(&self, session: &SessionId) -> Result<Option<AnswerMap>, SessionStoreError> {
        Ok(self.guard()?.get(session).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_sessions_are_loaded_back() {
        let store = InMemorySessionStore::default();
        let session = SessionId("evaluator-1".to_string());
        let answers = AnswerMap::new().with("cv-1", "green");

        store
            .save(session.clone(), answers.clone())
            .expect("save succeeds");

        assert_eq!(store.load(&session).expect("load succeeds"), Some(answers));
    }

    #[test]
    fn resubmission_replaces_previous_answers() {
        let store = InMemorySessionStore::default();
        let session = SessionId("evaluator-2".to_string());

        store
            .save(session.clone(), AnswerMap::new().with("cv-1", "green"))
            .expect("first save");
        store
            .save(session.clone(), AnswerMap::new().with("cv-1", "red"))
            .expect("second save");

        let loaded = store.load(&session).expect("load succeeds").expect("stored");
        assert_eq!(loaded.get("cv-1"), Some("red"));
    }

    #[test]
    fn unknown_sessions_load_as_none() {
        let store = InMemorySessionStore::default();
        let loaded = store
            .load(&SessionId("nobody".to_string()))
            .expect("load succeeds");
        assert!(loaded.is_none());
    }
}
