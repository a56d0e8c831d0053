use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::QuestionCatalog;
use crate::assessment::domain::{AnswerMap, Dimension, Question, Rating};
use crate::assessment::router::assessment_router;
use crate::assessment::service::AssessmentService;
use crate::assessment::session::{SessionId, SessionStore, SessionStoreError};

pub(super) const DIMENSION_TITLES: [&str; 5] = [
    "Community Voice",
    "Power & Ownership",
    "Cultural Sensitivity",
    "Benefit & Access",
    "Track Record & Accountability",
];

/// Every standard question answered with the same rating.
pub(super) fn uniform_answers(rating: Rating) -> AnswerMap {
    QuestionCatalog::standard()
        .questions()
        .map(|(_, question)| (question.id, rating.as_str()))
        .collect()
}

/// One dimension's questions answered in order with the given ratings.
pub(super) fn dimension_answers(dimension_id: &str, ratings: &[Rating]) -> AnswerMap {
    let dimension = standard_dimension(dimension_id);
    dimension
        .questions
        .iter()
        .zip(ratings)
        .map(|(question, rating)| (question.id, rating.as_str()))
        .collect()
}

pub(super) fn standard_dimension(id: &str) -> &'static Dimension {
    QuestionCatalog::standard()
        .dimension(id)
        .expect("dimension exists in standard catalog")
}

pub(super) fn three_question_dimension() -> Dimension {
    Dimension {
        id: "governance",
        title: "Governance",
        description: "Who decides?",
        icon: "*",
        questions: vec![
            Question {
                id: "gv-1",
                text: "First",
                hint: None,
            },
            Question {
                id: "gv-2",
                text: "Second",
                hint: None,
            },
            Question {
                id: "gv-3",
                text: "Third",
                hint: None,
            },
        ],
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    sessions: Arc<Mutex<HashMap<SessionId, AnswerMap>>>,
}

impl SessionStore for MemoryStore {
    fn save(&self, session: SessionId, answers: AnswerMap) -> Result<(), SessionStoreError> {
        self.sessions
            .lock()
            .expect("store mutex poisoned")
            .insert(session, answers);
        Ok(())
    }

    fn load(&self, session: &SessionId) -> Result<Option<AnswerMap>, SessionStoreError> {
        Ok(self
            .sessions
            .lock()
            .expect("store mutex poisoned")
            .get(session)
            .cloned())
    }
}

impl MemoryStore {
    pub(super) fn stored(&self, session: &str) -> Option<AnswerMap> {
        self.sessions
            .lock()
            .expect("store mutex poisoned")
            .get(&SessionId(session.to_string()))
            .cloned()
    }
}

pub(super) struct UnavailableStore;

impl SessionStore for UnavailableStore {
    fn save(&self, _session: SessionId, _answers: AnswerMap) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Unavailable("offline".to_string()))
    }

    fn load(&self, _session: &SessionId) -> Result<Option<AnswerMap>, SessionStoreError> {
        Err(SessionStoreError::Unavailable("offline".to_string()))
    }
}

pub(super) fn build_service() -> (Arc<AssessmentService<MemoryStore>>, MemoryStore) {
    let store = MemoryStore::default();
    let service = AssessmentService::new(Arc::new(store.clone())).expect("standard rubric is valid");
    (Arc::new(service), store)
}

pub(super) fn router_with_store() -> (axum::Router, MemoryStore) {
    let (service, store) = build_service();
    (assessment_router(service), store)
}

pub(super) async fn read_body(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = read_body(response).await;
    serde_json::from_slice(&body).expect("json payload")
}
