use std::fmt;

use serde::{Deserialize, Serialize};

use super::domain::AnswerMap;

/// Identifier of one evaluator's assessment session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-session answer storage bridging the answering and results steps.
///
/// A session is written with a complete answer map before it is read. A read
/// with no prior write returns `Ok(None)`, meaning no assessment is available yet.
pub trait SessionStore: Send + Sync {
    fn save(&self, session: SessionId, answers: AnswerMap) -> Result<(), SessionStoreError>;
    fn load(&self, session: &SessionId) -> Result<Option<AnswerMap>, SessionStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("no assessment available for session '{0}'")]
    NotFound(SessionId),
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
