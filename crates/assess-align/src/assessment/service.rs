use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::catalog::{CatalogError, QuestionCatalog};
use super::domain::AnswerMap;
use super::feedback::{FeedbackComposer, FeedbackLetter};
use super::progress::{AnswerError, AssessmentProgress};
use super::report::AssessmentSummary;
use super::scoring::{AggregateResult, ScoringEngine};
use super::session::{SessionId, SessionStore, SessionStoreError};

/// Everything derived from one finished answer map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentOutcome {
    pub progress: AssessmentProgress,
    pub scores: AggregateResult<'static>,
    pub summary: AssessmentSummary,
    pub letter: FeedbackLetter,
}

/// Service composing the scoring engine, the feedback composer, and session storage.
pub struct AssessmentService<S> {
    engine: ScoringEngine<'static>,
    composer: &'static FeedbackComposer,
    store: Arc<S>,
}

impl<S> AssessmentService<S>
where
    S: SessionStore + 'static,
{
    /// Validates the standard rubric before accepting any work.
    pub fn new(store: Arc<S>) -> Result<Self, CatalogError> {
        let composer = super::validate_standard()?;
        Ok(Self {
            engine: ScoringEngine::standard(),
            composer,
            store,
        })
    }

    pub fn catalog(&self) -> &'static QuestionCatalog {
        self.engine.catalog()
    }

    pub fn progress(&self, answers: &AnswerMap) -> AssessmentProgress {
        AssessmentProgress::measure(self.catalog(), answers)
    }

    pub fn score(&self, answers: &AnswerMap) -> AggregateResult<'static> {
        self.engine.score_all(answers)
    }

    /// Score and compose without touching the session store. Incomplete input is
    /// scored leniently, with missing answers counted as the lowest option.
    pub fn evaluate(&self, answers: &AnswerMap) -> Result<AssessmentOutcome, AssessmentServiceError> {
        let progress = self.progress(answers);
        let scores = self.engine.score_all(answers);
        let letter = self.composer.compose(&scores)?;
        let summary = scores.summary();

        Ok(AssessmentOutcome {
            progress,
            scores,
            summary,
            letter,
        })
    }

    /// Store a finished answer map. Sessions only accept complete assessments.
    pub fn submit(
        &self,
        session: SessionId,
        answers: AnswerMap,
    ) -> Result<AssessmentProgress, AssessmentServiceError> {
        let progress = self.progress(&answers).ensure_complete()?;
        self.store.save(session.clone(), answers)?;
        info!(%session, answered = progress.answered, "assessment submitted");
        Ok(progress)
    }

    /// Results for a stored session. A session never written is `NotFound`, not a default score.
    pub fn results(&self, session: &SessionId) -> Result<AssessmentOutcome, AssessmentServiceError> {
        let answers = self
            .store
            .load(session)?
            .ok_or_else(|| SessionStoreError::NotFound(session.clone()))?;
        self.evaluate(&answers)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Answers(#[from] AnswerError),
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}
