//! Equity rubric: question catalog, scoring, and feedback letter composition.
//!
//! Scoring and composition are pure functions over immutable configuration. The
//! session store and HTTP router are the only pieces that touch shared state.

mod catalog;
pub mod domain;
mod feedback;
mod progress;
pub mod report;
pub mod router;
mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use catalog::{standard_dimensions, CatalogError, QuestionCatalog};
pub use domain::{AnswerMap, AnswerOption, Dimension, Question, Rating, ANSWER_OPTIONS};
pub use feedback::{
    closing_paragraph, generate_feedback, overall_phrase, standard_entries, FeedbackComposer,
    FeedbackLetter, FeedbackTemplates, TemplateEntry,
};
pub use progress::{AnswerError, AssessmentProgress};
pub use report::{AssessmentSummary, DimensionCard, OverallVerdict};
pub use router::assessment_router;
pub use scoring::{
    score_all, score_dimension, AggregateResult, DimensionResult, DimensionScore, OverallResult,
    RatedScore, ScoringEngine,
};
pub use service::{AssessmentOutcome, AssessmentService, AssessmentServiceError};
pub use session::{SessionId, SessionStore, SessionStoreError};

use tracing::info;

/// Startup check over the standard catalog and template table. Call before serving traffic.
pub fn validate_standard() -> Result<&'static FeedbackComposer, CatalogError> {
    let catalog = QuestionCatalog::new(standard_dimensions())?;
    let composer = FeedbackComposer::standard()?;
    composer.templates().ensure_complete(&catalog)?;

    info!(
        dimensions = catalog.dimensions().len(),
        questions = catalog.total_questions(),
        "assessment rubric validated"
    );
    Ok(composer)
}
