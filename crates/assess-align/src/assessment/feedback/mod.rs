mod letter;
mod templates;

pub use letter::FeedbackLetter;
pub use templates::{
    closing_paragraph, overall_phrase, standard_entries, FeedbackTemplates, TemplateEntry,
};

use std::sync::OnceLock;

use tracing::debug;

use super::catalog::{CatalogError, QuestionCatalog};
use super::scoring::AggregateResult;
use templates::{ATTRIBUTION, INTRODUCTION, SALUTATION, SECTION_BREAK, SIGN_OFF};

static STANDARD_COMPOSER: OnceLock<Result<FeedbackComposer, CatalogError>> = OnceLock::new();

/// Turns an aggregate result into the narrative letter.
#[derive(Debug, Clone)]
pub struct FeedbackComposer {
    templates: FeedbackTemplates,
}

impl FeedbackComposer {
    /// Builds a composer, refusing templates that do not cover every catalog dimension and rating.
    pub fn new(catalog: &QuestionCatalog, templates: FeedbackTemplates) -> Result<Self, CatalogError> {
        templates.ensure_complete(catalog)?;
        Ok(Self { templates })
    }

    /// Composer over the standard catalog and templates, validated on first use.
    pub fn standard() -> Result<&'static FeedbackComposer, CatalogError> {
        STANDARD_COMPOSER
            .get_or_init(|| {
                let templates = FeedbackTemplates::standard()?;
                Self::new(QuestionCatalog::standard(), templates)
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn templates(&self) -> &FeedbackTemplates {
        &self.templates
    }

    /// Deterministic letter text. A missing template is reported, never skipped; it can
    /// only happen when the result was scored against a different catalog.
    pub fn compose(&self, result: &AggregateResult<'_>) -> Result<FeedbackLetter, CatalogError> {
        let overall = result.overall.rating;
        let mut lines = vec![
            SALUTATION.to_string(),
            String::new(),
            INTRODUCTION.to_string(),
            String::new(),
            format!(
                "Our overall assessment is {}. Below is our feedback on each dimension.",
                overall_phrase(overall)
            ),
        ];

        for entry in &result.dimensions {
            let rating = entry.result.rating;
            let paragraph = self
                .templates
                .paragraph(entry.dimension.id, rating)
                .ok_or_else(|| CatalogError::MissingTemplate {
                    dimension: entry.dimension.id.to_string(),
                    rating,
                })?;

            lines.push(String::new());
            lines.push(format!("--- {} ---", entry.dimension.title));
            lines.push(String::new());
            lines.push(paragraph.to_string());
        }

        lines.extend([
            String::new(),
            SECTION_BREAK.to_string(),
            String::new(),
            closing_paragraph(overall).to_string(),
            String::new(),
            ATTRIBUTION.to_string(),
            String::new(),
            SIGN_OFF.to_string(),
        ]);

        debug!(
            dimensions = result.dimensions.len(),
            overall_rating = %overall,
            "composed feedback letter"
        );

        Ok(FeedbackLetter::from_lines(lines))
    }
}

/// Letter for a result scored against the standard catalog.
pub fn generate_feedback(result: &AggregateResult<'_>) -> Result<FeedbackLetter, CatalogError> {
    FeedbackComposer::standard()?.compose(result)
}
