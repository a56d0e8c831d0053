mod rules;

use serde::Serialize;
use tracing::debug;

use super::catalog::QuestionCatalog;
use super::domain::{AnswerMap, Dimension, Rating};

/// Mean score with its band and band color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatedScore {
    pub score: f64,
    pub rating: Rating,
    pub color: &'static str,
}

impl RatedScore {
    pub fn from_score(score: f64) -> Self {
        let rating = Rating::for_score(score);
        Self {
            score,
            rating,
            color: rating.color(),
        }
    }
}

pub type DimensionResult = RatedScore;
pub type OverallResult = RatedScore;

/// A catalog dimension paired with its result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore<'a> {
    #[serde(flatten)]
    pub dimension: &'a Dimension,
    pub result: DimensionResult,
}

/// Complete scored output: dimensions in catalog order plus the overall result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult<'a> {
    pub dimensions: Vec<DimensionScore<'a>>,
    pub overall: OverallResult,
}

impl AggregateResult<'_> {
    pub fn dimension(&self, id: &str) -> Option<&DimensionScore<'_>> {
        self.dimensions.iter().find(|entry| entry.dimension.id == id)
    }
}

/// Stateless scorer bound to a catalog.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    catalog: &'a QuestionCatalog,
}

impl ScoringEngine<'static> {
    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard())
    }
}

impl<'a> ScoringEngine<'a> {
    pub fn new(catalog: &'a QuestionCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a QuestionCatalog {
        self.catalog
    }

    pub fn score_dimension(&self, answers: &AnswerMap, dimension: &Dimension) -> DimensionResult {
        score_dimension(answers, dimension)
    }

    /// Scores every dimension with equal weight, regardless of its question count.
    pub fn score_all(&self, answers: &AnswerMap) -> AggregateResult<'a> {
        let dimensions: Vec<DimensionScore<'a>> = self
            .catalog
            .dimensions()
            .iter()
            .map(|dimension| DimensionScore {
                dimension,
                result: score_dimension(answers, dimension),
            })
            .collect();

        let overall = OverallResult::from_score(rules::mean(
            dimensions.iter().map(|entry| entry.result.score),
        ));

        debug!(
            answered = answers.len(),
            overall_score = overall.score,
            overall_rating = %overall.rating,
            "scored assessment"
        );

        AggregateResult {
            dimensions,
            overall,
        }
    }
}

/// Scores one dimension. A dimension without questions scores zero.
pub fn score_dimension(answers: &AnswerMap, dimension: &Dimension) -> DimensionResult {
    rules::score_dimension(answers, dimension)
}

/// Scores the standard catalog.
pub fn score_all(answers: &AnswerMap) -> AggregateResult<'static> {
    ScoringEngine::standard().score_all(answers)
}
