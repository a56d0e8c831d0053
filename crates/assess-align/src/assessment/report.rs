use serde::Serialize;

use super::domain::Rating;
use super::scoring::{AggregateResult, DimensionScore};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub score: f64,
    pub rating: Rating,
    pub rating_label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallVerdict {
    pub score: f64,
    pub rating: Rating,
    pub rating_label: &'static str,
    pub color: &'static str,
    pub glyph: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

impl OverallVerdict {
    pub fn for_rating(score: f64, rating: Rating) -> Self {
        let (glyph, heading, body) = match rating {
            Rating::Green => (
                "\u{2713}",
                "This proposal looks strong",
                "The research partnership request demonstrates a solid commitment to equity, community voice, and mutual benefit. There are strong foundations for a productive collaboration.",
            ),
            Rating::Amber => (
                "!",
                "This proposal needs attention",
                "The request shows some positive elements but raises concerns in key areas. A conversation with the researchers about the issues flagged below could help determine whether the partnership can work.",
            ),
            Rating::Red => (
                "\u{2715}",
                "This proposal raises significant concerns",
                "The request has fundamental issues around equity, power, or community benefit that would need to be addressed before any partnership can proceed. The feedback below outlines what needs to change.",
            ),
        };

        Self {
            score,
            rating,
            rating_label: rating.label(),
            color: rating.color(),
            glyph,
            heading,
            body,
        }
    }
}

/// Presentation-ready view of an aggregate result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentSummary {
    pub dimensions: Vec<DimensionCard>,
    pub overall: OverallVerdict,
}

impl AggregateResult<'_> {
    pub fn summary(&self) -> AssessmentSummary {
        AssessmentSummary {
            dimensions: self.dimensions.iter().map(DimensionScore::to_card).collect(),
            overall: OverallVerdict::for_rating(self.overall.score, self.overall.rating),
        }
    }
}

impl DimensionScore<'_> {
    pub fn to_card(&self) -> DimensionCard {
        DimensionCard {
            id: self.dimension.id,
            title: self.dimension.title,
            description: self.dimension.description,
            icon: self.dimension.icon,
            score: self.result.score,
            rating: self.result.rating,
            rating_label: self.result.rating.label(),
            color: self.result.color,
        }
    }
}
