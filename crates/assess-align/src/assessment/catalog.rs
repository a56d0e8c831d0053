use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;

use super::domain::{AnswerOption, Dimension, Question, Rating, ANSWER_OPTIONS};

static STANDARD_CATALOG: OnceLock<QuestionCatalog> = OnceLock::new();

/// Defects in the static rubric configuration. None of these are recoverable at runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog defines no dimensions")]
    EmptyCatalog,
    #[error("dimension '{0}' has no questions")]
    EmptyDimension(String),
    #[error("dimension '{0}' is defined more than once")]
    DuplicateDimension(String),
    #[error("question '{0}' is defined more than once")]
    DuplicateQuestion(String),
    #[error("no feedback template for dimension '{dimension}' rated {rating}")]
    MissingTemplate { dimension: String, rating: Rating },
    #[error("feedback template for dimension '{dimension}' rated {rating} is defined more than once")]
    DuplicateTemplate { dimension: String, rating: Rating },
    #[error("feedback templates reference unknown dimension '{0}'")]
    UnknownTemplateDimension(String),
}

/// Ordered, immutable set of dimensions. Catalog order drives display and letter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    dimensions: Vec<Dimension>,
}

impl QuestionCatalog {
    pub fn new(dimensions: Vec<Dimension>) -> Result<Self, CatalogError> {
        if dimensions.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut dimension_ids = HashSet::new();
        let mut question_ids = HashSet::new();
        for dimension in &dimensions {
            if !dimension_ids.insert(dimension.id) {
                return Err(CatalogError::DuplicateDimension(dimension.id.to_string()));
            }
            if dimension.questions.is_empty() {
                return Err(CatalogError::EmptyDimension(dimension.id.to_string()));
            }
            for question in &dimension.questions {
                if !question_ids.insert(question.id) {
                    return Err(CatalogError::DuplicateQuestion(question.id.to_string()));
                }
            }
        }

        Ok(Self { dimensions })
    }

    /// The built-in five-dimension equity rubric, constructed once per process.
    pub fn standard() -> &'static QuestionCatalog {
        STANDARD_CATALOG.get_or_init(|| Self {
            dimensions: standard_dimensions(),
        })
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn dimension(&self, id: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|dimension| dimension.id == id)
    }

    pub fn questions(&self) -> impl Iterator<Item = (&Dimension, &Question)> {
        self.dimensions.iter().flat_map(|dimension| {
            dimension
                .questions
                .iter()
                .map(move |question| (dimension, question))
        })
    }

    pub fn total_questions(&self) -> usize {
        self.dimensions
            .iter()
            .map(|dimension| dimension.questions.len())
            .sum()
    }

    pub fn answer_options(&self) -> &'static [AnswerOption] {
        &ANSWER_OPTIONS
    }
}

pub fn standard_dimensions() -> Vec<Dimension> {
    vec![
        Dimension {
            id: "community-voice",
            title: "Community Voice",
            description: "How well does this proposal centre the community it claims to serve?",
            icon: "\u{1F5E3}\u{FE0F}",
            questions: vec![
                Question {
                    id: "cv-1",
                    text: "Was the research question developed with the community it affects?",
                    hint: Some("Look for evidence of community consultation in the proposal design stage — not just recruitment."),
                },
                Question {
                    id: "cv-2",
                    text: "Will community members be involved in design, delivery, or analysis?",
                    hint: Some("Meaningful involvement means decision-making power, not just being a \"participant\" or \"advisor\"."),
                },
            ],
        },
        Dimension {
            id: "power-ownership",
            title: "Power & Ownership",
            description: "Who holds the power, the purse, and the pen?",
            icon: "\u{2696}\u{FE0F}",
            questions: vec![
                Question {
                    id: "po-1",
                    text: "Who owns the data? Who controls how findings are used?",
                    hint: Some("Check whether the community retains any rights over data use, publication, or future applications."),
                },
                Question {
                    id: "po-2",
                    text: "Is funding shared equitably, or does the community just provide access?",
                    hint: Some("Look at budget breakdowns. Does the community org receive fair compensation or just a token honorarium?"),
                },
            ],
        },
        Dimension {
            id: "cultural-sensitivity",
            title: "Cultural Sensitivity",
            description: "Does this research understand who it's working with?",
            icon: "\u{1F30D}",
            questions: vec![
                Question {
                    id: "cs-1",
                    text: "Does the methodology respect cultural context, rather than transplanting frameworks from other communities?",
                    hint: Some("Western academic frameworks often pathologise Black experiences. Look for culturally grounded approaches."),
                },
                Question {
                    id: "cs-2",
                    text: "Are the researchers from, or deeply connected to, the community?",
                    hint: Some("Lived experience isn't the only credential, but disconnection from the community is a red flag."),
                },
            ],
        },
        Dimension {
            id: "benefit-access",
            title: "Benefit & Access",
            description: "Will the community actually benefit from this work?",
            icon: "\u{1F4D6}",
            questions: vec![
                Question {
                    id: "ba-1",
                    text: "Will findings be accessible to participants — not just locked behind journal paywalls?",
                    hint: Some("Accessible means plain-language summaries, community presentations, or open-access publication."),
                },
                Question {
                    id: "ba-2",
                    text: "Does the research address a priority identified by the community itself?",
                    hint: Some("Was this topic chosen because the community asked for it, or because a funder thought it was interesting?"),
                },
            ],
        },
        Dimension {
            id: "track-record",
            title: "Track Record & Accountability",
            description: "What's their history, and what happens if things go wrong?",
            icon: "\u{1F4CB}",
            questions: vec![
                Question {
                    id: "tr-1",
                    text: "Have the researchers worked with Black communities before? What happened?",
                    hint: Some("Ask for references. Previous community partners can tell you more than any proposal document."),
                },
                Question {
                    id: "tr-2",
                    text: "Is there a feedback mechanism if the partnership isn't working?",
                    hint: Some("A clear exit clause and regular check-ins show the researchers take accountability seriously."),
                },
            ],
        },
    ]
}
