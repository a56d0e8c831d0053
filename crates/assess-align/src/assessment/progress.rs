use serde::Serialize;

use super::catalog::QuestionCatalog;
use super::domain::AnswerMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("assessment incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },
}

/// How far an evaluator has got through the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssessmentProgress {
    pub answered: usize,
    pub total: usize,
    pub remaining: usize,
    pub complete: bool,
}

impl AssessmentProgress {
    /// Counts catalog questions holding a valid option. Unknown keys and bad values do not count.
    pub fn measure(catalog: &QuestionCatalog, answers: &AnswerMap) -> Self {
        let total = catalog.total_questions();
        let answered = catalog
            .questions()
            .filter(|(_, question)| answers.option_for(question.id).is_some())
            .count();
        let remaining = total - answered;

        Self {
            answered,
            total,
            remaining,
            complete: remaining == 0,
        }
    }

    pub fn ensure_complete(self) -> Result<Self, AnswerError> {
        if self.complete {
            Ok(self)
        } else {
            Err(AnswerError::Incomplete {
                answered: self.answered,
                total: self.total,
            })
        }
    }

    pub fn status_line(&self) -> String {
        match self.remaining {
            0 => "All questions answered, ready to see results".to_string(),
            1 => "1 question remaining".to_string(),
            remaining => format!("{remaining} questions remaining"),
        }
    }
}
