use tracing::warn;

use super::super::domain::{AnswerMap, Dimension, Question};
use super::RatedScore;

/// Per-question score. Unanswered and unrecognized values score as the lowest option.
pub(crate) fn question_score(answers: &AnswerMap, question: &Question) -> u8 {
    match answers.get(question.id) {
        None => 0,
        Some(value) => match answers.option_for(question.id) {
            Some(option) => option.score,
            None => {
                warn!(
                    question = question.id,
                    value, "unrecognized answer value scored as the lowest option"
                );
                0
            }
        },
    }
}

pub(crate) fn mean<I>(scores: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (total, count) = scores
        .into_iter()
        .fold((0.0, 0usize), |(total, count), score| (total + score, count + 1));

    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}

pub(crate) fn score_dimension(answers: &AnswerMap, dimension: &Dimension) -> RatedScore {
    let average = mean(
        dimension
            .questions
            .iter()
            .map(|question| f64::from(question_score(answers, question))),
    );

    RatedScore::from_score(average)
}
