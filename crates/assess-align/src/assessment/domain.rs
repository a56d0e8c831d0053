use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Lower bound (inclusive) of the green band.
pub const GREEN_THRESHOLD: f64 = 1.5;
/// Lower bound (inclusive) of the amber band.
pub const AMBER_THRESHOLD: f64 = 0.5;

/// Three-band classification shared by answers, dimensions, and the overall result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Green,
    Amber,
    Red,
}

impl Rating {
    pub const fn ordered() -> [Self; 3] {
        [Self::Green, Self::Amber, Self::Red]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
        }
    }

    /// Score card label shown next to a rated dimension.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Strong",
            Self::Amber => "Needs Attention",
            Self::Red => "Concerning",
        }
    }

    pub fn color(self) -> &'static str {
        self.option().color
    }

    pub fn option(self) -> &'static AnswerOption {
        match self {
            Self::Green => &ANSWER_OPTIONS[0],
            Self::Amber => &ANSWER_OPTIONS[1],
            Self::Red => &ANSWER_OPTIONS[2],
        }
    }

    /// Classifies a mean score. Anything that is not at least amber, NaN included, is red.
    pub fn for_score(score: f64) -> Self {
        if score >= GREEN_THRESHOLD {
            Self::Green
        } else if score >= AMBER_THRESHOLD {
            Self::Amber
        } else {
            Self::Red
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the three selectable responses to a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: Rating,
    pub label: &'static str,
    pub score: u8,
    pub color: &'static str,
}

pub static ANSWER_OPTIONS: [AnswerOption; 3] = [
    AnswerOption {
        value: Rating::Green,
        label: "Yes",
        score: 2,
        color: "#22C55E",
    },
    AnswerOption {
        value: Rating::Amber,
        label: "Partly",
        score: 1,
        color: "#F59E0B",
    },
    AnswerOption {
        value: Rating::Red,
        label: "No",
        score: 0,
        color: "#EF4444",
    },
];

impl AnswerOption {
    /// Matches a stored answer against the option values. Unknown values resolve to nothing.
    pub fn resolve(value: &str) -> Option<&'static AnswerOption> {
        ANSWER_OPTIONS
            .iter()
            .find(|option| option.value.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

/// Evaluation category made of an ordered list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dimension {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub questions: Vec<Question>,
}

/// Answers keyed by question identifier, holding the raw stored value.
///
/// Values are kept as strings so that anything outside the three options can
/// still reach the scorer, where it is treated as the lowest answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, String>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(question_id.into(), value.into());
    }

    pub fn with(mut self, question_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.record(question_id, value);
        self
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    /// Resolved option for a question, `None` when unanswered or unrecognized.
    pub fn option_for(&self, question_id: &str) -> Option<&'static AnswerOption> {
        self.get(question_id).and_then(AnswerOption::resolve)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(question, value)| (question.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(question, value)| (question.into(), value.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for AnswerMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|(question, value)| {
                let value = match value {
                    serde_json::Value::String(text) => text,
                    other => other.to_string(),
                };
                (question, value)
            })
            .collect())
    }
}
