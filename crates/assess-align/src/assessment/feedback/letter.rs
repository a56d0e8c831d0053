use std::fmt;

use serde::Serialize;

/// Plain-text feedback letter, paragraphs separated by blank lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FeedbackLetter(String);

impl FeedbackLetter {
    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        Self(lines.join("\n"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.0.split("\n\n")
    }
}

impl fmt::Display for FeedbackLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FeedbackLetter {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
