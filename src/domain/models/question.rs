use serde::{Deserialize, Serialize};

/// The raw text a user submitted for one request.
///
/// Whitespace is trimmed only to decide whether the question is blank; the
/// untrimmed original is what gets sent to the completion endpoint. Callers
/// must not normalize the payload on the way out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The untrimmed text, exactly as entered.
    pub fn raw(&self) -> &str {
        &self.text
    }

    /// True when nothing remains after trimming leading/trailing whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

impl From<&str> for Question {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
