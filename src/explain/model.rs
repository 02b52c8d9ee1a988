use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationPart {
    pub text: String,
    /// Empty only when no rule matched the element.
    pub gloss: String,
}

impl ExplanationPart {
    pub fn new(text: impl Into<String>, gloss: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            gloss: gloss.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternExplanation {
    pub pattern: String,
    pub parts: Vec<ExplanationPart>,
    pub summary: String,
}
