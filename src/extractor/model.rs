use serde::{Deserialize, Serialize};

/// Title and readable text pulled out of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extracted {
    pub title: String,
    pub content: String,
}

/// Collapse every whitespace run, newlines included, to a single space.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
