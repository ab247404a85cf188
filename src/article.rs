use serde::{Deserialize, Serialize};
use url::Url;

use crate::{extractor::Extracted, summarizer::Summary};

/// One page moving through the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub url: Url,
    pub title: String,
    pub content: String,
    pub summary: Option<Summary>,
}

impl Article {
    pub fn new(url: Url, extracted: Extracted) -> Self {
        Self {
            url,
            title: extracted.title,
            content: extracted.content,
            summary: None,
        }
    }

    pub fn attach_summary(&mut self, summary: Summary) {
        self.summary = Some(summary);
    }

    /// Names of the fields still missing before the article can be exported.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }

        match &self.summary {
            None => missing.push("summary"),
            Some(summary) => {
                if summary.summary.trim().is_empty() {
                    missing.push("summary text");
                }
                if summary.keypoints.is_empty() {
                    missing.push("keypoints");
                }
                if summary.tags.is_empty() {
                    missing.push("tags");
                }
            }
        }

        missing
    }
}
