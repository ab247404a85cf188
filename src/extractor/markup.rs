//! Locating the headline and body container in raw page markup.
//!
//! These work on the markup text directly rather than on a parsed tree so the
//! headline is returned exactly as written, nested tags included.

use regex::Regex;
use std::sync::LazyLock;

use crate::extractor::errors::ExtractError;

static HEADLINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<h1(?:\s[^>]*)?>(.*?)</h1\s*>").unwrap());

// A missing closing tag runs the body to the end of the document.
static BODY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body(?:\s[^>]*)?>(.*?)(?:</body\s*>|\z)").unwrap());

/// Inner markup of the first `<h1>`, verbatim.
pub fn extract_title(markup: &str) -> Result<&str, ExtractError> {
    first_capture(&HEADLINE_REGEX, markup).ok_or(ExtractError::TitleNotFound)
}

/// Inner markup of the first `<body>`, for [`clean_text`](super::cleaner::clean_text).
pub fn extract_body(markup: &str) -> Result<&str, ExtractError> {
    first_capture(&BODY_REGEX, markup).ok_or(ExtractError::BodyNotFound)
}

/// Drop the first `<h1>` element, which is already carried as the title.
pub fn strip_headline(body: &str) -> String {
    HEADLINE_REGEX.replacen(body, 1, "").into_owned()
}

fn first_capture<'a>(regex: &Regex, haystack: &'a str) -> Option<&'a str> {
    regex
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|inner| !inner.is_empty())
}
