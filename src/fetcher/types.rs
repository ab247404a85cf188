use chrono::{DateTime, Utc};
use encoding_rs::Encoding;
use reqwest::StatusCode;
use url::Url;

/// A fetched page, decoded to UTF-8 and ready for extraction.
#[derive(Debug)]
pub struct Page {
    pub url_final: Url,
    pub status: StatusCode,
    pub content_type: String,
    pub encoding: &'static Encoding,
    pub body: String,
    pub fetched_at: DateTime<Utc>,
}
