use async_trait::async_trait;
use reqwest::{Client, ClientBuilder, header};
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

use crate::summarizer::{
    errors::SummarizeError, request::build_request, response::parse_response, types::Summary,
};

pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Anything that can turn article text into a [`Summary`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarize: Send + Sync {
    async fn summarize(
        &self,
        content: &str,
        system_instruction: &str,
        api_key: &str,
    ) -> Result<Summary, SummarizeError>;
}

/// Chat-completion client. Makes exactly one request per call, no retries.
#[derive(Debug, Clone)]
pub struct SummaryClient {
    http: Client,
    endpoint: Url,
}

impl SummaryClient {
    pub fn new(endpoint: &str) -> Result<Self, SummarizeError> {
        let endpoint = Url::parse(endpoint)?;
        let http = ClientBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SummarizeError::Client(e.to_string()))?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Summarize for SummaryClient {
    #[instrument(skip_all, fields(content_len = content.len()))]
    async fn summarize(
        &self,
        content: &str,
        system_instruction: &str,
        api_key: &str,
    ) -> Result<Summary, SummarizeError> {
        let request = build_request(content, system_instruction);
        let payload = serde_json::to_vec(&request).map_err(SummarizeError::Encode)?;

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(api_key)
            .body(payload)
            .send()
            .await
            .map_err(|e| SummarizeError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SummarizeError::Transport(e.to_string()))?;

        debug!(
            endpoint = %self.endpoint,
            status = %status,
            bytes = body.len(),
            "completion response received"
        );

        let summary = parse_response(status, &body)?;
        info!(
            keypoints = summary.keypoints.len(),
            tags = summary.tags.len(),
            "summary received"
        );

        Ok(summary)
    }
}
