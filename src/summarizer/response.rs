//! Decoding completion responses.
//!
//! The service puts the summary in `choices[0].message.content` as a JSON
//! string, so a successful body is decoded twice: once for the envelope and
//! once for the summary object inside it.

use reqwest::StatusCode;
use tracing::debug;

use crate::summarizer::{
    errors::SummarizeError,
    types::{ErrorEnvelope, Summary, SummarizationResponse},
};

pub fn parse_response(status: StatusCode, body: &[u8]) -> Result<Summary, SummarizeError> {
    if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(body)
        && !envelope.error.message.is_empty()
    {
        let error = envelope.error;
        return Err(SummarizeError::Remote {
            message: error.message,
            kind: error.kind.unwrap_or_default(),
            code: error.code.map(code_to_string).unwrap_or_default(),
            failed_generation: error.failed_generation.unwrap_or_default(),
        });
    }

    let response: SummarizationResponse =
        serde_json::from_slice(body).map_err(|source| SummarizeError::Protocol {
            status: status.as_u16(),
            source,
        })?;

    if let Some(usage) = &response.usage {
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            total_tokens = usage.total_tokens,
            "completion usage"
        );
    }

    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or(SummarizeError::EmptyResponse)?;

    let content = choice.message.content.unwrap_or_default();
    serde_json::from_str(&content).map_err(SummarizeError::MalformedSummary)
}

fn code_to_string(code: serde_json::Value) -> String {
    match code {
        serde_json::Value::String(code) => code,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
