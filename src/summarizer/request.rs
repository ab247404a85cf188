use crate::summarizer::types::{ChatMessage, ResponseFormat, SummarizationRequest};

/// Fixed sampling parameters for every summarization request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestPolicy {
    pub model: &'static str,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub stream: bool,
    pub response_format: &'static str,
}

pub const REQUEST_POLICY: RequestPolicy = RequestPolicy {
    model: "llama-3.1-8b-instant",
    temperature: 1.0,
    max_tokens: 1024,
    top_p: 1.0,
    stream: false,
    response_format: "json_object",
};

/// A system message with the instruction, then the article text verbatim.
pub fn build_request(content: &str, system_instruction: &str) -> SummarizationRequest {
    let policy = REQUEST_POLICY;

    SummarizationRequest {
        messages: vec![
            ChatMessage::system(system_instruction),
            ChatMessage::user(content),
        ],
        model: policy.model,
        temperature: policy.temperature,
        max_tokens: policy.max_tokens,
        top_p: policy.top_p,
        stream: policy.stream,
        response_format: ResponseFormat {
            kind: policy.response_format,
        },
        stop: None,
    }
}
