use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("building http client: {0}")]
    Client(String),

    #[error("encoding request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("sending request: {0}")]
    Transport(String),

    #[error("API error: {message} (type: {kind}, code: {code}, failed generation: {failed_generation})")]
    Remote {
        message: String,
        kind: String,
        code: String,
        failed_generation: String,
    },

    #[error("unexpected response (status {status}): {source}")]
    Protocol {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("no choices in response")]
    EmptyResponse,

    #[error("malformed summary content: {0}")]
    MalformedSummary(#[source] serde_json::Error),
}
