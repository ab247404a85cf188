pub mod client;
pub mod errors;
pub mod request;
pub mod response;
pub mod types;

pub use client::{DEFAULT_ENDPOINT, Summarize, SummaryClient};
#[cfg(test)]
pub use client::MockSummarize;
pub use errors::SummarizeError;
pub use request::{REQUEST_POLICY, RequestPolicy, build_request};
pub use response::parse_response;
pub use types::Summary;
