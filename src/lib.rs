pub mod article;
pub mod config;
pub mod error;
pub mod export;
pub mod extractor;
pub mod fetcher;
pub mod filename;
pub mod pipeline;
pub mod summarizer;

pub use article::Article;
pub use error::ReportError;
pub use pipeline::Pipeline;
