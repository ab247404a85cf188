use thiserror::Error;

use crate::{
    export::ExportError, extractor::ExtractError, fetcher::FetchError, filename::FilenameError,
    summarizer::SummarizeError,
};

/// A failed run, tagged with the stage that failed.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("getting page at '{url}'")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("scraping article")]
    Extract(#[from] ExtractError),

    #[error("correcting article title")]
    Title(#[from] FilenameError),

    #[error("summarizing article")]
    Summarize(#[from] SummarizeError),

    #[error("exporting article")]
    Export(#[from] ExportError),
}
