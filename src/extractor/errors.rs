use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no h1 found in page content")]
    TitleNotFound,

    #[error("no body found in page content")]
    BodyNotFound,

    #[error("page body contains no readable text")]
    EmptyContent,
}
