pub mod cleaner;
pub mod errors;
pub mod markup;
pub mod model;

#[cfg(test)]
mod tests;

pub use cleaner::clean_text;
pub use errors::ExtractError;
pub use markup::{extract_body, extract_title};
pub use model::Extracted;

use tracing::debug;

/// Pull the headline and readable body text out of page markup.
///
/// The headline is removed from the body before cleaning so the text handed
/// to the summarizer does not open with a copy of the title.
pub fn extract_article(markup: &str) -> Result<Extracted, ExtractError> {
    let title = markup::extract_title(markup)?;
    let body = markup::extract_body(markup)?;

    let content = cleaner::clean_text(&markup::strip_headline(body));
    if content.is_empty() {
        return Err(ExtractError::EmptyContent);
    }

    debug!(
        title_len = title.len(),
        body_len = body.len(),
        content_len = content.len(),
        "article extracted"
    );

    Ok(Extracted {
        title: title.to_string(),
        content,
    })
}
