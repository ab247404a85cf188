//! Rendering a summarized article into the markdown template and writing it
//! to the output folder.

use chrono::{Local, NaiveDate};
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{info, instrument};

use crate::article::Article;

pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/article-template.md");

// Substituted text is never rescanned, so tokens inside article text stay literal.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(title|url|created|summary|keypoints|tags)\}\}").unwrap()
});

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("article is incomplete, missing: {}", .missing.join(", "))]
    Incomplete { missing: Vec<&'static str> },

    #[error("writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fill `template` with the article's fields.
pub fn render(article: &Article, template: &str, created: NaiveDate) -> Result<String, ExportError> {
    let missing = article.missing_fields();
    let Some(summary) = article.summary.as_ref().filter(|_| missing.is_empty()) else {
        return Err(ExportError::Incomplete { missing });
    };

    let rendered = TOKEN_REGEX.replace_all(template, |caps: &Captures| match &caps[1] {
        "title" => article.title.clone(),
        "url" => article.url.to_string(),
        "created" => created.format("%Y-%m-%d").to_string(),
        "summary" => summary.summary.clone(),
        "keypoints" => bullet_list(&summary.keypoints),
        "tags" => bullet_list(&summary.tags),
        _ => caps[0].to_string(),
    });

    Ok(rendered.into_owned())
}

/// Render the article and write it to `<folder>/<title>.md`.
#[instrument(skip(article, template), fields(title = %article.title))]
pub async fn export_article(
    folder: &Path,
    article: &Article,
    template: &str,
) -> Result<PathBuf, ExportError> {
    let document = render(article, template, Local::now().date_naive())?;
    let path = folder.join(format!("{}.md", article.title));

    tokio::fs::create_dir_all(folder)
        .await
        .map_err(|source| ExportError::Write {
            path: folder.to_path_buf(),
            source,
        })?;
    tokio::fs::write(&path, document)
        .await
        .map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

    info!(path = %path.display(), "article written");
    Ok(path)
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
