//! The single linear run: fetch, extract, fix the title, summarize, export.

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};
use url::Url;

use crate::{
    article::Article,
    error::ReportError,
    export::export_article,
    extractor::extract_article,
    fetcher::fetch,
    filename::{TitleCorrector, is_valid_filename},
    summarizer::Summarize,
};

pub struct Pipeline<S> {
    summarizer: S,
    system_prompt: String,
    api_key: String,
    template: String,
}

impl<S: Summarize> Pipeline<S> {
    pub fn new(
        summarizer: S,
        system_prompt: impl Into<String>,
        api_key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            summarizer,
            system_prompt: system_prompt.into(),
            api_key: api_key.into(),
            template: template.into(),
        }
    }

    /// Fetch `url` and pull out its title and readable text.
    pub async fn scrape_article(&self, url: &str) -> Result<Article, ReportError> {
        let page = fetch(url).await.map_err(|source| ReportError::Fetch {
            url: url.to_string(),
            source,
        })?;

        let extracted = extract_article(&page.body)?;
        info!(title = %extracted.title, chars = extracted.content.len(), "article scraped");

        Ok(Article::new(requested_url(url, page.url_final), extracted))
    }

    /// Make sure the title can name the output file, asking for a new one if not.
    pub fn ensure_valid_title(
        &self,
        article: &mut Article,
        corrector: &mut dyn TitleCorrector,
    ) -> Result<(), ReportError> {
        if !is_valid_filename(&article.title) {
            warn!(title = %article.title, "title is not a valid filename");
            article.title = corrector.correct(&article.title)?;
        }
        Ok(())
    }

    pub async fn summarize(&self, article: &mut Article) -> Result<(), ReportError> {
        let summary = self
            .summarizer
            .summarize(&article.content, &self.system_prompt, &self.api_key)
            .await?;
        article.attach_summary(summary);
        Ok(())
    }

    /// Run every stage for one URL and return the path of the written document.
    #[instrument(skip(self, output_folder, corrector))]
    pub async fn run(
        &self,
        url: &str,
        output_folder: &Path,
        corrector: &mut dyn TitleCorrector,
    ) -> Result<PathBuf, ReportError> {
        let mut article = self.scrape_article(url).await?;
        self.ensure_valid_title(&mut article, corrector)?;
        self.summarize(&mut article).await?;

        Ok(export_article(output_folder, &article, &self.template).await?)
    }
}

// The requested URL (normalized), not the post-redirect one.
fn requested_url(url: &str, fetched: Url) -> Url {
    Url::parse(url).unwrap_or(fetched)
}
