use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pagebrief::{
    config::Config, export::DEFAULT_TEMPLATE, filename::LinePrompt, pipeline::Pipeline,
    summarizer::SummaryClient,
};

const DEFAULT_SYSTEM_PROMPT: &str = include_str!("../templates/system-prompt.md");

/// Summarize a web article into a markdown note.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Folder the note is written to
    output_folder: PathBuf,

    /// Article to summarize
    url: String,

    /// Markdown template to use instead of the built-in one
    #[arg(long, value_name = "PATH")]
    template: Option<PathBuf>,

    /// Instruction file to send instead of the built-in system prompt
    #[arg(long, value_name = "PATH")]
    system_prompt: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;

    let template = read_or_default(cli.template.as_ref(), DEFAULT_TEMPLATE)
        .await
        .context("loading article template")?;
    let system_prompt = read_or_default(cli.system_prompt.as_ref(), DEFAULT_SYSTEM_PROMPT)
        .await
        .context("loading system prompt")?;

    let client = SummaryClient::new(config.api_url())?;
    let pipeline = Pipeline::new(client, system_prompt, config.api_key(), template);

    let path = pipeline
        .run(&cli.url, &cli.output_folder, &mut LinePrompt::stdio())
        .await?;

    println!("Article created successfully: {}", path.display());
    Ok(())
}

async fn read_or_default(path: Option<&PathBuf>, default: &str) -> Result<String> {
    match path {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display())),
        None => Ok(default.to_string()),
    }
}
