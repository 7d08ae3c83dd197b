use std::path::PathBuf;

use anyhow::Context;
use blog_summarizer::{
    ai::GroqClient, extractor::ArticleExtractor, pipeline, utils, ContentExtractor, Language,
};
use clap::Parser;
use dotenv::dotenv;
use std::env;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Blog post URL to summarize
    #[arg(short, long)]
    url: String,

    /// Summary language: english or urdu
    #[arg(short, long, default_value = "english")]
    lang: String,

    /// Directory for fulltext.json and summary.txt
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Only extract the article text
    #[arg(short, long)]
    skip_ai: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let language = Language::parse(&args.lang);

    let extractor = ArticleExtractor::new()?;
    let full_text = extractor
        .extract(&args.url)
        .await
        .with_context(|| format!("extracting {}", args.url))?;

    let output = serde_json::json!({ "url": args.url, "text": full_text });
    utils::save_json(&output, &args.output_dir.join("fulltext.json"))?;

    if args.skip_ai {
        return Ok(());
    }

    let api_key = env::var("GROQ_API_KEY").context("GROQ_API_KEY environment variable not set")?;
    let chat = GroqClient::new(api_key);
    let summary = pipeline::summarize_text(&chat, &full_text, language)
        .await
        .context("generating summary")?;

    utils::save_text(&summary, &args.output_dir.join("summary.txt"))?;
    println!("{summary}");

    Ok(())
}
