// src/main.rs

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use objectlens::classifier::HttpClassifier;
use objectlens::config::CONFIG;
use objectlens::knowledge::WikiClient;
use objectlens::resolver::Resolver;

/// Identify the dominant object in a photo and look it up.
#[derive(Parser, Debug)]
#[command(name = "objectlens", version)]
struct Args {
    /// Path to the image file to resolve
    image: PathBuf,

    /// Log level (overrides OBJECTLENS_LOG_LEVEL)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level_str = args.log_level.as_deref().unwrap_or(&CONFIG.log_level);
    let level = Level::from_str(level_str).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Knowledge API: {}", CONFIG.wiki_api_url);
    info!("Inference endpoint: {}", CONFIG.inference_url);

    let image = tokio::fs::read(&args.image).await?;

    let classifier = Arc::new(HttpClassifier::new()?);
    let wiki = WikiClient::new()?;
    let resolver = Resolver::new(classifier, wiki);

    let resolved = resolver.resolve(&image).await?;

    println!("{}", resolved.title);
    if !resolved.description.is_empty() {
        println!("\n{}", resolved.description);
    }
    match resolved.image_url {
        Some(url) => println!("\nImage: {url}"),
        None => println!("\nImage: (no matching photo found)"),
    }

    Ok(())
}
