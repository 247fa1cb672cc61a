//! Batch extractor: parses one raw blog post dump into semi-structured JSON.
//!
//! ```sh
//! blog_review_extract -i "./data/origin/cafe latte.json" -o ./data/semi-structured
//! ```

use blog_review_extract::cli::Cli;
use blog_review_extract::config::{load_config, ExtractConfig};
use blog_review_extract::outputs::json;
use blog_review_extract::pipeline::parse_articles;
use blog_review_extract::utils::ensure_writable_dir;
use clap::Parser;
use itertools::Itertools;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("blog_review_extract starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match args.config.as_deref() {
        Some(path) => load_config(path)?,
        None => ExtractConfig::default(),
    }
    .with_overrides(args.concurrency, args.pretty);
    info!(concurrency = config.concurrency, pretty = config.pretty, "Effective configuration");

    // Early check: ensure output dir is writable before parsing anything
    if let Err(e) = ensure_writable_dir(&args.output_dir).await {
        error!(
            path = %args.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let raws = json::read_raw_articles(&args.input).await?;
    let total = raws.len();

    let articles = parse_articles(raws, config.concurrency).await;

    let by_version = articles.iter().counts_by(|article| article.version);
    for (version, count) in by_version.iter().sorted_by_key(|(_, count)| std::cmp::Reverse(**count)) {
        info!(?version, count, "Articles per editor layout");
    }
    let records: usize = articles.iter().map(|article| article.contents.len()).sum();
    let media: usize = articles.iter().map(|article| article.archivable_media().count()).sum();
    info!(total, parsed = articles.len(), records, media, "Completed parsing");

    let file_name = json::output_file_name(&args.input);
    json::write_parsed_articles(&articles, &args.output_dir, &file_name, config.pretty).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
