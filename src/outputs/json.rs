//! JSON input and output for article batches.
//!
//! The scraping stage dumps one JSON array of [`RawArticle`]s per search
//! keyword. The parsed batch is written next to other batches under the
//! same stem:
//!
//! ```text
//! data/origin/cafe latte.json      ->  output_dir/cafe latte.json
//! ```

use crate::models::{ParsedArticle, RawArticle};
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{error, info, instrument};

/// Read a raw article dump written by the scraping stage.
#[instrument(level = "info")]
pub async fn read_raw_articles(path: &str) -> Result<Vec<RawArticle>, Box<dyn Error>> {
    let raw = fs::read_to_string(path).await?;
    let articles: Vec<RawArticle> = serde_json::from_str(&raw)?;
    info!(count = articles.len(), "Loaded raw articles");
    Ok(articles)
}

/// Output file name for a given input path: the input's file stem plus `.json`.
pub fn output_file_name(input_path: &str) -> String {
    let stem = Path::new(input_path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("articles");
    format!("{stem}.json")
}

/// Write a parsed batch as a JSON array.
///
/// # Returns
///
/// The path of the written file.
#[instrument(level = "info", skip_all, fields(output_dir = %output_dir, file_name = %file_name))]
pub async fn write_parsed_articles(
    articles: &[ParsedArticle],
    output_dir: &str,
    file_name: &str,
    pretty: bool,
) -> Result<PathBuf, Box<dyn Error>> {
    let json = if pretty {
        serde_json::to_string_pretty(articles)?
    } else {
        serde_json::to_string(articles)?
    };

    if let Err(e) = fs::create_dir_all(output_dir).await {
        error!(%output_dir, error = %e, "Failed to create output dir");
        return Err(e.into());
    }

    let path = Path::new(output_dir).join(file_name);
    fs::write(&path, json).await?;
    info!(path = %path.display(), count = articles.len(), "Wrote parsed articles");

    Ok(path)
}
