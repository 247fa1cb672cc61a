//! Command-line interface definitions for the batch extractor.
//!
//! This module defines the CLI arguments and options using the `clap` crate.

use clap::Parser;

/// Command-line arguments for `blog_review_extract`.
///
/// # Examples
///
/// ```sh
/// # Parse one keyword dump
/// blog_review_extract -i "./data/origin/cafe latte.json" -o ./data/semi-structured
///
/// # With a config file and a wider worker pool
/// blog_review_extract -i dump.json -o out -c extract.yaml --concurrency 32
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Raw article JSON dump produced by the scraping stage
    #[arg(short, long)]
    pub input: String,

    /// Output directory for the parsed article JSON
    #[arg(short, long)]
    pub output_dir: String,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of posts parsed concurrently
    #[arg(long, env = "BLOG_EXTRACT_CONCURRENCY")]
    pub concurrency: Option<usize>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pub pretty: bool,
}
