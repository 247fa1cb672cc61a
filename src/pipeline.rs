//! Article parsing pipeline.
//!
//! Ties the [`parser`](crate::parser) stages together for whole posts:
//!
//! 1. Parse the raw HTML into a [`scraper::Html`] document
//! 2. Segment, classify and extract the body into ordered content records
//! 3. Read the page metadata
//! 4. Assemble a [`ParsedArticle`]
//!
//! `scraper::Html` is not `Send`, so batches parse each post inside its own
//! blocking task from the owned raw HTML and only hand owned results back.

use crate::models::{number_records, ContentRecord, EditorVersion, ParsedArticle, RawArticle};
use crate::parser::{classify, extract, extract_metadata, segment_body};
use crate::utils::{article_id, truncate_for_log};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use scraper::Html;
use tracing::{debug, error, info, instrument, warn};

/// Extract the ordered content records of a parsed document.
///
/// # Returns
///
/// The detected editor version (`None` for unknown layouts) and every record
/// of every block, in document order.
#[instrument(level = "debug", skip_all)]
pub fn extract_contents(document: &Html) -> (Option<EditorVersion>, Vec<ContentRecord>) {
    let segment = segment_body(document);

    let records: Vec<ContentRecord> = segment
        .blocks
        .iter()
        .enumerate()
        .flat_map(|(index, block)| {
            let kind = classify(block);
            let records = extract(block, kind);
            debug!(
                index,
                ?kind,
                records = records.len(),
                first = %records.first().map(|r| truncate_for_log(&r.payload, 60)).unwrap_or_default(),
                "Classified block"
            );
            records
        })
        .collect();

    (segment.version, records)
}

/// Parse a single scraped post.
#[instrument(level = "info", skip_all, fields(url = %raw.url))]
pub fn parse_article(raw: RawArticle) -> ParsedArticle {
    let document = Html::parse_document(&raw.origin_source);
    let (version, records) = extract_contents(&document);
    let metadata = extract_metadata(&document);

    if version.is_none() {
        warn!("Unrecognized post layout; contents left empty");
    }
    info!(?version, records = records.len(), "Parsed article");

    ParsedArticle {
        article_id: article_id(&raw.url),
        title: raw.title,
        url: raw.url,
        blog_name: raw.blog_name,
        date: raw.date,
        version,
        metadata,
        contents: number_records(records),
        parsed_at: Utc::now().to_rfc3339(),
    }
}

/// Parse a batch of scraped posts concurrently.
///
/// At most `concurrency` posts are parsed at once (zero is treated as one).
/// Output order matches input order. A post whose parsing task panics is
/// logged and skipped without failing the batch.
#[instrument(level = "info", skip_all, fields(count = raws.len(), concurrency = concurrency))]
pub async fn parse_articles(raws: Vec<RawArticle>, concurrency: usize) -> Vec<ParsedArticle> {
    let articles: Vec<ParsedArticle> = stream::iter(raws)
        .map(|raw| async move {
            let url = raw.url.clone();
            match tokio::task::spawn_blocking(move || parse_article(raw)).await {
                Ok(article) => Some(article),
                Err(e) => {
                    error!(error = %e, %url, "Parsing task failed");
                    None
                }
            }
        })
        .buffered(concurrency.max(1))
        .filter_map(std::future::ready)
        .collect()
        .await;

    info!(count = articles.len(), "Parsed article batch");
    articles
}
