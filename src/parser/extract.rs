//! Per-kind payload extraction.
//!
//! Extraction never fails. Missing attributes become empty payloads; whether
//! an empty payload is kept depends on the kind:
//!
//! | Kind | Source | Empty payloads |
//! |------|--------|----------------|
//! | `Image` | `data-lazy-src`, else `src`, of every `img` | dropped (≤ 1 char) |
//! | `Link` | `href` of every `a` | kept |
//! | `Gif` | `data-gif-url` of every `video` | kept |
//! | `Map` | trimmed text of the block | dropped |
//! | `Video` | fixed marker | n/a |
//! | `Text` | direct children's text | dropped |

use super::node::HtmlNode;
use crate::models::{ContentKind, ContentRecord};
use itertools::Itertools;
use tracing::debug;

/// Payload of a `Video` record. The stream itself is resolved elsewhere.
pub const VIDEO_SENTINEL: &str = "embedded-video";

/// Deferred-loading image source, preferred over `src` when non-empty.
pub const LAZY_SOURCE_ATTR: &str = "data-lazy-src";

pub const GIF_URL_ATTR: &str = "data-gif-url";

const ZERO_WIDTH_SPACE: char = '\u{200b}';

/// Extract the records of a block already classified as `kind`.
pub fn extract<N: HtmlNode>(element: &N, kind: ContentKind) -> Vec<ContentRecord> {
    let records = match kind {
        ContentKind::Image => extract_images(element),
        ContentKind::Link => extract_links(element),
        ContentKind::Gif => extract_gifs(element),
        ContentKind::Map => extract_map(element).into_iter().collect(),
        ContentKind::Video => vec![ContentRecord::new(ContentKind::Video, VIDEO_SENTINEL)],
        ContentKind::Text => extract_text(element).into_iter().collect(),
    };

    if records.is_empty() {
        debug!(?kind, "Block produced no records");
    }
    records
}

fn extract_images<N: HtmlNode>(element: &N) -> Vec<ContentRecord> {
    element
        .find_all("img")
        .iter()
        .filter_map(|img| {
            let source = img
                .attribute(LAZY_SOURCE_ATTR)
                .filter(|lazy| !lazy.is_empty())
                .or_else(|| img.attribute("src"))
                .unwrap_or_default();

            // placeholders like "#" or "" carry no image
            (source.chars().count() > 1).then(|| ContentRecord::new(ContentKind::Image, source))
        })
        .collect()
}

fn extract_links<N: HtmlNode>(element: &N) -> Vec<ContentRecord> {
    element
        .find_all("a")
        .iter()
        .map(|a| ContentRecord::new(ContentKind::Link, a.attribute("href").unwrap_or_default()))
        .collect()
}

fn extract_gifs<N: HtmlNode>(element: &N) -> Vec<ContentRecord> {
    element
        .find_all("video")
        .iter()
        .map(|video| ContentRecord::new(ContentKind::Gif, video.attribute(GIF_URL_ATTR).unwrap_or_default()))
        .collect()
}

fn extract_map<N: HtmlNode>(element: &N) -> Option<ContentRecord> {
    let caption = element.text_content();
    let caption = caption.trim();
    (!caption.is_empty()).then(|| ContentRecord::new(ContentKind::Map, caption))
}

// Blank children are dropped before joining, so spacer paragraphs do not leave empty lines.
fn extract_text<N: HtmlNode>(element: &N) -> Option<ContentRecord> {
    let text = element
        .child_texts()
        .iter()
        .map(|text| text.replace(ZERO_WIDTH_SPACE, "\n").trim().to_string())
        .filter(|text| !text.is_empty())
        .join("\n");
    let text = text.trim();

    let is_lone_zwsp = text.chars().eq([ZERO_WIDTH_SPACE]);
    (!text.is_empty() && !is_lone_zwsp).then(|| ContentRecord::new(ContentKind::Text, text))
}
