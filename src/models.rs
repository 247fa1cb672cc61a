//! Data models for scraped blog posts and their extracted representations.
//!
//! This module defines the core data structures used throughout the crate:
//! - [`RawArticle`]: A post as dumped by the scraping stage, HTML included
//! - [`EditorVersion`]: The blog editor convention that shaped the markup
//! - [`ContentKind`] and [`ContentRecord`]: One classified unit of body content
//! - [`ArticleMetadata`]: Auxiliary fields read from fixed page locations
//! - [`ParsedArticle`]: The semi-structured output handed to downstream stages
//!
//! [`ContentRecord`] serializes as `{"info": ..., "content": ...}`. Those two
//! field names and the `info` tags are consumed verbatim by the image archival
//! stage, so they must not change.

use serde::{Deserialize, Serialize};

/// A blog post as scraped, before any parsing.
///
/// # Fields
///
/// * `title` - Post title reported by the search API
/// * `url` - Post URL
/// * `blog_name` - Name of the blog (or blogger) the post belongs to
/// * `date` - Post date as reported by the search API
/// * `origin_source` - Raw HTML of the rendered post frame
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawArticle {
    pub title: String,
    pub url: String,
    pub blog_name: String,
    pub date: String,
    pub origin_source: String,
}

/// Authoring-tool convention governing a document's body markup.
///
/// Serialized as the container class it was detected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum EditorVersion {
    /// Smart-editor layout: body lives in `div.se-main-container`.
    #[serde(rename = "se-main-container")]
    LegacySE,
    /// Older layout: body lives in `div.view` as plain paragraphs.
    #[serde(rename = "view")]
    LegacyView,
}

impl EditorVersion {
    /// Class of the `div` wrapping the post body in this layout.
    pub fn container_class(self) -> &'static str {
        match self {
            EditorVersion::LegacySE => "se-main-container",
            EditorVersion::LegacyView => "view",
        }
    }
}

/// Semantic category assigned to one body block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ContentKind {
    #[serde(rename = "img")]
    Image,
    #[serde(rename = "link")]
    Link,
    #[serde(rename = "gif")]
    Gif,
    #[serde(rename = "map")]
    Map,
    #[serde(rename = "video")]
    Video,
    #[serde(rename = "text")]
    Text,
}

impl ContentKind {
    /// Tag written to the `info` field.
    pub fn info_tag(self) -> &'static str {
        match self {
            ContentKind::Image => "img",
            ContentKind::Link => "link",
            ContentKind::Gif => "gif",
            ContentKind::Map => "map",
            ContentKind::Video => "video",
            ContentKind::Text => "text",
        }
    }

    /// Kinds whose payload is a media URL worth archiving.
    pub fn is_archivable_media(self) -> bool {
        matches!(self, ContentKind::Image | ContentKind::Gif)
    }
}

/// One resolved unit of extracted content.
///
/// The payload is a URL for images, links and gifs, a caption for maps,
/// literal text for text blocks, and a fixed marker for embedded videos.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentRecord {
    #[serde(rename = "info")]
    pub kind: ContentKind,
    #[serde(rename = "content")]
    pub payload: String,
}

impl ContentRecord {
    pub fn new(kind: ContentKind, payload: impl Into<String>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }
}

/// A [`ContentRecord`] with its position in the article.
///
/// `no` is zero-based and doubles as the file name of an archived image.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NumberedRecord {
    pub no: usize,
    #[serde(flatten)]
    pub record: ContentRecord,
}

/// Auxiliary page fields read outside the block pipeline.
///
/// Text fields are `None` when the page has no matching element. Counts are
/// exact selector match counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleMetadata {
    /// Caption shown under the blogger's profile.
    pub profile_caption: Option<String>,
    /// Post count shown in the blog's category list.
    pub article_count: Option<String>,
    /// Number of "love" reactions.
    pub love_count: Option<String>,
    /// Number of comments.
    pub comment_count: Option<String>,
    pub hashtag_count: usize,
    pub ad_block_count: usize,
    pub embedded_video_count: usize,
}

/// A fully parsed blog post.
///
/// Produced from a [`RawArticle`]; the raw HTML is dropped and replaced by
/// the ordered content records and page metadata.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ParsedArticle {
    pub title: String,
    pub url: String,
    pub blog_name: String,
    pub date: String,
    /// Stable identifier derived from the URL, e.g. `user.223344`.
    pub article_id: String,
    /// `None` when the page matched no known editor layout.
    pub version: Option<EditorVersion>,
    pub metadata: ArticleMetadata,
    pub contents: Vec<NumberedRecord>,
    /// RFC 3339 timestamp of when the post was parsed.
    pub parsed_at: String,
}

impl ParsedArticle {
    /// Records the archival stage downloads: images and gifs.
    pub fn archivable_media(&self) -> impl Iterator<Item = &NumberedRecord> {
        self.contents
            .iter()
            .filter(|numbered| numbered.record.kind.is_archivable_media())
    }
}

/// Number records in order, starting at zero.
pub fn number_records(records: Vec<ContentRecord>) -> Vec<NumberedRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(no, record)| NumberedRecord { no, record })
        .collect()
}
