//! Page metadata read from fixed locations, independent of the body blocks.

use super::node::HtmlNode;
use crate::models::ArticleMetadata;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("metadata selector")
}

static PROFILE_CAPTION: Lazy<Selector> = Lazy::new(|| selector("p.caption"));
static ARTICLE_COUNT: Lazy<Selector> = Lazy::new(|| selector("span.cnt"));
static LOVE_COUNT: Lazy<Selector> = Lazy::new(|| selector("em.u_cnt"));
static COMMENT_COUNT: Lazy<Selector> = Lazy::new(|| selector("em._commentCount"));
static HASHTAG: Lazy<Selector> = Lazy::new(|| selector("span.ell"));
static AD_BLOCK: Lazy<Selector> = Lazy::new(|| selector("div.revenue_unit_item"));
static EMBEDDED_VIDEO: Lazy<Selector> = Lazy::new(|| selector("div.se-video"));

/// Trimmed text of the first match, `None` if there is none or it is blank.
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|element| element.text_content().trim().to_string())
        .filter(|text| !text.is_empty())
}

fn count(document: &Html, selector: &Selector) -> usize {
    document.select(selector).count()
}

/// Read the auxiliary page fields of a post.
pub fn extract_metadata(document: &Html) -> ArticleMetadata {
    let metadata = ArticleMetadata {
        profile_caption: first_text(document, &PROFILE_CAPTION),
        article_count: first_text(document, &ARTICLE_COUNT),
        love_count: first_text(document, &LOVE_COUNT),
        comment_count: first_text(document, &COMMENT_COUNT),
        hashtag_count: count(document, &HASHTAG),
        ad_block_count: count(document, &AD_BLOCK),
        embedded_video_count: count(document, &EMBEDDED_VIDEO),
    };
    debug!(?metadata, "Extracted page metadata");
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_metadata() {
        let document = Html::parse_document(
            r#"<html><body>
                <div class="profile"><p class="caption"> Daily cafe notes </p></div>
                <span class="cnt">(1,024)</span>
                <em class="u_cnt _count">37</em>
                <em class="_commentCount">5</em>
                <div class="wrap_tag"><span class="ell">#cafe</span><span class="ell">#seoul</span><span class="ell">#latte</span></div>
                <div class="revenue_unit_item">ad</div>
                <div class="se-component se-video"><div class="se-module se-module-video"></div></div>
                <div class="se-component se-video"></div>
            </body></html>"#,
        );

        let metadata = extract_metadata(&document);
        assert_eq!(metadata.profile_caption.as_deref(), Some("Daily cafe notes"));
        assert_eq!(metadata.article_count.as_deref(), Some("(1,024)"));
        assert_eq!(metadata.love_count.as_deref(), Some("37"));
        assert_eq!(metadata.comment_count.as_deref(), Some("5"));
        assert_eq!(metadata.hashtag_count, 3);
        assert_eq!(metadata.ad_block_count, 1);
        assert_eq!(metadata.embedded_video_count, 2);
    }

    #[test]
    fn test_missing_fields_are_none_and_zero() {
        let document = Html::parse_document("<html><body><p>nothing here</p></body></html>");
        assert_eq!(extract_metadata(&document), ArticleMetadata::default());
    }

    #[test]
    fn test_first_match_wins() {
        let document = Html::parse_document(r#"<em class="_commentCount">2</em><em class="_commentCount">9</em>"#);
        assert_eq!(extract_metadata(&document).comment_count.as_deref(), Some("2"));
    }

    #[test]
    fn test_blank_text_is_none() {
        let document = Html::parse_document(r#"<p class="caption">   </p>"#);
        assert_eq!(extract_metadata(&document).profile_caption, None);
    }
}
