//! Body segmentation: find the post body and split it into blocks.
//!
//! The editor version is detected by probing the known container classes in
//! [`CONTAINERS`] order; the first container found decides the version and
//! becomes the body root. Each version then has its own block selector:
//!
//! | Version | Container | Blocks |
//! |---------|-----------|--------|
//! | `LegacySE` | `div.se-main-container` | `div.se-module`, top-level `a.se-module` |
//! | `LegacyView` | `div.view` | `p` without a `class` attribute |

use crate::models::EditorVersion;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Container probes in priority order.
static CONTAINERS: Lazy<Vec<(EditorVersion, Selector)>> = Lazy::new(|| {
    [EditorVersion::LegacySE, EditorVersion::LegacyView]
        .into_iter()
        .map(|version| {
            let css = format!("div.{}", version.container_class());
            let selector = Selector::parse(&css).expect("container selector");
            (version, selector)
        })
        .collect()
});

static SE_BLOCKS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.se-module, a.se-module").expect("se block selector"));

static VIEW_BLOCKS: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p:not([class])").expect("view block selector"));

/// Selector listing the blocks of a body written with `version`.
pub fn block_selector(version: EditorVersion) -> &'static Selector {
    match version {
        EditorVersion::LegacySE => &SE_BLOCKS,
        EditorVersion::LegacyView => &VIEW_BLOCKS,
    }
}

/// The post body of one document split into blocks.
///
/// Blocks borrow from the [`Html`] they were found in.
#[derive(Debug, Clone)]
pub struct Segment<'a> {
    /// `None` when no known container was found.
    pub version: Option<EditorVersion>,
    pub blocks: Vec<ElementRef<'a>>,
}

/// Detect the editor version and locate the body root.
pub fn detect_version(document: &Html) -> Option<(EditorVersion, ElementRef<'_>)> {
    CONTAINERS.iter().find_map(|(version, selector)| {
        document
            .select(selector)
            .next()
            .map(|body| (*version, body))
    })
}

/// `true` for an anchor that sits inside a `div.se-module` below `body`.
/// Such anchors are part of their enclosing block, not blocks of their own.
fn is_nested_module_anchor(block: &ElementRef<'_>, body: &ElementRef<'_>) -> bool {
    if block.value().name() != "a" {
        return false;
    }
    block
        .ancestors()
        .take_while(|node| node.id() != body.id())
        .filter_map(ElementRef::wrap)
        .any(|ancestor| {
            ancestor.value().name() == "div" && ancestor.value().classes().any(|class| class == "se-module")
        })
}

/// Split the document body into ordered block elements.
///
/// Unknown layouts yield `version: None` and no blocks.
pub fn segment_body(document: &Html) -> Segment<'_> {
    let Some((version, body)) = detect_version(document) else {
        debug!("No known editor container found; skipping body");
        return Segment {
            version: None,
            blocks: Vec::new(),
        };
    };

    let blocks: Vec<_> = body
        .select(block_selector(version))
        .filter(|block| !is_nested_module_anchor(block, &body))
        .collect();
    debug!(?version, count = blocks.len(), "Segmented body");

    Segment {
        version: Some(version),
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::node::HtmlNode;

    #[test]
    fn test_detects_se_layout() {
        let document = Html::parse_document(
            r#"<html><body><div class="se-main-container">
                <div class="se-component se-text">
                    <div class="se-module se-module-text"><p>one</p></div>
                </div>
                <a class="se-module se-module-oglink" href="https://z">preview</a>
                <div class="se-component se-image">
                    <div class="se-module se-module-image"><img src="https://x/y.png"></div>
                </div>
            </div></body></html>"#,
        );

        let segment = segment_body(&document);
        assert_eq!(segment.version, Some(EditorVersion::LegacySE));

        let names: Vec<_> = segment.blocks.iter().map(|b| b.tag_name().to_string()).collect();
        assert_eq!(names, vec!["div", "a", "div"]);
    }

    #[test]
    fn test_detects_view_layout() {
        let document = Html::parse_document(
            r#"<div class="view"><p>Hello</p><p class="caption">skip</p><p><img src="https://x/y.png"></p></div>"#,
        );

        let segment = segment_body(&document);
        assert_eq!(segment.version, Some(EditorVersion::LegacyView));
        assert_eq!(segment.blocks.len(), 2);
    }

    #[test]
    fn test_se_container_has_priority() {
        let document = Html::parse_document(
            r#"<div class="view"><p>old</p></div><div class="se-main-container"><div class="se-module">new</div></div>"#,
        );

        let segment = segment_body(&document);
        assert_eq!(segment.version, Some(EditorVersion::LegacySE));
        assert_eq!(segment.blocks.len(), 1);
        assert_eq!(segment.blocks[0].text_content(), "new");
    }

    #[test]
    fn test_container_matched_by_class_token() {
        let document = Html::parse_document(r#"<div class="post view"><p>x</p></div>"#);
        assert_eq!(detect_version(&document).map(|(v, _)| v), Some(EditorVersion::LegacyView));
    }

    #[test]
    fn test_module_anchor_inside_module_is_not_a_block() {
        let document = Html::parse_document(
            r#"<div class="se-main-container"><div class="se-module se-module-oglink"><a class="se-module se-oglink" href="https://z">z</a></div></div>"#,
        );

        let segment = segment_body(&document);
        assert_eq!(segment.blocks.len(), 1);
        assert_eq!(segment.blocks[0].tag_name(), "div");
    }

    #[test]
    fn test_module_anchor_under_plain_wrapper_is_a_block() {
        let document = Html::parse_document(
            r#"<div class="se-main-container"><div class="se-component"><a class="se-module se-module-oglink" href="https://z">z</a></div></div>"#,
        );

        let segment = segment_body(&document);
        assert_eq!(segment.blocks.len(), 1);
        assert_eq!(segment.blocks[0].tag_name(), "a");
    }

    #[test]
    fn test_unknown_layout_yields_no_blocks() {
        let document = Html::parse_document(r#"<div class="article"><p>text</p></div>"#);
        let segment = segment_body(&document);
        assert_eq!(segment.version, None);
        assert!(segment.blocks.is_empty());
    }

    #[test]
    fn test_empty_body_is_not_an_error() {
        let document = Html::parse_document(r#"<div class="se-main-container"></div>"#);
        let segment = segment_body(&document);
        assert_eq!(segment.version, Some(EditorVersion::LegacySE));
        assert!(segment.blocks.is_empty());
    }
}
