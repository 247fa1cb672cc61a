//! Block classification.
//!
//! A block is classified by walking [`CLASSIFICATION_RULES`] top to bottom and
//! taking the first rule whose predicate holds for the block's [`TagProfile`].
//! Structural markers come before bare tag presence: video and map widgets
//! routinely embed anchors and images of their own.

use super::inspect::{inspect, TagProfile};
use super::node::HtmlNode;
use crate::models::ContentKind;

/// Predicate over a [`TagProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Some `id`/`class` token equals the value exactly.
    Token(&'static str),
    /// Some `id`/`class` token starts with the value.
    TokenPrefix(&'static str),
    /// The subtree contains a tag with this name.
    Tag(&'static str),
}

impl Rule {
    pub fn matches(self, profile: &TagProfile) -> bool {
        match self {
            Rule::Token(token) => profile.has_token(token),
            Rule::TokenPrefix(prefix) => profile.has_token_prefix(prefix),
            Rule::Tag(name) => profile.has_tag(name),
        }
    }
}

/// Ordered rule table. First match wins; [`ContentKind::Text`] when none match.
pub const CLASSIFICATION_RULES: &[(Rule, ContentKind)] = &[
    (Rule::Token("se-module-video"), ContentKind::Video),
    (Rule::TokenPrefix("se-module-map"), ContentKind::Map),
    (Rule::Tag("video"), ContentKind::Gif),
    (Rule::Tag("img"), ContentKind::Image),
    (Rule::Tag("a"), ContentKind::Link),
];

/// Classify an already-inspected block.
pub fn classify_profile(profile: &TagProfile) -> ContentKind {
    CLASSIFICATION_RULES
        .iter()
        .find(|(rule, _)| rule.matches(profile))
        .map(|(_, kind)| *kind)
        .unwrap_or(ContentKind::Text)
}

/// Classify a block element.
pub fn classify<N: HtmlNode>(element: &N) -> ContentKind {
    classify_profile(&inspect(element))
}
