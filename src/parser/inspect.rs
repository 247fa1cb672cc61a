//! Tag inspection: which tags and attribute tokens occur inside a block.

use super::node::HtmlNode;
use std::collections::HashSet;

/// Tag names and `id`/`class` tokens found anywhere in an element's subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagProfile {
    /// Names of the element and every element below it.
    pub tag_names: HashSet<String>,
    /// `id` values and `class` tokens of the element and every element below it.
    pub attr_tokens: HashSet<String>,
}

impl TagProfile {
    pub fn has_tag(&self, name: &str) -> bool {
        self.tag_names.contains(name)
    }

    pub fn has_token(&self, token: &str) -> bool {
        self.attr_tokens.contains(token)
    }

    /// `true` when any token starts with `prefix`.
    pub fn has_token_prefix(&self, prefix: &str) -> bool {
        self.attr_tokens.iter().any(|token| token.starts_with(prefix))
    }
}

/// Build the [`TagProfile`] of `element`.
///
/// Only element nodes contribute; text and comment nodes are skipped by
/// [`HtmlNode::element_descendants`], so inspecting any subtree is infallible.
pub fn inspect<N: HtmlNode>(element: &N) -> TagProfile {
    let mut profile = TagProfile::default();

    for node in element.element_descendants() {
        profile.tag_names.insert(node.tag_name().to_string());
        if let Some(id) = node.element_id() {
            profile.attr_tokens.insert(id.to_string());
        }
        profile
            .attr_tokens
            .extend(node.class_tokens().into_iter().map(str::to_string));
    }

    profile
}
