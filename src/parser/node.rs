//! Read-only view over a parsed HTML element.
//!
//! The classifier and extractor only need a handful of structural queries,
//! so they are written against [`HtmlNode`] instead of a concrete parser type.
//! [`scraper::ElementRef`] is the implementation used in practice.

use scraper::{ElementRef, Node};

/// Structural queries the block pipeline performs on an element.
pub trait HtmlNode: Copy {
    /// Lower-case tag name of the element.
    fn tag_name(&self) -> &str;

    /// Value of the named attribute, if present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Value of the `id` attribute, if present.
    fn element_id(&self) -> Option<&str>;

    /// Whitespace-separated tokens of the `class` attribute.
    fn class_tokens(&self) -> Vec<&str>;

    /// The element itself followed by every element below it, in document order.
    /// Text and comment nodes are not included.
    fn element_descendants(&self) -> Vec<Self>;

    /// Text of each direct child, elements and text nodes alike.
    fn child_texts(&self) -> Vec<String>;

    /// Concatenated text of the whole subtree.
    fn text_content(&self) -> String;

    /// Elements named `tag` within the subtree, the element itself included.
    fn find_all(&self, tag: &str) -> Vec<Self> {
        self.element_descendants()
            .into_iter()
            .filter(|node| node.tag_name() == tag)
            .collect()
    }
}

impl<'a> HtmlNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }

    fn element_id(&self) -> Option<&str> {
        self.value().id()
    }

    fn class_tokens(&self) -> Vec<&str> {
        self.value().classes().collect()
    }

    fn element_descendants(&self) -> Vec<Self> {
        self.descendants().filter_map(ElementRef::wrap).collect()
    }

    fn child_texts(&self) -> Vec<String> {
        self.children()
            .map(|child| match child.value() {
                Node::Text(text) => text.to_string(),
                Node::Element(_) => ElementRef::wrap(child)
                    .map(|element| element.text().collect())
                    .unwrap_or_default(),
                // comments, doctypes and processing instructions render nothing
                _ => String::new(),
            })
            .collect()
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }
}
