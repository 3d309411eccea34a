//! HTML fragment parsing via `scraper` (html5ever).
//!
//! The fragment is parsed in a `<body>` context and converted into the owned
//! [`Node`] tree right away. Parsing is permissive: malformed markup produces
//! a best-effort tree, never an error.
//!
//! `scraper` is built with its `deterministic` feature, so attributes come
//! back in source order. Duplicate attribute names keep the first occurrence.

use ego_tree::NodeRef;
use scraper::Html;

use super::node::{Attr, Element, Node};

/// Parse an HTML fragment into owned nodes.
pub fn parse_fragment(html: &str) -> Vec<Node> {
    let fragment = Html::parse_fragment(html);

    // Fragment trees hang off a synthetic <html> root element
    fragment
        .root_element()
        .children()
        .filter_map(convert)
        .collect()
}

/// Convert a scraper tree node to an owned node.
fn convert(handle: NodeRef<'_, scraper::Node>) -> Option<Node> {
    match handle.value() {
        scraper::Node::Element(tag) => {
            let mut elem = Element::new(tag.name().to_ascii_lowercase());
            elem.attrs = tag
                .attrs()
                .map(|(name, value)| Attr::new(name, value))
                .collect();
            elem.children = handle.children().filter_map(convert).collect();
            Some(Node::Element(elem))
        }
        scraper::Node::Text(text) => {
            let text: &str = text;
            (!text.is_empty()).then(|| Node::text(text))
        }
        scraper::Node::Comment(comment) => {
            let body: &str = comment;
            Some(Node::Comment(body.to_string()))
        }
        _ => None,
    }
}
