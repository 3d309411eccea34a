//! Element tree serialization.

use super::node::{Attr, Element, Node};
use crate::utils::html::{escape_attr_value, escape_text, is_raw_text_element, is_void_element};

/// Serialize a fragment.
pub fn serialize(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

/// Serialize a full document (doctype + root).
pub fn serialize_document(root: &Node) -> String {
    let mut out = String::from("<!DOCTYPE html>");
    write_node(&mut out, root);
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(elem) => write_element(out, elem),
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Comment(body) => {
            out.push_str("<!--");
            out.push_str(body);
            out.push_str("-->");
        }
    }
}

fn write_element(out: &mut String, elem: &Element) {
    out.push('<');
    out.push_str(&elem.tag);
    for attr in &elem.attrs {
        write_attr(out, attr);
    }
    out.push('>');

    if is_void_element(&elem.tag) {
        return;
    }

    if is_raw_text_element(&elem.tag) {
        // Script/style bodies are emitted verbatim
        for child in &elem.children {
            if let Node::Text(text) = child {
                out.push_str(text);
            }
        }
    } else {
        for child in &elem.children {
            write_node(out, child);
        }
    }

    out.push_str("</");
    out.push_str(&elem.tag);
    out.push('>');
}

fn write_attr(out: &mut String, attr: &Attr) {
    out.push(' ');
    out.push_str(&attr.name);
    out.push_str("=\"");
    out.push_str(&escape_attr_value(&attr.value));
    out.push('"');
}
