//! Editability marker toggling.
//!
//! Served trees carry `contenteditable="true"` on every element; persisted
//! trees carry none. Both passes are node-local, so traversal order is free.

use super::node::{Attr, Node};

/// Attribute name of the editability marker.
pub const MARKER_NAME: &str = "contenteditable";

/// Attribute value of the editability marker.
pub const MARKER_VALUE: &str = "true";

/// Append the marker to every element reachable from `node`.
///
/// An element that already carries the marker is left alone, so a node
/// never ends up with two.
pub fn mark(node: &mut Node) {
    let Some(elem) = node.as_element_mut() else {
        return;
    };
    if elem.attr(MARKER_NAME).is_none() {
        elem.attrs.push(Attr::new(MARKER_NAME, MARKER_VALUE));
    }
    mark_all(&mut elem.children);
}

/// Remove one marker occurrence from every element reachable from `node`.
///
/// Elements without the marker are unchanged.
pub fn unmark(node: &mut Node) {
    let Some(elem) = node.as_element_mut() else {
        return;
    };
    if let Some(pos) = elem.attr_position(MARKER_NAME) {
        elem.attrs.remove(pos);
    }
    unmark_all(&mut elem.children);
}

/// [`mark`] over a fragment.
pub fn mark_all(nodes: &mut [Node]) {
    nodes.iter_mut().for_each(mark);
}

/// [`unmark`] over a fragment.
pub fn unmark_all(nodes: &mut [Node]) {
    nodes.iter_mut().for_each(unmark);
}
