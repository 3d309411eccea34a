//! Page shell: the fixed document the canonical fragment is merged into.

use super::node::{Element, Node};

/// Build a fresh page shell linking `stylesheet_href`.
///
/// ```text
/// <!DOCTYPE html>
/// <html>
///   <head>
///     <meta charset="UTF-8">
///     <meta name="viewport" content="width=device-width, initial-scale=1">
///     <link rel="stylesheet" href="/index.css">
///   </head>
///   <body></body>
/// </html>
/// ```
pub fn page_shell(stylesheet_href: &str) -> Node {
    let head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "UTF-8"))
        .with_child(
            Element::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1"),
        )
        .with_child(
            Element::new("link")
                .with_attr("rel", "stylesheet")
                .with_attr("href", stylesheet_href),
        );

    Element::new("html")
        .with_child(head)
        .with_child(Element::new("body"))
        .into()
}
