//! Served page assembly.

use std::fs;

use anyhow::{Context, Result};

use crate::config::LiveConfig;
use crate::dom::{Element, Node, mark, page_shell, parse_fragment, serialize_document};

/// Render the editable page for the canonical document.
///
/// ```text
/// shell(head + stylesheet link) ← body(document fragment + agent script)
/// ```
///
/// Every element in the body, the body included, carries the editability
/// marker. The document file itself is never modified here.
pub fn render_page(config: &LiveConfig, agent_js: &str) -> Result<String> {
    let path = &config.files.document;
    let source = fs::read(path)
        .with_context(|| format!("failed to read document `{}`", path.display()))?;

    let mut children = parse_fragment(&String::from_utf8_lossy(&source));
    children.push(agent_script(agent_js));

    let mut body: Node = Element {
        tag: "body".into(),
        attrs: Vec::new(),
        children,
    }
    .into();
    mark(&mut body);

    let mut page = page_shell(&config.style.url_path());
    let slot = page
        .find_element_mut("body")
        .context("page shell has no <body>")?;
    if let Node::Element(body) = body {
        *slot = body;
    }

    Ok(serialize_document(&page))
}

/// Inline `<script>` element carrying the sync agent.
fn agent_script(agent_js: &str) -> Node {
    Element::new("script").with_child(Node::text(agent_js)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use tempfile::TempDir;

    const AGENT: &str = "console.log(1 < 2 && true);";

    #[test]
    fn test_document_served_editable() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::write(&config.files.document, "<p>hello</p>").unwrap();

        let html = render_page(&config, AGENT).unwrap();
        assert!(html.starts_with("<!DOCTYPE html><html><head>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/index.css">"#));
        assert!(html.contains(r#"<body contenteditable="true">"#));
        assert!(html.contains(r#"<p contenteditable="true">hello</p>"#));
    }

    #[test]
    fn test_agent_script_injected_verbatim() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::write(&config.files.document, "<p>hello</p>").unwrap();

        let html = render_page(&config, AGENT).unwrap();
        assert!(html.contains(AGENT));
        let script = html.find("<script").unwrap();
        assert!(html.find("<p ").unwrap() < script);
        assert!(html.ends_with("</script></body></html>"));
    }

    #[test]
    fn test_already_marked_element_not_doubled() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::write(&config.files.document, r#"<div contenteditable="true">x</div>"#).unwrap();

        let html = render_page(&config, AGENT).unwrap();
        assert_eq!(html.matches(r#"<div contenteditable="true">"#).count(), 1);
        assert!(!html.contains(r#"contenteditable="true" contenteditable"#));
    }

    #[test]
    fn test_document_file_untouched() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::write(&config.files.document, "<p>hello</p>").unwrap();

        render_page(&config, AGENT).unwrap();
        assert_eq!(fs::read_to_string(&config.files.document).unwrap(), "<p>hello</p>");
    }

    #[test]
    fn test_invalid_utf8_document_still_served() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());
        fs::write(&config.files.document, b"<p>caf\xe9</p>").unwrap();

        let html = render_page(&config, AGENT).unwrap();
        assert!(html.contains("<p contenteditable=\"true\">caf\u{fffd}</p>"));
    }

    #[test]
    fn test_missing_document_fails() {
        let dir = TempDir::new().unwrap();
        let config = test_config(dir.path());

        let err = render_page(&config, AGENT).unwrap_err();
        assert!(err.to_string().contains("index.html"));
    }
}
