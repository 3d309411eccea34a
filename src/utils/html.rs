//! HTML utility functions.
//!
//! - `escape_text()` - Escaping for text content
//! - `escape_attr_value()` - Escaping for double-quoted attribute values
//! - `is_void_element()` - Self-closing elements (br, img, etc.)
//! - `is_raw_text_element()` - Raw text elements (script, style, ...)

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\u{a0}' => Some("&nbsp;"),
        _ => None,
    }
}

/// Escape decoded text for use as element content.
///
/// Uses `Cow` to avoid allocation when nothing needs escaping.
///
/// # Example
/// ```ignore
/// assert_eq!(escape_text("a & b < c"), "a &amp; b &lt; c");
/// ```
#[inline]
pub fn escape_text(s: &str) -> Cow<'_, str> {
    escape_with(s, &['&', '<', '>', '\u{a0}'])
}

/// Escape a decoded value for use inside a double-quoted attribute.
///
/// # Example
/// ```ignore
/// assert_eq!(escape_attr_value(r#"say "hi""#), "say &quot;hi&quot;");
/// assert_eq!(escape_attr_value("a & b <i>"), "a &amp; b <i>");
/// ```
#[inline]
pub fn escape_attr_value(s: &str) -> Cow<'_, str> {
    escape_with(s, &['&', '"', '\u{a0}'])
}

/// Internal: escape with specified character set.
#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c).filter(|_| chars.contains(&c)) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

// =============================================================================
// Element Classification
// =============================================================================

/// Check if an HTML tag is a void element (self-closing).
///
/// Void elements cannot have children and are rendered without a closing tag.
#[inline]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Check if tag content is serialized verbatim (not HTML-escaped).
///
/// Script and style content is "raw text" in HTML; the legacy elements
/// below are serialized the same way.
#[inline]
pub fn is_raw_text_element(tag: &str) -> bool {
    matches!(
        tag,
        "script" | "style" | "xmp" | "iframe" | "noembed" | "noframes" | "plaintext"
    )
}

// =============================================================================
// Tests
// =============================================================================
