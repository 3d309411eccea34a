//! MIME type constants for served responses.

/// Common MIME type constants.
pub mod types {
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const CSS: &str = "text/css; charset=utf-8";
}

#[cfg(test)]
mod tests {
    use super::types;

    #[test]
    fn test_types_carry_charset() {
        for mime in [types::HTML, types::PLAIN, types::CSS] {
            assert!(mime.ends_with("charset=utf-8"));
        }
        assert!(types::CSS.starts_with("text/css"));
        assert!(types::HTML.starts_with("text/html"));
    }
}
