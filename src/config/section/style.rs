//! `[style]` section configuration.
//!
//! ```toml
//! [style]
//! source = "index.scss"       # SCSS source, recompiled on change
//! output = "index.css"        # Compiled stylesheet served to the page
//! minify = false              # Compressed output
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Stylesheet pipeline settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub source: PathBuf,
    pub output: PathBuf,
    pub minify: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("index.scss"),
            output: PathBuf::from("index.css"),
            minify: false,
        }
    }
}

impl StyleConfig {
    /// URL path the compiled stylesheet is served under (`/index.css`).
    pub fn url_path(&self) -> String {
        let name = self
            .output
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        format!("/{name}")
    }

    /// Whether a request URL targets the compiled stylesheet.
    ///
    /// Prefix match, so cache-busting queries (`/index.css?t=123`) still hit.
    pub fn matches_url(&self, url: &str) -> bool {
        url.starts_with(&self.url_path())
    }
}
