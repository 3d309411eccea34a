//! `[files]` section configuration.
//!
//! ```toml
//! [files]
//! document = "index.html"     # Canonical document (body fragment)
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Canonical document location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    /// HTML fragment persisted on save, relative to the root.
    pub document: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            document: PathBuf::from("index.html"),
        }
    }
}
