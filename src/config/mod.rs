//! Editor configuration management for `livedit.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── agent      # [agent]
//! │   ├── files      # [files]
//! │   ├── serve      # [serve]
//! │   └── style      # [style]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   └── handle     # Global config handle
//! └── mod.rs         # LiveConfig (this file)
//! ```
//!
//! The config file is optional: without one every setting takes its default
//! (`index.html`, `index.scss` → `index.css`, port 8080). CLI flags override
//! both.

pub mod section;
pub mod types;

pub use section::{AgentConfig, FilesConfig, ServeConfig, StyleConfig};
pub use types::{ConfigError, cfg, init_config};

use crate::{cli::Cli, log};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing livedit.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveConfig {
    /// Working root - every relative path resolves against it (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// HTTP / WebSocket settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Canonical document
    #[serde(default)]
    pub files: FilesConfig,

    /// Stylesheet pipeline
    #[serde(default)]
    pub style: StyleConfig,

    /// In-page sync script
    #[serde(default)]
    pub agent: AgentConfig,
}

impl LiveConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Reads `<root>/<cli.config>` when it exists, then applies CLI overrides
    /// and resolves every path to absolute form under the root.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let root = crate::utils::path::normalize_path(&cli.root.clone().unwrap_or(cwd));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            crate::debug!("config"; "{} not found, using defaults", config_path.display());
            Self::default()
        };

        config.apply_cli(cli);
        config.finalize(&root);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Apply command-line overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        crate::logger::set_verbose(cli.verbose);

        Self::update_option(&mut self.serve.interface, cli.interface.as_ref());
        Self::update_option(&mut self.serve.port, cli.port.as_ref());
        Self::update_option(&mut self.serve.ws_port, cli.ws_port.as_ref());
        Self::update_option(&mut self.files.document, cli.document.as_ref());
    }

    /// Resolve all file paths against `root`.
    pub fn finalize(&mut self, root: &Path) {
        use crate::utils::path::resolve_under;

        self.root = root.to_path_buf();
        self.files.document = resolve_under(root, &self.files.document);
        self.style.source = resolve_under(root, &self.style.source);
        self.style.output = resolve_under(root, &self.style.output);
    }

    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let files = [
            ("files.document", &self.files.document),
            ("style.source", &self.style.source),
            ("style.output", &self.style.output),
        ];
        for (i, (name, path)) in files.iter().enumerate() {
            if let Some((other, _)) = files[i + 1..].iter().find(|(_, p)| p == path) {
                return Err(ConfigError::Validation(format!(
                    "`{name}` and `{other}` point to the same file: {}",
                    path.display()
                )));
            }
        }

        if self.serve.port == self.serve.ws_port {
            return Err(ConfigError::Validation(format!(
                "`serve.port` and `serve.ws_port` are both {}",
                self.serve.port
            )));
        }

        if self.agent.debounce_ms == 0 {
            return Err(ConfigError::Validation(
                "`agent.debounce_ms` must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get path relative to the root (for log output)
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Overwrite `target` when the CLI supplied a value.
    fn update_option<T: Clone>(target: &mut T, value: Option<&T>) {
        if let Some(v) = value {
            *target = v.clone();
        }
    }
}

/// Build a config rooted at `root` with default settings (test fixture).
#[cfg(test)]
pub fn test_config(root: &Path) -> LiveConfig {
    let mut config = LiveConfig::default();
    config.finalize(&crate::utils::path::normalize_path(root));
    config
}

/// Parse a config snippet, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> LiveConfig {
    let (parsed, ignored) = LiveConfig::parse_with_ignored(extra).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
