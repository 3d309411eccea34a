//! Stylesheet pipeline: SCSS source → compiled CSS on disk.
//!
//! Compilation is best-effort. A failure (syntax error, missing source)
//! writes nothing, so the last good stylesheet keeps being served while
//! the user is mid-edit. The caller only reports the failure locally.

mod compiler;

pub use compiler::{GrassCompiler, StyleCompiler};

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::{LiveConfig, StyleConfig};
use crate::logger::{status_error, status_success};

/// Style pipeline errors. Never surfaced to browser clients.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error("failed to compile `{}`:\n{message}", path.display())]
    Compile { path: PathBuf, message: String },

    #[error("failed to write `{}`", .0.display())]
    Write(PathBuf, #[source] std::io::Error),
}

/// Compile the configured source with `grass` and persist the output.
pub fn compile(style: &StyleConfig) -> Result<usize, StyleError> {
    compile_with(&GrassCompiler::new(style.minify), style)
}

/// Compile with an explicit backend.
///
/// On success the CSS is written to `style.output` and its length returned.
/// On failure the output file is left untouched.
pub fn compile_with(
    compiler: &impl StyleCompiler,
    style: &StyleConfig,
) -> Result<usize, StyleError> {
    let css = compiler.compile(&style.source)?;

    if let Some(parent) = style.output.parent() {
        fs::create_dir_all(parent).map_err(|e| StyleError::Write(style.output.clone(), e))?;
    }
    fs::write(&style.output, &css).map_err(|e| StyleError::Write(style.output.clone(), e))?;

    Ok(css.len())
}

/// Compile and report the outcome on the watch status line.
///
/// Returns whether the compile succeeded.
pub fn compile_and_report(config: &LiveConfig) -> bool {
    let source = config.root_relative(&config.style.source);
    match compile(&config.style) {
        Ok(len) => {
            status_success(&format!(
                "compiled {} → {} ({} bytes)",
                source.display(),
                config.root_relative(&config.style.output).display(),
                len
            ));
            true
        }
        Err(e) => {
            status_error(&format!("style compile failed: {}", source.display()), &e.to_string());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    struct FixedCompiler(Result<&'static str, &'static str>);

    impl StyleCompiler for FixedCompiler {
        fn compile(&self, source: &Path) -> Result<String, StyleError> {
            self.0.map(str::to_string).map_err(|m| StyleError::Compile {
                path: source.to_path_buf(),
                message: m.to_string(),
            })
        }
    }

    fn style_in(dir: &Path) -> StyleConfig {
        StyleConfig {
            source: dir.join("index.scss"),
            output: dir.join("index.css"),
            minify: false,
        }
    }

    #[test]
    fn test_success_writes_output() {
        let dir = TempDir::new().unwrap();
        let style = style_in(dir.path());

        let len = compile_with(&FixedCompiler(Ok("p{margin:0}")), &style).unwrap();
        assert_eq!(len, 11);
        assert_eq!(fs::read_to_string(&style.output).unwrap(), "p{margin:0}");
    }

    #[test]
    fn test_failure_keeps_last_good_output() {
        let dir = TempDir::new().unwrap();
        let style = style_in(dir.path());
        fs::write(&style.output, "body{color:red}").unwrap();

        let result = compile_with(&FixedCompiler(Err("expected \"}\"")), &style);
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&style.output).unwrap(), "body{color:red}");
    }

    #[test]
    fn test_invalid_scss_preserves_compiled_file() {
        let dir = TempDir::new().unwrap();
        let style = style_in(dir.path());
        fs::write(&style.output, "body{color:red}").unwrap();
        fs::write(&style.source, "body { color: $nope; }").unwrap();

        assert!(compile(&style).is_err());
        assert_eq!(fs::read(&style.output).unwrap(), b"body{color:red}");
    }

    #[test]
    fn test_missing_source_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let style = style_in(dir.path());

        assert!(compile(&style).is_err());
        assert!(!style.output.exists());
    }

    #[test]
    fn test_creates_output_directory() {
        let dir = TempDir::new().unwrap();
        let mut style = style_in(dir.path());
        style.output = dir.path().join("build/css/index.css");
        fs::write(&style.source, "a { b: c; }").unwrap();

        compile(&style).unwrap();
        assert!(style.output.exists());
    }

    #[test]
    fn test_error_message_names_source() {
        let err = StyleError::Compile {
            path: PathBuf::from("index.scss"),
            message: "Undefined variable.".into(),
        };
        let text = err.to_string();
        assert!(text.contains("index.scss"));
        assert!(text.contains("Undefined variable."));
    }
}
