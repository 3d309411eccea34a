//! SCSS compiler backends.

use std::path::Path;

use super::StyleError;

/// Turns a stylesheet source file into CSS text.
pub trait StyleCompiler {
    fn compile(&self, source: &Path) -> Result<String, StyleError>;
}

/// Pure-Rust Sass compiler (`grass`).
#[derive(Debug, Clone, Copy, Default)]
pub struct GrassCompiler {
    pub minify: bool,
}

impl GrassCompiler {
    pub const fn new(minify: bool) -> Self {
        Self { minify }
    }
}

impl StyleCompiler for GrassCompiler {
    fn compile(&self, source: &Path) -> Result<String, StyleError> {
        let style = if self.minify {
            grass::OutputStyle::Compressed
        } else {
            grass::OutputStyle::Expanded
        };
        let options = grass::Options::default().style(style);

        grass::from_path(source, &options).map_err(|e| StyleError::Compile {
            path: source.to_path_buf(),
            message: e.to_string(),
        })
    }
}
