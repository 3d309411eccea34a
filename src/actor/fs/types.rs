use std::path::{Path, PathBuf};

use crate::config::LiveConfig;

/// Which watched file a change belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(super) enum WatchTarget {
    /// SCSS source: recompile
    StyleSource,
    /// Compiled CSS: pages swap their stylesheet
    StyleOutput,
    /// Canonical document: pages reload
    Document,
}

impl WatchTarget {
    pub(super) fn label(self) -> &'static str {
        match self {
            Self::StyleSource => "style source",
            Self::StyleOutput => "stylesheet",
            Self::Document => "document",
        }
    }
}

/// The three files the watcher cares about (absolute, normalized)
#[derive(Debug, Clone)]
pub(super) struct WatchTargets {
    pub(super) source: PathBuf,
    pub(super) output: PathBuf,
    pub(super) document: PathBuf,
}

impl WatchTargets {
    pub(super) fn from_config(config: &LiveConfig) -> Self {
        Self {
            source: config.style.source.clone(),
            output: config.style.output.clone(),
            document: config.files.document.clone(),
        }
    }

    /// Map a changed path to its target, if it is one of ours
    pub(super) fn target_of(&self, path: &Path) -> Option<WatchTarget> {
        if path == self.source {
            Some(WatchTarget::StyleSource)
        } else if path == self.output {
            Some(WatchTarget::StyleOutput)
        } else if path == self.document {
            Some(WatchTarget::Document)
        } else {
            None
        }
    }

    pub(super) fn paths(&self) -> [&Path; 3] {
        [&self.source, &self.output, &self.document]
    }
}
