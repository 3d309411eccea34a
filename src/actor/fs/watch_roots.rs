use std::path::{Path, PathBuf};

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;

/// Watch-root consistency manager.
///
/// Roots are the parent directories of the watched files, watched
/// non-recursively so that atomic saves (write temp + rename) are seen.
///
/// Responsibility:
/// - Attach existing roots at startup
/// - Re-attach roots that were removed and recreated
pub(super) struct WatchRoots {
    desired: Vec<PathBuf>,
    attached: FxHashSet<PathBuf>,
}

impl WatchRoots {
    /// Build the root set from watched file paths (parents, deduplicated).
    pub(super) fn for_files<'a>(files: impl IntoIterator<Item = &'a Path>) -> Self {
        let mut desired: Vec<PathBuf> = Vec::new();
        for file in files {
            if let Some(parent) = file.parent()
                && !desired.iter().any(|d| d == parent)
            {
                desired.push(parent.to_path_buf());
            }
        }

        Self {
            desired,
            attached: FxHashSet::default(),
        }
    }

    pub(super) fn attach_existing(
        &mut self,
        watcher: &mut RecommendedWatcher,
    ) -> notify::Result<()> {
        for path in &self.desired {
            if !path.exists() {
                continue;
            }
            watcher.watch(path, RecursiveMode::NonRecursive)?;
            self.attached.insert(path.clone());
        }

        Ok(())
    }

    pub(super) fn maintain(&mut self, watcher: &mut RecommendedWatcher) {
        // Drop stale handles for roots that no longer exist.
        self.attached.retain(|path| path.exists());

        for path in &self.desired {
            if self.attached.contains(path) || !path.exists() {
                continue;
            }

            if watcher.watch(path, RecursiveMode::NonRecursive).is_ok() {
                self.attached.insert(path.clone());
                crate::debug!("watch"; "re-attached watch: {}", path.display());
            }
        }
    }

    #[cfg(test)]
    pub(super) fn desired(&self) -> &[PathBuf] {
        &self.desired
    }
}
