//! Freshness detection: content hashes of watched files.
//!
//! The watcher reports writes, not changes. `Freshness` remembers the last
//! seen hash per file so rewriting identical bytes (a save with no edits,
//! a recompile producing the same CSS) is not forwarded as a change.

mod hash;

pub use hash::{ContentHash, compute_file_hash};

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

/// Last observed content hash per file.
#[derive(Debug, Default)]
pub struct Freshness {
    seen: FxHashMap<PathBuf, ContentHash>,
}

impl Freshness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the current content of `paths` without reporting changes.
    pub fn prime<'a>(&mut self, paths: impl IntoIterator<Item = &'a Path>) {
        for path in paths {
            self.seen.insert(path.to_path_buf(), compute_file_hash(path));
        }
    }

    /// Re-hash `path`; true when its content differs from the last observation.
    ///
    /// A file that disappears counts as changed once.
    pub fn refresh(&mut self, path: &Path) -> bool {
        let current = compute_file_hash(path);
        let changed = match self.seen.insert(path.to_path_buf(), current) {
            Some(previous) => previous != current,
            None => true,
        };

        if changed {
            if current.is_empty() {
                crate::debug!("watch"; "gone: {}", path.display());
            } else {
                crate::debug!("watch"; "content {}: {}", current, path.display());
            }
        }
        changed
    }
}
