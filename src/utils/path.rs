//! Path normalization utilities.

use std::path::{Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Resolve `path` against `root` and normalize.
///
/// Files that do not exist yet (e.g. the compiled stylesheet before the first
/// compile) keep a canonical parent so watcher events still compare equal.
pub fn resolve_under(root: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    };

    if joined.exists() {
        return normalize_path(&joined);
    }

    match (joined.parent(), joined.file_name()) {
        (Some(parent), Some(name)) => normalize_path(parent).join(name),
        _ => normalize_path(&joined),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_path_absolute() {
        let path = Path::new("/absolute/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_normalize_path_relative() {
        let path = Path::new("relative/path/file.txt");
        let normalized = normalize_path(path);
        assert!(normalized.is_absolute());
    }

    #[test]
    fn test_resolve_under_missing_file_keeps_canonical_parent() {
        let dir = TempDir::new().unwrap();
        let root = normalize_path(dir.path());

        let resolved = resolve_under(&root, Path::new("index.css"));
        assert_eq!(resolved, root.join("index.css"));
    }

    #[test]
    fn test_resolve_under_absolute_passthrough() {
        let dir = TempDir::new().unwrap();
        let root = normalize_path(dir.path());
        let file = root.join("doc.html");
        std::fs::write(&file, "<p></p>").unwrap();

        assert_eq!(resolve_under(Path::new("/elsewhere"), &file), file);
    }
}
