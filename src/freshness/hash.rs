//! Content hashing using blake3.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// A 256-bit content hash (blake3 output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Create a new ContentHash from raw bytes.
    #[inline]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create a hash representing "no content" (all zeros).
    #[inline]
    pub const fn empty() -> Self {
        Self([0; 32])
    }

    /// Check if this is the empty/zero hash.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == [0; 32]
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // First 8 bytes are enough for log output
        for byte in &self.0[..8] {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Compute blake3 hash of file contents.
///
/// Missing or unreadable files hash to [`ContentHash::empty`].
pub fn compute_file_hash(path: &Path) -> ContentHash {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return ContentHash::empty(),
    };

    let mut reader = BufReader::with_capacity(64 * 1024, file);
    let mut hasher = blake3::Hasher::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => {
                hasher.update(&buffer[..n]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => return ContentHash::empty(),
        }
    }

    ContentHash::new(*hasher.finalize().as_bytes())
}
