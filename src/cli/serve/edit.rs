//! Persisting edits posted by the sync agent.

use std::fs;

use anyhow::{Context, Result};

use crate::config::LiveConfig;
use crate::dom::{parse_fragment, serialize, unmark_all};

/// Strip editability markers from a posted body and overwrite the document.
///
/// Malformed markup is parsed permissively, never rejected. Pages are not
/// notified here; the watcher sees the write.
pub fn persist_edit(config: &LiveConfig, body: &str) -> Result<()> {
    let mut nodes = parse_fragment(body);
    unmark_all(&mut nodes);
    let html = serialize(&nodes);

    let path = &config.files.document;
    fs::write(path, html.trim())
        .with_context(|| format!("failed to write document `{}`", path.display()))?;

    crate::debug!("serve"; "saved {} bytes to {}", html.trim().len(), config.root_relative(path).display());
    Ok(())
}
