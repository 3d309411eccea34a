use std::path::PathBuf;
use std::time::{Duration, Instant};

use rustc_hash::FxHashSet;

use crate::utils::path::normalize_path;

/// Quiet period before a burst of events is released.
///
/// Editors and the stylesheet writer touch a file several times per save
/// (truncate, write, rename); one window coalesces them.
pub(super) const DEBOUNCE_MS: u64 = 100;

/// Pure debouncer: only handles timing and path deduplication.
/// No business logic, no global state access.
pub(super) struct Debouncer {
    /// Touched paths (dedup is free via set key uniqueness)
    pub(super) changes: FxHashSet<PathBuf>,
    pub(super) last_event: Option<Instant>,
}

impl Debouncer {
    pub(super) fn new() -> Self {
        Self {
            changes: FxHashSet::default(),
            last_event: None,
        }
    }

    /// Add a notify event.
    ///
    /// Create, modify, and remove all count: the watcher later compares
    /// content, so an atomic save (remove + create) collapses to one change.
    pub(super) fn add_event(&mut self, event: &notify::Event) {
        use notify::EventKind;

        match event.kind {
            EventKind::Create(_) | EventKind::Remove(_) => {}
            // Metadata-only changes (mtime/atime/chmod) carry no content
            EventKind::Modify(notify::event::ModifyKind::Metadata(_)) => return,
            EventKind::Modify(_) => {}
            _ => return,
        }

        crate::debug!("watch"; "raw notify: {:?} {:?}", event.kind, event.paths);

        for path in &event.paths {
            self.changes.insert(normalize_path(path));
        }
        if !event.paths.is_empty() {
            self.last_event = Some(Instant::now());
        }
    }

    /// Take touched paths once the debounce window has elapsed.
    pub(super) fn take_if_ready(&mut self) -> Option<FxHashSet<PathBuf>> {
        if !self.is_ready() {
            return None;
        }

        self.last_event = None;
        Some(std::mem::take(&mut self.changes))
    }

    pub(super) fn is_ready(&self) -> bool {
        let Some(last_event) = self.last_event else {
            return false;
        };

        last_event.elapsed() >= Duration::from_millis(DEBOUNCE_MS) && !self.changes.is_empty()
    }

    /// Precise sleep duration until next possible ready time.
    pub(super) fn sleep_duration(&self) -> Duration {
        let Some(last_event) = self.last_event else {
            return Duration::from_secs(86400);
        };

        Duration::from_millis(DEBOUNCE_MS)
            .saturating_sub(last_event.elapsed())
            .max(Duration::from_millis(1))
    }
}
