use std::path::PathBuf;

use rustc_hash::FxHashSet;

use super::types::{WatchTarget, WatchTargets};
use crate::freshness::Freshness;

/// Classifies debounced paths into the targets whose content changed.
///
/// Pipeline: match_targets → filter_fresh → order
pub(super) struct EventClassifier;

impl EventClassifier {
    /// Main classification pipeline.
    ///
    /// Returns targets in a fixed order (source, output, document) so a
    /// recompile is requested before any notification goes out.
    pub(super) fn classify(
        raw: FxHashSet<PathBuf>,
        targets: &WatchTargets,
        freshness: &mut Freshness,
    ) -> Vec<WatchTarget> {
        let mut changed: Vec<_> = raw
            .into_iter()
            .filter_map(|path| targets.target_of(&path).map(|t| (t, path)))
            .filter(|(target, path)| {
                let fresh = freshness.refresh(path);
                if !fresh {
                    crate::debug!("watch"; "unchanged {}: {}", target.label(), path.display());
                }
                fresh
            })
            .map(|(target, _)| target)
            .collect();

        changed.sort_unstable();
        changed.dedup();
        changed
    }
}
