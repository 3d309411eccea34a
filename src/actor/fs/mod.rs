//! FileSystem Actor
//!
//! Watches the style source, the compiled stylesheet, and the canonical
//! document, and turns content changes into actions.
//! Implements the "Watcher-First" pattern: the watcher is attached before
//! the actor runs, so nothing written in between is missed.
//!
//! Architecture:
//! ```text
//! Watcher → Debouncer (pure timing) → Classifier (target + freshness) → route
//!
//!   style source  → StyleMsg::Compile
//!   stylesheet    → WsMsg::Broadcast(Style)
//!   document      → WsMsg::Broadcast(Reload)
//! ```

use notify::RecommendedWatcher;
use tokio::sync::mpsc;

use super::messages::{StyleMsg, WsMsg};
use crate::config::LiveConfig;
use crate::freshness::Freshness;
use crate::reload::message::Notification;

// Target matching and content-change filtering.
mod classifier;
// Pure timing and deduplication.
mod debouncer;
// Shared fs event types.
mod types;
// Watch root attach/re-attach lifecycle.
mod watch_roots;


use classifier::EventClassifier;
use debouncer::Debouncer;
use types::{WatchTarget, WatchTargets};
use watch_roots::WatchRoots;

/// FileSystem Actor - watches for file changes
pub struct FsActor {
    /// Channel to receive notify events (sync -> async bridge)
    notify_rx: std::sync::mpsc::Receiver<notify::Result<notify::Event>>,
    /// Watcher handle (must be kept alive)
    watcher: RecommendedWatcher,
    /// Watch-root consistency layer (attach/re-attach parent directories)
    watch_roots: WatchRoots,
    /// Files of interest
    targets: WatchTargets,
    /// Last seen content per target
    freshness: Freshness,
    /// Debouncer state
    debouncer: Debouncer,
    style_tx: mpsc::Sender<StyleMsg>,
    ws_tx: mpsc::Sender<WsMsg>,
}

impl FsActor {
    /// Create a new FsActor with Watcher-First pattern
    ///
    /// The current content of every target is recorded here, so only
    /// later edits count as changes.
    pub fn new(
        config: &LiveConfig,
        style_tx: mpsc::Sender<StyleMsg>,
        ws_tx: mpsc::Sender<WsMsg>,
    ) -> notify::Result<Self> {
        // Create sync channel for notify (it doesn't support async)
        let (notify_tx, notify_rx) = std::sync::mpsc::channel();

        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = notify_tx.send(res);
        })?;

        let targets = WatchTargets::from_config(config);
        let mut watch_roots = WatchRoots::for_files(targets.paths());
        watch_roots.attach_existing(&mut watcher)?;

        let mut freshness = Freshness::new();
        freshness.prime(targets.paths());

        Ok(Self {
            notify_rx,
            watcher,
            watch_roots,
            targets,
            freshness,
            debouncer: Debouncer::new(),
            style_tx,
            ws_tx,
        })
    }

    /// Run the actor event loop
    pub async fn run(self) {
        let Self {
            notify_rx,
            mut watcher,
            mut watch_roots,
            targets,
            mut freshness,
            mut debouncer,
            style_tx,
            ws_tx,
        } = self;

        let (async_tx, mut async_rx) = mpsc::channel::<notify::Event>(64);

        // Spawn a thread to poll notify events and send to async channel
        std::thread::spawn(move || {
            while let Ok(result) = notify_rx.recv() {
                match result {
                    Ok(event) => {
                        if async_tx.blocking_send(event).is_err() {
                            break; // Receiver dropped
                        }
                    }
                    Err(e) => crate::log!("watch"; "notify error: {}", e),
                }
            }
        });

        loop {
            tokio::select! {
                biased;
                event = async_rx.recv() => match event {
                    Some(event) => debouncer.add_event(&event),
                    None => break,
                },
                _ = tokio::time::sleep(debouncer.sleep_duration()) => {
                    watch_roots.maintain(&mut watcher);

                    let Some(raw) = debouncer.take_if_ready() else {
                        continue;
                    };
                    let changed = EventClassifier::classify(raw, &targets, &mut freshness);
                    if route_changes(&changed, &style_tx, &ws_tx).await.is_err() {
                        break;
                    }
                }
            }
        }
    }
}

/// Send the action for each changed target.
///
/// Returns `Err(())` once a receiving actor has shut down.
async fn route_changes(
    changed: &[WatchTarget],
    style_tx: &mpsc::Sender<StyleMsg>,
    ws_tx: &mpsc::Sender<WsMsg>,
) -> Result<(), ()> {
    for &target in changed {
        crate::debug!("watch"; "{} changed", target.label());
        match target {
            WatchTarget::StyleSource => style_tx.send(StyleMsg::Compile).await.map_err(|_| ())?,
            WatchTarget::StyleOutput => ws_tx
                .send(WsMsg::Broadcast(Notification::Style))
                .await
                .map_err(|_| ())?,
            WatchTarget::Document => {
                crate::log!("watch"; "document changed, reloading pages");
                ws_tx
                    .send(WsMsg::Broadcast(Notification::Reload))
                    .await
                    .map_err(|_| ())?
            }
        }
    }
    Ok(())
}
