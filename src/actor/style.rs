//! Style Actor
//!
//! Recompiles the stylesheet when the watcher reports a source change.
//! The written output is picked up by the watcher in turn, which tells
//! pages to swap their stylesheet.

use std::sync::Arc;

use tokio::sync::mpsc;

use super::messages::StyleMsg;
use crate::config::LiveConfig;
use crate::style::compile_and_report;

pub struct StyleActor {
    rx: mpsc::Receiver<StyleMsg>,
    config: Arc<LiveConfig>,
}

impl StyleActor {
    pub fn new(rx: mpsc::Receiver<StyleMsg>, config: Arc<LiveConfig>) -> Self {
        Self { rx, config }
    }

    /// Run the actor event loop
    pub async fn run(mut self) {
        while let Some(msg) = self.rx.recv().await {
            if matches!(msg, StyleMsg::Shutdown) {
                break;
            }

            // Coalesce requests queued during a slow compile
            let mut shutdown = false;
            while let Ok(next) = self.rx.try_recv() {
                shutdown |= matches!(next, StyleMsg::Shutdown);
            }

            let config = Arc::clone(&self.config);
            let _ = tokio::task::spawn_blocking(move || compile_and_report(&config)).await;

            if shutdown {
                break;
            }
        }
        crate::debug!("style"; "shutting down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_compile_message_writes_output() {
        let dir = TempDir::new().unwrap();
        let config = Arc::new(test_config(dir.path()));
        fs::write(&config.style.source, "$c: red;\nbody { color: $c; }\n").unwrap();

        let (tx, rx) = mpsc::channel(4);
        tx.send(StyleMsg::Compile).await.unwrap();
        tx.send(StyleMsg::Shutdown).await.unwrap();
        StyleActor::new(rx, Arc::clone(&config)).run().await;

        let css = fs::read_to_string(&config.style.output).unwrap();
        assert!(css.contains("color: red"));
    }

    #[tokio::test]
    async fn test_stops_when_senders_dropped() {
        let dir = TempDir::new().unwrap();
        let (tx, rx) = mpsc::channel(1);
        drop(tx);
        StyleActor::new(rx, Arc::new(test_config(dir.path()))).run().await;
    }
}
