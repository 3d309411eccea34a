//! Actor Coordinator - Wires up the Watch Actor System
//!
//! The Coordinator is a thin orchestrator that:
//! - Creates the remaining communication channels
//! - Wires up actors
//! - Runs them concurrently until shutdown

mod runtime;

use std::sync::Arc;

use anyhow::Result;
use crossbeam::channel::Receiver;
use tokio::sync::mpsc;

use super::fs::FsActor;
use super::messages::{StyleMsg, WsMsg};
use super::style::StyleActor;
use super::ws::WsActor;
use crate::config::LiveConfig;

pub const CHANNEL_BUFFER: usize = 32;

/// Coordinator - wires up and runs the actor system.
pub struct Coordinator {
    config: Arc<LiveConfig>,
    ws_tx: mpsc::Sender<WsMsg>,
    ws_rx: mpsc::Receiver<WsMsg>,
    shutdown_rx: Option<Receiver<()>>,
}

impl Coordinator {
    /// Create from config and the WebSocket channel.
    ///
    /// The channel is created by the caller because the WebSocket listener
    /// (which feeds `ws_tx`) is bound before the actors start.
    pub fn new(
        config: Arc<LiveConfig>,
        ws_tx: mpsc::Sender<WsMsg>,
        ws_rx: mpsc::Receiver<WsMsg>,
    ) -> Self {
        Self {
            config,
            ws_tx,
            ws_rx,
            shutdown_rx: None,
        }
    }

    /// Set shutdown signal receiver.
    pub fn with_shutdown_signal(mut self, rx: Receiver<()>) -> Self {
        self.shutdown_rx = Some(rx);
        self
    }

    /// Run the actor system.
    pub async fn run(self) -> Result<()> {
        let (style_tx, style_rx) = mpsc::channel::<StyleMsg>(CHANNEL_BUFFER);

        let fs_actor = FsActor::new(&self.config, style_tx.clone(), self.ws_tx.clone())
            .map_err(|e| anyhow::anyhow!("watcher failed: {}", e))?;
        let style_actor = StyleActor::new(style_rx, Arc::clone(&self.config));
        let ws_actor = WsActor::new(self.ws_rx);

        crate::debug!("actor"; "start");
        runtime::run_actors(
            fs_actor,
            style_actor,
            ws_actor,
            style_tx,
            self.ws_tx,
            self.shutdown_rx,
        )
        .await;

        crate::debug!("actor"; "stopped");
        Ok(())
    }
}
