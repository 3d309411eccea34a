//! Server lifecycle management.

use crate::{
    actor::{Coordinator, messages::WsMsg},
    config::LiveConfig,
    core::register_server,
    log,
};
use anyhow::Result;
use crossbeam::channel::{Receiver, Sender};
use std::{
    net::SocketAddr,
    sync::Arc,
    thread::{self, JoinHandle},
};
use tiny_http::Server;
use tokio::sync::mpsc;

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

/// Bind to the specified interface and port, with automatic port retry.
pub fn bind_with_retry(
    interface: std::net::IpAddr,
    base_port: u16,
) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        match Server::http(SocketAddr::new(interface, port)) {
            Ok(server) => {
                let addr = server
                    .server_addr()
                    .to_ip()
                    .unwrap_or_else(|| SocketAddr::new(interface, port));
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, addr.port());
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow::anyhow!(
        "failed to bind after {} attempts (ports {}-{}): {}",
        MAX_PORT_RETRIES,
        base_port,
        base_port.saturating_add(MAX_PORT_RETRIES - 1),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

/// Register server for graceful shutdown.
///
/// When Ctrl+C is pressed, the global handler set up in main() will
/// unblock the server and notify actors.
pub fn register_server_for_shutdown(server: Arc<Server>, shutdown_tx: Sender<()>) {
    register_server(server, shutdown_tx);
}

/// Spawn the actor system for file watching and change notification.
pub fn spawn_actors(
    config: Arc<LiveConfig>,
    ws_channel: (mpsc::Sender<WsMsg>, mpsc::Receiver<WsMsg>),
    shutdown_rx: Receiver<()>,
) -> JoinHandle<()> {
    thread::spawn(move || run_actor_system(config, ws_channel, shutdown_rx))
}

fn run_actor_system(
    config: Arc<LiveConfig>,
    (ws_tx, ws_rx): (mpsc::Sender<WsMsg>, mpsc::Receiver<WsMsg>),
    shutdown_rx: Receiver<()>,
) {
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log!("error"; "failed to create tokio runtime: {}", e);
            return;
        }
    };

    rt.block_on(async {
        let coordinator =
            Coordinator::new(config, ws_tx, ws_rx).with_shutdown_signal(shutdown_rx);
        if let Err(e) = coordinator.run().await {
            log!("error"; "watcher stopped: {}", e);
        }
    });
}

/// Wait for actor system to shutdown gracefully (max 2 seconds).
pub fn wait_for_shutdown(handle: JoinHandle<()>) {
    for _ in 0..40 {
        if handle.is_finished() {
            let _ = handle.join();
            return;
        }
        thread::sleep(std::time::Duration::from_millis(50));
    }
}
