//! WebSocket listener for change notifications.
//!
//! Accepts raw TCP connections and forwards them to `WsActor`, which owns
//! the handshake and the client set.

use std::net::{IpAddr, SocketAddr, TcpListener};
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::actor::messages::WsMsg;

/// Maximum port retry attempts
const MAX_PORT_RETRIES: u16 = 10;

/// Accept poll interval while idle
const ACCEPT_POLL: Duration = Duration::from_millis(100);

/// Start the WebSocket listener, sending each new connection to `WsActor`.
///
/// Returns the bound port, which is `base_port` or the first free port above it.
pub fn start_ws_server(
    interface: IpAddr,
    base_port: u16,
    ws_tx: mpsc::Sender<WsMsg>,
) -> Result<u16> {
    let (listener, actual_port) = try_bind_port(interface, base_port, MAX_PORT_RETRIES)?;
    listener.set_nonblocking(true)?;

    std::thread::spawn(move || {
        loop {
            if crate::core::is_shutdown() {
                break;
            }
            match listener.accept() {
                Ok((stream, addr)) => {
                    crate::debug!("ws"; "connection from {}", addr);

                    // Handshake runs in blocking mode
                    let _ = stream.set_nonblocking(false);

                    if ws_tx.blocking_send(WsMsg::AddClient(stream)).is_err() {
                        crate::debug!("ws"; "actor gone, listener stopped");
                        break;
                    }
                }
                Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                    std::thread::sleep(ACCEPT_POLL);
                }
                Err(e) => {
                    crate::log!("ws"; "accept error: {}", e);
                    break;
                }
            }
        }
    });

    Ok(actual_port)
}

/// Try binding to port, retry with incremented port if in use
fn try_bind_port(interface: IpAddr, base_port: u16, max_retries: u16) -> Result<(TcpListener, u16)> {
    let mut last_error = None;

    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        match TcpListener::bind(SocketAddr::new(interface, port)) {
            Ok(listener) => {
                let actual_port = listener.local_addr()?.port();
                return Ok((listener, actual_port));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow::anyhow!(
        "failed to bind WebSocket listener after {} attempts: {}",
        max_retries,
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

    #[test]
    fn test_bind_skips_busy_port() {
        let (busy, busy_port) = try_bind_port(LOCALHOST, 0, 1).unwrap();
        let (_listener, port) = try_bind_port(LOCALHOST, busy_port, MAX_PORT_RETRIES).unwrap();
        assert_ne!(port, busy_port);
        drop(busy);
    }

    #[test]
    fn test_accepted_stream_reaches_actor_channel() {
        let (tx, mut rx) = mpsc::channel(4);
        let port = start_ws_server(LOCALHOST, 0, tx).unwrap();

        let _client = std::net::TcpStream::connect((LOCALHOST, port)).unwrap();
        match rx.blocking_recv() {
            Some(WsMsg::AddClient(_)) => {}
            other => panic!("expected AddClient, got {other:?}"),
        }
    }
}
