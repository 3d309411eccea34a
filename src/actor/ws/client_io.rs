use std::net::TcpStream;
use std::sync::Arc;
use std::time::Duration;

use tungstenite::protocol::Message;

use super::{Clients, RegisteredClient, WsActor};

/// Reader poll interval
const READ_POLL: Duration = Duration::from_millis(100);

/// Upper bound on a handshake; a silent peer must not stall broadcasts
pub(super) const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(2);

impl WsActor {
    /// Complete the handshake and register the client
    pub(super) fn add_client(&self, stream: TcpStream) {
        let peer = stream.peer_addr().ok();

        if let Err(e) = stream.set_read_timeout(Some(HANDSHAKE_TIMEOUT)) {
            crate::log!("ws"; "failed to configure client socket: {}", e);
            return;
        }

        // Blocking with a timeout during handshake, non-blocking after
        match tungstenite::accept(stream) {
            Ok(ws) => {
                let socket = ws.get_ref();
                let configured = socket
                    .set_read_timeout(None)
                    .and_then(|()| socket.set_nonblocking(true));
                if let Err(e) = configured {
                    crate::log!("ws"; "failed to configure client socket: {}", e);
                    return;
                }

                let mut clients = self.clients.lock();
                clients.push(RegisteredClient { ws, peer });
                crate::debug!("ws"; "client connected (total: {})", clients.len());
            }
            Err(e) => {
                crate::log!("ws"; "handshake failed: {}", e);
            }
        }
    }

    /// Background thread dropping clients that closed.
    ///
    /// Exits once the actor (the only other owner of `clients`) is gone.
    pub(super) fn client_reader_loop(clients: Clients) {
        while Arc::strong_count(&clients) > 1 {
            std::thread::sleep(READ_POLL);
            Self::sweep(&clients);
        }
    }

    /// One non-blocking read pass over all clients.
    ///
    /// Client text is ignored; a Close frame or a read error removes the
    /// client. Returns how many clients were removed.
    pub(super) fn sweep(clients: &Clients) -> usize {
        let mut clients = clients.lock();
        let before = clients.len();

        clients.retain_mut(|client| match client.ws.read() {
            Ok(Message::Close(_)) => {
                crate::debug!("ws"; "client closed: {:?}", client.peer);
                false
            }
            Ok(_) => true,
            Err(tungstenite::Error::Io(ref e)) if e.kind() == std::io::ErrorKind::WouldBlock => {
                true
            }
            Err(e) => {
                crate::debug!("ws"; "client dropped {:?}: {}", client.peer, e);
                false
            }
        });

        before - clients.len()
    }
}
