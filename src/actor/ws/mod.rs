//! WebSocket Actor - change notification fan-out
//!
//! This actor is responsible for:
//! - Completing the WebSocket handshake for new connections
//! - Broadcasting notifications to all connected pages
//! - Dropping clients that closed or failed
//!
//! # Architecture
//!
//! ```text
//! FsActor --[Broadcast]--> WsActor --[style/reload]--> Clients
//!                             ^                          |
//!                             +------[Close frame]-------+
//! ```

mod client_io;
mod delivery;

#[cfg(test)]
mod tests;

use std::net::{SocketAddr, TcpStream};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tungstenite::WebSocket;

use super::messages::WsMsg;

/// A connected page
struct RegisteredClient {
    ws: WebSocket<TcpStream>,
    peer: Option<SocketAddr>,
}

/// Client set shared between the actor and its reader thread
type Clients = Arc<Mutex<Vec<RegisteredClient>>>;

/// WebSocket Actor - manages client connections and broadcasts
pub struct WsActor {
    /// Channel to receive messages
    rx: mpsc::Receiver<WsMsg>,
    /// Connected clients (shared for broadcast + read threads)
    clients: Clients,
}

impl WsActor {
    /// Create a new WsActor
    pub fn new(rx: mpsc::Receiver<WsMsg>) -> Self {
        Self {
            rx,
            clients: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of connected clients
    #[cfg(test)]
    pub fn client_count(&self) -> usize {
        self.clients.lock().len()
    }

    /// Run the actor event loop
    pub async fn run(mut self) {
        // Poll clients for Close frames in the background
        let clients_for_reader = Arc::clone(&self.clients);
        std::thread::spawn(move || {
            Self::client_reader_loop(clients_for_reader);
        });

        while let Some(msg) = self.rx.recv().await {
            match msg {
                WsMsg::AddClient(stream) => self.add_client(stream),
                WsMsg::Broadcast(notification) => self.broadcast(notification),
                WsMsg::Shutdown => break,
            }
        }

        crate::debug!("ws"; "shutting down");
        self.close_all();
    }

    /// Close every client connection
    fn close_all(&self) {
        let mut clients = self.clients.lock();
        for mut client in clients.drain(..) {
            let _ = client.ws.close(None);
            let _ = client.ws.flush();
        }
    }
}
