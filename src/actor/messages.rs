//! Actor Message Definitions
//!
//! Message types for inter-actor communication.
//!
//! ```text
//! FsActor --Compile--> StyleActor
//! FsActor --Broadcast--> WsActor
//! ```

use std::net::TcpStream;

use crate::reload::message::Notification;

// =============================================================================
// StyleActor Messages
// =============================================================================

/// Messages to Style Actor
#[derive(Debug)]
pub enum StyleMsg {
    /// Recompile the stylesheet source
    Compile,
    /// Shutdown
    Shutdown,
}

// =============================================================================
// WsActor Messages
// =============================================================================

/// Messages to WebSocket Actor
#[derive(Debug)]
pub enum WsMsg {
    /// Register a freshly accepted connection (handshake pending)
    AddClient(TcpStream),
    /// Send a notification to every connected page
    Broadcast(Notification),
    /// Close all clients and stop
    Shutdown,
}
