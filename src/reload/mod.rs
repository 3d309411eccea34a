//! Reload Module
//!
//! WebSocket-based change notification for open pages.
//!
//! # Architecture
//!
//! ```text
//! FsActor -> StyleActor (scss) ---------> (output written, seen by FsActor)
//!    |
//!    +-----> WsActor -> Browser  ("style" / "reload")
//! ```
//!
//! # Modules
//!
//! - `message` - Notification kinds and their wire text
//! - `server` - WebSocket listener handing connections to `WsActor`

pub mod message;
pub mod server;
