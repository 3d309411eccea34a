//! Actor System for Watch Mode
//!
//! Message-passing concurrency for change notification:
//!
//! ```text
//! FsActor --> StyleActor       (scss source changed: recompile)
//!    |
//!    +------> WsActor          (css/document changed: notify pages)
//! ```
//!
//! # Module Structure
//!
//! - `messages` - Message types for inter-actor communication
//! - `fs` - File system watcher with debouncing
//! - `style` - Stylesheet recompilation
//! - `ws` - WebSocket broadcast
//! - `coordinator` - Wires up and runs actors

pub mod coordinator;
pub mod fs;
pub mod messages;
pub mod style;
pub mod ws;

pub use coordinator::Coordinator;
