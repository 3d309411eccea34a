//! `[serve]` section configuration.
//!
//! Contains development server settings.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"     # Network interface (127.0.0.1 = localhost only)
//! port = 8080                 # HTTP port number
//! ws_port = 35729             # Live reload WebSocket port
//! ```
//!
//! Use `interface = "0.0.0.0"` to make the editor reachable from LAN.

use std::net::{IpAddr, Ipv4Addr};

use serde::Deserialize;

/// Development server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    pub interface: IpAddr,

    /// HTTP port number.
    pub port: u16,

    /// WebSocket port for change notifications.
    pub ws_port: u16,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 8080,
            ws_port: 35729,
        }
    }
}
