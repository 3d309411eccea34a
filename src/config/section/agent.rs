//! `[agent]` section configuration.
//!
//! Settings injected into the in-page sync script.
//!
//! ```toml
//! [agent]
//! debounce_ms = 2000          # Idle time after the last edit before saving
//! ```

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub debounce_ms: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self { debounce_ms: 2000 }
    }
}
