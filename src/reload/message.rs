//! Notification messages sent to connected pages.
//!
//! The wire format is a bare text frame. The agent treats `style` as a
//! stylesheet swap and anything else as a full reload.

use std::fmt;

/// What connected pages should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// The compiled stylesheet changed: re-fetch it in place.
    Style,
    /// The canonical document changed: reload the page.
    Reload,
}

impl Notification {
    /// Text frame payload.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Style => "style",
            Self::Reload => "reload",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
