//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `serve` - The in-page sync agent (`agent.js`)
//!
//! # Usage
//!
//! ```ignore
//! use embed::serve::{AGENT_JS, AgentVars};
//!
//! let js = AGENT_JS.render(&AgentVars::from_config(&config));
//! ```

mod template;

pub use template::{Template, TemplateVars};

pub mod serve {
    use super::{Template, TemplateVars};
    use crate::config::LiveConfig;

    /// Variables for agent.js.
    pub struct AgentVars {
        pub ws_port: u16,
        pub debounce_ms: u32,
        /// URL path of the compiled stylesheet (`/index.css`).
        pub stylesheet: String,
    }

    impl AgentVars {
        /// Build agent variables from config.
        ///
        /// `ws_port` is the port the WebSocket listener actually bound,
        /// which may differ from the configured one after a retry.
        pub fn from_config(config: &LiveConfig, ws_port: u16) -> Self {
            Self {
                ws_port,
                debounce_ms: config.agent.debounce_ms,
                stylesheet: config.style.url_path(),
            }
        }
    }

    impl TemplateVars for AgentVars {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__LIVEDIT_WS_PORT__", &self.ws_port.to_string())
                .replace("__LIVEDIT_DEBOUNCE_MS__", &self.debounce_ms.to_string())
                .replace(
                    "__LIVEDIT_STYLESHEET__",
                    &serde_json::to_string(&self.stylesheet).unwrap_or_else(|_| "\"\"".into()),
                )
        }
    }

    /// Sync agent JavaScript, injected inline into every served page.
    pub const AGENT_JS: Template<AgentVars> = Template::new(include_str!("serve/agent.js"));
}

#[cfg(test)]
mod tests {
    use super::serve::{AGENT_JS, AgentVars};

    fn vars() -> AgentVars {
        AgentVars {
            ws_port: 35730,
            debounce_ms: 2000,
            stylesheet: "/index.css".into(),
        }
    }

    #[test]
    fn test_agent_placeholders_replaced() {
        let js = AGENT_JS.render(&vars());
        assert!(!js.contains("__LIVEDIT_"));
        assert!(js.contains("const WS_PORT = 35730;"));
        assert!(js.contains("const DEBOUNCE_MS = 2000;"));
        assert!(js.contains(r#"const STYLESHEET = "/index.css";"#));
    }

    #[test]
    fn test_agent_behaviour_markers() {
        let js = AGENT_JS.render(&vars());
        assert!(js.contains(r#"method: "POST""#));
        assert!(js.contains(r#"querySelectorAll("script")"#));
        assert!(js.contains(r#"e.data === "style""#));
        assert!(js.contains("window.location.reload()"));
        assert!(js.contains(r#""wss" : "ws""#));
    }

    #[test]
    fn test_agent_cannot_close_its_script_tag() {
        let js = AGENT_JS.render(&vars());
        assert!(!js.contains("</script"));
    }
}
