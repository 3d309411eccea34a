//! Configuration section definitions.
//!
//! | Section    | Purpose                                     |
//! |------------|---------------------------------------------|
//! | `[serve]`  | HTTP / WebSocket binding                    |
//! | `[files]`  | Canonical document path                     |
//! | `[style]`  | SCSS source, compiled output, minification  |
//! | `[agent]`  | In-page sync script settings                |

mod agent;
mod files;
mod serve;
mod style;

pub use agent::AgentConfig;
pub use files::FilesConfig;
pub use serve::ServeConfig;
pub use style::StyleConfig;
