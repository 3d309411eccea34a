//! Element tree: parsing, serialization, and editability marking.
//!
//! # Module Structure
//!
//! - `node` - Owned recursive tree (`Node`, `Element`, `Attr`)
//! - `parse` - HTML fragment → tree (via `scraper`)
//! - `serialize` - tree → HTML text
//! - `marker` - `contenteditable` toggling (serve vs. persist)
//! - `shell` - Page shell the canonical document is merged into

mod marker;
mod node;
mod parse;
mod serialize;
mod shell;

pub use marker::{mark, unmark_all};
pub use node::{Element, Node};
pub use parse::parse_fragment;
pub use serialize::{serialize, serialize_document};
pub use shell::page_shell;
