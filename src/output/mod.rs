//! Tree formatting and display
//!
//! - `config` - Render configuration (depth limit, size filter, sort key, color)
//! - `utils` - Shared helpers (sibling view, branch prefixes)
//! - `tree` - Console tree formatter writing to any `termcolor` sink
//! - `json` - JSON output of the same filtered view

mod config;
mod json;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::RenderConfig;
pub use json::{JsonNode, print_json, write_json};
pub use tree::TreeFormatter;
