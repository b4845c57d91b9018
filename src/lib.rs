//! dtree - disk usage as a tree
//!
//! Scans a directory into an in-memory tree whose sizes and counts are
//! aggregated bottom-up, then renders it like `tree` with human-readable
//! sizes, sorting, depth limiting and size filtering.

pub mod error;
pub mod output;
pub mod size;
pub mod spinner;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{RenderConfig, TreeFormatter, print_json, write_json};
pub use size::{format_size, parse_size};
pub use spinner::Spinner;
pub use tree::{BuilderConfig, Node, SortKey, TreeBuilder, validate_root};
