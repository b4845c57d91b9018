//! Directory scanning and the aggregated tree model
//!
//! - `TreeBuilder`: reads a directory once per level, optionally in parallel,
//!   and returns a `Node` whose totals are summed bottom-up
//! - `SortKey`: sibling ordering used by the renderers

mod builder;
mod config;
mod node;
mod sort;

// Re-export public types
pub use builder::{TreeBuilder, validate_root};
pub use config::BuilderConfig;
pub use node::Node;
pub use sort::SortKey;
