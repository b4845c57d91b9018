//! Output configuration types

use crate::error::Result;
use crate::tree::{Node, SortKey};

/// Configuration for rendering a built tree.
///
/// Filtering only affects what is displayed. The totals stored in the tree,
/// and therefore the summary line, always describe the unfiltered scan.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Deepest level to display; the root is level 0. `None` = unlimited.
    pub max_depth: Option<usize>,
    /// Hide children whose size is not strictly greater than this.
    pub min_size: Option<u64>,
    pub sort_key: SortKey,
    pub use_color: bool,
}

impl RenderConfig {
    /// Build a config from command-line style values, where any negative
    /// depth or size means "unlimited". The sort key is validated here so an
    /// invalid key is reported before anything is rendered.
    pub fn from_raw(max_depth: i64, min_size: i64, sort_key: &str, use_color: bool) -> Result<Self> {
        Ok(Self {
            max_depth: usize::try_from(max_depth).ok(),
            min_size: u64::try_from(min_size).ok(),
            sort_key: sort_key.parse()?,
            use_color,
        })
    }

    /// Check if nodes at `depth` are displayed.
    pub fn shows_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }

    /// Check if a child passes the size filter.
    pub fn passes_size_filter(&self, node: &Node) -> bool {
        self.min_size.is_none_or(|min| node.size > min)
    }
}
