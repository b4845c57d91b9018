//! Sibling ordering

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

use super::node::Node;

/// Field used to order siblings before they are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Ascending by entry name
    #[default]
    Name,
    /// Largest aggregate size first
    Size,
    /// Most files first
    Files,
}

impl SortKey {
    /// Compare two siblings. Ties fall back to listing order, so the result
    /// does not depend on the order in which subtrees finished building.
    pub fn compare(self, a: &Node, b: &Node) -> Ordering {
        let primary = match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Size => b.size.cmp(&a.size),
            SortKey::Files => b.file_count.cmp(&a.file_count),
        };
        primary.then_with(|| a.read_index.cmp(&b.read_index))
    }

    /// Stable in-place sort of a sibling view.
    pub fn sort(self, nodes: &mut [&Node]) {
        nodes.sort_by(|a, b| self.compare(a, b));
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "size" => Ok(SortKey::Size),
            "files" => Ok(SortKey::Files),
            other => Err(Error::InvalidSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortKey::Name => "name",
            SortKey::Size => "size",
            SortKey::Files => "files",
        };
        f.write_str(s)
    }
}
