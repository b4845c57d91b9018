//! Shared helpers for the renderers

use crate::tree::Node;

use super::config::RenderConfig;

/// Branch glyph placed before a non-root entry.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "`-- " } else { "|-- " }
}

/// Calculate the prefix for the children of an entry.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}|   ", prefix)
    }
}

/// Children of `node` that survive the size filter, in display order.
///
/// This is a view over borrowed nodes; the tree itself is never modified.
pub fn visible_children<'a>(node: &'a Node, config: &RenderConfig) -> Vec<&'a Node> {
    let mut view: Vec<&Node> = node
        .children
        .iter()
        .filter(|child| config.passes_size_filter(child))
        .collect();
    config.sort_key.sort(&mut view);
    view
}
