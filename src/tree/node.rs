//! In-memory tree with bottom-up aggregates

/// One filesystem entry with its aggregated totals.
///
/// For a directory, `size`, `file_count` and `dir_count` cover everything
/// below it. `dir_count` counts descendant directories only, never the
/// directory itself, so the root's count excludes the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub size: u64,
    pub file_count: u64,
    pub dir_count: u64,
    pub is_dir: bool,
    pub depth: usize,
    /// Position in the parent's listing; the last tie-break when sorting.
    pub read_index: usize,
    pub children: Vec<Node>,
}

impl Node {
    /// A readable non-directory entry.
    pub fn file(name: impl Into<String>, depth: usize, read_index: usize, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            file_count: 1,
            dir_count: 0,
            is_dir: false,
            depth,
            read_index,
            children: Vec::new(),
        }
    }

    /// An entry that could not be stat'ed. Contributes nothing to its parent.
    pub fn unreadable(name: impl Into<String>, depth: usize, read_index: usize) -> Self {
        Self {
            file_count: 0,
            ..Self::file(name, depth, read_index, 0)
        }
    }

    /// An empty directory; fill it with [`Node::add_child`].
    pub fn directory(name: impl Into<String>, depth: usize, read_index: usize) -> Self {
        Self {
            name: name.into(),
            size: 0,
            file_count: 0,
            dir_count: 0,
            is_dir: true,
            depth,
            read_index,
            children: Vec::new(),
        }
    }

    /// Append a finished subtree and fold its totals into this node.
    pub fn add_child(&mut self, child: Node) {
        self.size += child.size;
        self.file_count += child.file_count;
        self.dir_count += child.dir_count;
        if child.is_dir {
            self.dir_count += 1;
        }
        self.children.push(child);
    }
}
