//! TreeBuilder - scans a directory into an aggregated in-memory tree

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

use super::config::BuilderConfig;
use super::node::Node;

/// Stack for traversal workers. Each nesting level recurses through rayon,
/// so rayon's 2 MiB default overflows on deep trees in debug builds.
const WORKER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Check that `path` exists and is a directory before scanning it.
pub fn validate_root(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|source| Error::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Builds the full tree for a directory, aggregating sizes and counts
/// bottom-up.
///
/// Subdirectories of the same parent are scanned as independent rayon tasks
/// unless the builder is sequential. A parent only aggregates once every
/// child subtree has been built, so the result is the same either way.
pub struct TreeBuilder {
    config: BuilderConfig,
}

impl TreeBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// Scan `root`. The root is assumed to be a directory (see
    /// [`validate_root`]); entries that cannot be read are absorbed as empty
    /// nodes and never abort the scan.
    pub fn build(&self, root: &Path) -> Node {
        let start = Instant::now();
        let parallel = self.config.is_parallel();

        let children = if !parallel {
            scan_dir(root, 0, false)
        } else {
            // num_threads(0) lets rayon pick one thread per core
            let workers = self.config.parallel_workers;
            match rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .stack_size(WORKER_STACK_SIZE)
                .build()
            {
                Ok(pool) => pool.install(|| scan_dir(root, 0, true)),
                Err(err) => {
                    // Fall back to rayon's global pool if custom pool creation fails
                    warn!(workers, error = %err, "could not build traversal pool, using default");
                    scan_dir(root, 0, true)
                }
            }
        };

        let mut tree = Node::directory(root.to_string_lossy(), 0, 0);
        match children {
            Ok(children) => children.into_iter().for_each(|c| tree.add_child(c)),
            Err(err) => warn!(path = %root.display(), error = %err, "cannot read root directory"),
        }

        info!(
            path = %root.display(),
            dirs = tree.dir_count,
            files = tree.file_count,
            bytes = tree.size,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "scan complete"
        );
        tree
    }
}

/// List a directory once, ordered by file name.
fn read_entries(path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(path)?
        .filter_map(|entry| match entry {
            Ok(e) => Some(e.path()),
            Err(err) => {
                debug!(dir = %path.display(), error = %err, "skipping unreadable entry");
                None
            }
        })
        .collect();
    entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(entries)
}

/// Build the children of the directory at `path`, which sits at `depth`.
fn scan_dir(path: &Path, depth: usize, parallel: bool) -> io::Result<Vec<Node>> {
    let entries = read_entries(path)?;
    let child_depth = depth + 1;

    let nodes: Vec<Node> = if parallel {
        entries
            .par_iter()
            .enumerate()
            .map(|(i, entry)| build_entry(entry, child_depth, i, parallel))
            .collect()
    } else {
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| build_entry(entry, child_depth, i, parallel))
            .collect()
    };
    Ok(nodes)
}

fn build_entry(path: &Path, depth: usize, read_index: usize, parallel: bool) -> Node {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    // Symlinks are sized as links and never followed
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "cannot stat entry");
            return Node::unreadable(name, depth, read_index);
        }
    };

    if !metadata.is_dir() {
        return Node::file(name, depth, read_index, metadata.len());
    }

    let mut dir = Node::directory(name, depth, read_index);
    attach_listing(&mut dir, path, scan_dir(path, depth, parallel));
    dir
}

/// Fold a directory's listing into its node. A listing that failed leaves an
/// empty directory, which its parent still counts as a directory.
fn attach_listing(dir: &mut Node, path: &Path, listing: io::Result<Vec<Node>>) {
    match listing {
        Ok(children) => children.into_iter().for_each(|c| dir.add_child(c)),
        Err(err) => debug!(path = %path.display(), error = %err, "cannot read directory"),
    }
}
