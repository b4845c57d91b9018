//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file of `len` bytes.
    ///
    /// Creates parent directories as needed.
    pub fn add_file(&self, path: &str, len: usize) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, vec![b'x'; len]).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a wide and deep tree: `dirs` directories per level, `depth`
    /// levels, `files` files per directory.
    pub fn populate(&self, dirs: usize, depth: usize, files: usize) {
        fn fill(root: &Path, dirs: usize, depth: usize, files: usize) {
            for f in 0..files {
                fs::write(root.join(format!("file_{}.dat", f)), vec![b'x'; f * 100])
                    .expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for d in 0..dirs {
                let sub = root.join(format!("dir_{}", d));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, dirs, depth - 1, files);
            }
        }
        fill(self.dir.path(), dirs, depth, files);
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
