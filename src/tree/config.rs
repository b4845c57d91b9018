//! Configuration types for the tree builder

/// Configuration for building a tree.
#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    /// Number of parallel workers for directory traversal.
    /// 0 = auto-detect (rayon's global pool, one thread per core)
    /// 1 = sequential (no parallelism)
    /// N = dedicated pool of N worker threads
    pub parallel_workers: usize,
}

impl BuilderConfig {
    pub fn sequential() -> Self {
        Self {
            parallel_workers: 1,
        }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel_workers != 1
    }
}
