//! Error types for dtree

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a dtree run.
///
/// Per-entry filesystem failures during a scan are not errors: the builder
/// absorbs them into zero-sized nodes. Only configuration problems, an
/// invalid root and output failures surface here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid value for sort: '{0}' (expected name, size or files)")]
    InvalidSortKey(String),

    #[error("invalid value for min-size: '{0}'")]
    InvalidMinSize(String),

    #[error("cannot access '{}': {source}", .path.display())]
    NotFound { path: PathBuf, source: io::Error },

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
