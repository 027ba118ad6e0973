//! Error types for pysloclib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during SLOC counting
#[derive(Error, Debug)]
pub enum PyslocError {
    /// Failed to read or decode a file
    #[error("failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Path does not exist
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    /// Scan root is not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
