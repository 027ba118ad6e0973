//! Core data structures for SLOC results

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// SLOC count for a single scanned file.
///
/// Created once per file and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Path to the file
    pub path: PathBuf,
    /// Lines classified as code (not blank, not comment)
    pub code_lines: u64,
}

impl ScanResult {
    /// Create a new scan result
    pub fn new(path: PathBuf, code_lines: u64) -> Self {
        Self { path, code_lines }
    }
}

/// Aggregated result of scanning a directory tree.
///
/// The total always equals the sum of the per-file counts; files excluded by
/// ignore rules or skipped after a read failure never appear in either.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    /// Per-file results, in walk order
    pub files: Vec<ScanResult>,
    /// Sum of code lines across all files
    pub total: u64,
}

impl CountResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file's result, keeping the total in sync
    pub fn add_file(&mut self, result: ScanResult) {
        self.total += result.code_lines;
        self.files.push(result);
    }

    /// Number of files counted
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
