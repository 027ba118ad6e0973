//! High-level SLOC counting API.
//!
//! The tree walker is the orchestrator of the whole pipeline: it validates
//! the root, prunes ignored and hidden entries before descending, hands each
//! eligible file to the scanner, and aggregates the results in walk order.

use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::PyslocError;
use crate::filter::is_hidden;
use crate::options::ScanOptions;
use crate::scanner::scan_file;
use crate::stats::{CountResult, ScanResult};
use crate::Result;

/// Count SLOC for all matching files under a directory.
///
/// Fatal errors (root missing or not a directory) are returned before any
/// scanning starts. Per-file failures are logged as warnings and the walk
/// continues; the failed file is excluded from the result entirely.
///
/// The traversal is depth-first with entries sorted by file name, so two
/// runs over an unchanged tree produce identical results.
///
/// # Example
///
/// ```rust,ignore
/// use pysloclib::{count_tree, IgnoreSpec, ScanOptions};
///
/// let options = ScanOptions::new().ignore(IgnoreSpec::new(["tests/*"])?);
/// let result = count_tree("src/", &options)?;
/// println!("total: {}", result.total);
/// ```
pub fn count_tree(root: impl AsRef<Path>, options: &ScanOptions) -> Result<CountResult> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(PyslocError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(PyslocError::NotADirectory(root.to_path_buf()));
    }

    debug!(
        "walking {} for .{} files",
        root.display(),
        options.extension
    );

    let mut result = CountResult::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter();

    for entry in walker.filter_entry(|e| {
        // Always keep the root itself; pruning it would end the walk.
        if e.depth() == 0 {
            return true;
        }
        if !options.include_hidden && is_hidden(e.path()) {
            debug!("skipping hidden path: {}", e.path().display());
            return false;
        }
        // A pruned directory is never opened, so nothing under it is
        // visited, scanned, or reported.
        !options.ignore.matches(e.path(), root)
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!("failed to read directory entry: {e}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        // Non-source files are skipped silently; only ignore-rule decisions
        // are logged.
        if path
            .extension()
            .is_none_or(|ext| ext != options.extension.as_str())
        {
            continue;
        }

        match scan_file(path) {
            Ok(scan) => result.add_file(scan),
            Err(e) => warn!("skipping {}: {e}", path.display()),
        }
    }

    Ok(result)
}

/// Count SLOC in a single file.
pub fn count_file(path: impl AsRef<Path>) -> Result<ScanResult> {
    scan_file(path)
}
