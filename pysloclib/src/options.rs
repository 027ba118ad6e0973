//! Run configuration for tree scans.

use crate::filter::IgnoreSpec;

/// Options controlling a tree scan.
///
/// Built once, then passed by reference to [`crate::counter::count_tree`].
/// Presentation concerns (total-only output, verbosity) belong to the
/// caller, not to the scan itself.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Glob patterns for files and directories to skip
    pub ignore: IgnoreSpec,
    /// Include hidden files and directories (names starting with ".")
    pub include_hidden: bool,
    /// Source file extension to scan, without the dot
    pub extension: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            ignore: IgnoreSpec::default(),
            include_hidden: false,
            extension: "py".to_string(),
        }
    }
}

impl ScanOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ignore spec.
    pub fn ignore(mut self, spec: IgnoreSpec) -> Self {
        self.ignore = spec;
        self
    }

    /// Include hidden files and directories.
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Override the source file extension (default: `py`).
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = ext.into();
        self
    }
}
