//! Ignore matching with glob pattern support.
//!
//! Decides whether a file or directory should be skipped: hidden-name
//! detection plus an ordered set of shell-glob patterns. Each pattern is
//! tested against three derived forms of a path (absolute, relative to the
//! scan root, and basename alone) with the first match short-circuiting.
//! A basename pattern therefore ignores every same-named entry anywhere in
//! the tree.
//!
//! Matching is pure string work; the walker decides what to do with the
//! answer.

use std::path::Path;

use glob::Pattern;
use tracing::debug;

use crate::error::PyslocError;
use crate::Result;

/// An ordered set of glob patterns naming files and directories to skip.
///
/// Built once from the command line and read-only for the rest of the run.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSpec {
    patterns: Vec<Pattern>,
}

impl IgnoreSpec {
    /// Compile an ignore spec from pattern strings.
    ///
    /// Fails with [`PyslocError::InvalidGlob`] on the first malformed
    /// pattern, before any traversal begins.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let pat = Pattern::new(pattern).map_err(|e| PyslocError::InvalidGlob {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
            compiled.push(pat);
        }
        Ok(Self { patterns: compiled })
    }

    /// Whether the spec contains no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check whether `path` matches any pattern.
    ///
    /// Each pattern is tested against the absolute form, the form relative
    /// to `root`, and the basename; the first hit wins and is logged at
    /// debug level.
    pub fn matches(&self, path: &Path, root: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let abs = std::path::absolute(path)
            .unwrap_or_else(|_| path.to_path_buf())
            .to_string_lossy()
            .into_owned();
        let rel = path
            .strip_prefix(root)
            .map(|p| p.to_string_lossy().into_owned())
            .ok();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());

        for pattern in &self.patterns {
            let hit = pattern.matches(&abs)
                || rel.as_deref().is_some_and(|r| pattern.matches(r))
                || name.as_deref().is_some_and(|n| pattern.matches(n));
            if hit {
                debug!(
                    "ignoring {} (matched pattern \"{}\")",
                    path.display(),
                    pattern.as_str()
                );
                return true;
            }
        }
        false
    }
}

/// Whether a path's basename starts with the hidden-file marker.
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with('.'))
}
