//! Summary report emission.
//!
//! The report goes through the same logging channel as every diagnostic, so
//! quiet mode suppresses it, verbose mode interleaves it with walk detail,
//! and the log file always carries a copy.

use std::path::Path;

use pysloclib::CountResult;
use tracing::info;

/// Width of the horizontal rules framing the summary.
const RULE_WIDTH: usize = 70;

/// Show a path relative to the scan root when possible.
fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Emit the per-file summary and total, in walk order.
///
/// With `total_only` set, only the total line is emitted.
pub fn emit_summary(root: &Path, result: &CountResult, total_only: bool) {
    if total_only {
        info!("TOTAL SLOC: {}", result.total);
        return;
    }

    info!("{}", "=".repeat(RULE_WIDTH));
    info!("SLOC summary for {}", root.display());
    info!("{}", "-".repeat(RULE_WIDTH));
    for file in &result.files {
        info!("{:8} | {}", file.code_lines, display_path(&file.path, root));
    }
    info!("{}", "-".repeat(RULE_WIDTH));
    info!("TOTAL SLOC: {} ({} files)", result.total, result.file_count());
    info!("{}", "=".repeat(RULE_WIDTH));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_path_relative_to_root() {
        assert_eq!(
            display_path(Path::new("/project/src/a.py"), Path::new("/project")),
            "src/a.py"
        );
    }

    #[test]
    fn test_display_path_outside_root_falls_back() {
        assert_eq!(
            display_path(Path::new("/elsewhere/b.py"), Path::new("/project")),
            "/elsewhere/b.py"
        );
    }
}
