//! Per-file scanning.
//!
//! Reads a single file line by line, threads the classifier state through
//! the fold, and counts the lines classified as code. The state starts fresh
//! for every file; an unterminated block comment in one file cannot bleed
//! into the next.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::classifier::{classify, LineCategory, LineState};
use crate::error::PyslocError;
use crate::stats::ScanResult;
use crate::Result;

/// Count SLOC in a single file.
///
/// Returns [`PyslocError::FileRead`] when the file cannot be opened or a
/// line cannot be decoded as UTF-8 (e.g. binary content). Callers walking a
/// tree treat that as a per-file failure, not a fatal one.
pub fn scan_file(path: impl AsRef<Path>) -> Result<ScanResult> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| PyslocError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let reader = BufReader::new(file);

    let mut state = LineState::default();
    let mut code_lines = 0u64;

    for line in reader.lines() {
        let line = line.map_err(|e| PyslocError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let (category, next) = classify(&line, state);
        if category == LineCategory::Code {
            code_lines += 1;
        }
        state = next;
    }

    debug!("{} has {} SLOC", path.display(), code_lines);

    Ok(ScanResult::new(path.to_path_buf(), code_lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_counts_code_lines_only() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("sample.py");
        fs::write(
            &path,
            "# header comment\n\nimport os\n\ndef main():\n    pass  # inline\n",
        )
        .unwrap();

        let result = scan_file(&path).unwrap();
        assert_eq!(result.code_lines, 3);
        assert_eq!(result.path, path);
    }

    #[test]
    fn test_blank_only_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("blank.py");
        fs::write(&path, "\n\n   \n\t\n").unwrap();

        let result = scan_file(&path).unwrap();
        assert_eq!(result.code_lines, 0);
    }

    #[test]
    fn test_block_comment_only_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("doc.py");
        fs::write(&path, "\"\"\"\nall of this\nis one docstring\n\"\"\"\n").unwrap();

        let result = scan_file(&path).unwrap();
        assert_eq!(result.code_lines, 0);
    }

    #[test]
    fn test_state_resets_between_files() {
        let temp = tempdir().unwrap();
        let unterminated = temp.path().join("a.py");
        let plain = temp.path().join("b.py");
        // a.py opens a block comment that never closes.
        fs::write(&unterminated, "\"\"\"\nnever closed\nx = 1\n").unwrap();
        fs::write(&plain, "y = 2\n").unwrap();

        let a = scan_file(&unterminated).unwrap();
        let b = scan_file(&plain).unwrap();
        assert_eq!(a.code_lines, 0);
        assert_eq!(b.code_lines, 1);
    }

    #[test]
    fn test_binary_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bad.py");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80, b'\n']).unwrap();

        let result = scan_file(&path);
        assert!(matches!(result, Err(PyslocError::FileRead { .. })));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = scan_file("/nonexistent/never.py");
        assert!(matches!(result, Err(PyslocError::FileRead { .. })));
    }
}
