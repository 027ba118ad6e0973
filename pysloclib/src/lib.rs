//! # pysloclib
//!
//! A Python SLOC (source lines of code) counter library: walks a directory
//! tree, classifies each line of every `.py` file as code, comment, or
//! blank, and aggregates per-file and total counts.
//!
//! ## Overview
//!
//! The whole library is one linear pipeline:
//!
//! - **Classifier** ([`classifier`]): a pure two-state machine over Python
//!   comment syntax (`#` line comments, `"""`/`'''` block comments).
//! - **Ignore matching** ([`filter`]): shell-glob patterns tested against
//!   absolute, root-relative, and basename forms of each path, plus
//!   hidden-name detection.
//! - **Scanning** ([`scanner`]): per-file line fold producing a
//!   [`ScanResult`].
//! - **Walking** ([`counter`]): deterministic depth-first traversal with
//!   directory pruning; per-file failures are isolated, never fatal.
//!
//! Results are plain data types; presentation is the caller's business.
//!
//! ## Example
//!
//! ```rust
//! use pysloclib::{count_tree, IgnoreSpec, ScanOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Set up a small tree
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("app.py"), "# setup\n\nprint('hi')\n").unwrap();
//! fs::create_dir(dir.path().join("tests")).unwrap();
//! fs::write(dir.path().join("tests/test_app.py"), "assert True\n").unwrap();
//!
//! // Count everything
//! let result = count_tree(dir.path(), &ScanOptions::new()).unwrap();
//! assert_eq!(result.total, 2);
//!
//! // Count with an ignore pattern
//! let options = ScanOptions::new().ignore(IgnoreSpec::new(["tests/*"]).unwrap());
//! let result = count_tree(dir.path(), &options).unwrap();
//! assert_eq!(result.total, 1);
//! ```

pub mod classifier;
pub mod counter;
pub mod error;
pub mod filter;
pub mod options;
pub mod scanner;
pub mod stats;

pub use classifier::{classify, BlockDelim, LineCategory, LineState};
pub use counter::{count_file, count_tree};
pub use error::PyslocError;
pub use filter::{is_hidden, IgnoreSpec};
pub use options::ScanOptions;
pub use scanner::scan_file;
pub use stats::{CountResult, ScanResult};

/// Result type for pysloclib operations
pub type Result<T> = std::result::Result<T, PyslocError>;
