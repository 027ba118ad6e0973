//! # pysloc
//!
//! A CLI tool for counting Python source lines of code (SLOC) in a
//! directory tree, excluding blank lines and comments.
//!
//! ## Overview
//!
//! pysloc is built on top of pysloclib and provides the command-line
//! surface: argument parsing, logging setup, and report emission. All
//! output — the per-file summary, the total, and every diagnostic — goes
//! through one logging channel, which writes to the console at the chosen
//! verbosity and mirrors everything at debug level into `pysloc.log` in the
//! working directory.
//!
//! ## Usage
//!
//! ```bash
//! # Count SLOC under a project
//! pysloc src/
//!
//! # Only the total
//! pysloc src/ --total-only
//!
//! # Skip generated and vendored code
//! pysloc . -i "vendor/*" -i "*_pb2.py"
//!
//! # Include dotfiles and dot-directories
//! pysloc . --include-hidden
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use pysloclib::{count_tree, IgnoreSpec, ScanOptions};
use tracing::{debug, error};
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

mod report;

/// Log file written in the working directory on every run, truncated at
/// startup. It mirrors console diagnostics at debug level.
const LOG_FILE: &str = "pysloc.log";

#[derive(Parser, Debug)]
#[command(
    name = "pysloc",
    version,
    about = "Count Python source lines of code (SLOC) in a directory tree"
)]
struct Cli {
    /// Root directory to scan
    root: PathBuf,

    /// Glob pattern for files/directories to ignore (repeatable)
    #[arg(short = 'i', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Only emit the total SLOC line, no per-file breakdown
    #[arg(long)]
    total_only: bool,

    /// Include hidden files and directories (names starting with ".")
    #[arg(long)]
    include_hidden: bool,

    /// Verbose output (debug-level logging, including every ignore decision)
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress informational output; warnings and errors still surface
    #[arg(short, long)]
    quiet: bool,
}

/// Initialize the logging channel: a console sink at the requested
/// verbosity plus a debug-level file sink.
fn setup_logging(verbose: bool, quiet: bool) -> anyhow::Result<()> {
    let console_level = if verbose {
        LevelFilter::DEBUG
    } else if quiet {
        LevelFilter::WARN
    } else {
        LevelFilter::INFO
    };

    let log_file = File::create(LOG_FILE)
        .with_context(|| format!("failed to create log file '{LOG_FILE}'"))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false)
                .with_filter(console_level),
        )
        .with(
            fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .with_target(false)
                .with_filter(LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ignore = IgnoreSpec::new(&cli.ignore)?;
    if !ignore.is_empty() {
        debug!("ignore patterns: {:?}", cli.ignore);
    }

    let options = ScanOptions::new()
        .ignore(ignore)
        .include_hidden(cli.include_hidden);

    let result = count_tree(&cli.root, &options)
        .with_context(|| format!("failed to scan '{}'", cli.root.display()))?;

    report::emit_summary(&cli.root, &result, cli.total_only);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(cli.verbose, cli.quiet) {
        eprintln!("Error: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
