//! sdfcheck: distance-field renderer regression runner
//!
//! Renders every SVG input with the distance-field generator, compares the
//! test render against the SVG itself using ImageMagick, and prints one
//! `PASS`/`FAIL` line per shape.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p sdfcheck-runner -- --svg-dir shapes/ [OPTIONS]
//! cargo run -p sdfcheck-runner -- --svg a.svg --svg b.svg --exe build/msdfgen
//! ```
//!
//! ## Exit codes
//!
//! - `0`: every job passed
//! - `1`: a job failed, stop-on-fail fired, ImageMagick is missing, or no input was given
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level (e.g., info, debug, trace). Logs go to stderr.

mod cli;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use sdfcheck_harness::{ConsoleReporter, Harness, HarnessError, SystemRunner};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = args.into_config();
    if !config.has_input() {
        eprintln!("{}", Args::command().render_help());
        return Ok(ExitCode::FAILURE);
    }

    let mut harness = Harness::new(config, SystemRunner);
    let mut reporter = ConsoleReporter::stdout();

    match harness.execute(&mut reporter) {
        Ok(summary) if summary.is_success() => Ok(ExitCode::SUCCESS),
        Ok(_) => Ok(ExitCode::FAILURE),
        Err(e @ (HarnessError::ToolMissing { .. } | HarnessError::Core(_))) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}
