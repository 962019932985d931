//! Test harness for distance-field renderers.
//!
//! Runs an external renderer over a batch of vector shapes, compares each
//! test render against the reference vector file with an external fuzzy-diff
//! tool, and aggregates the verdicts.

pub mod compare;
pub mod exec;
pub mod harness;
pub mod jobs;
pub mod montage;
pub mod outcome;
pub mod render;
pub mod report;
pub mod summary;
pub mod tools;

#[cfg(test)]
pub(crate) mod testing;

pub use compare::CompareResult;
pub use exec::{CommandOutput, CommandRunner, ExitStatus, SystemRunner};
pub use harness::Harness;
pub use jobs::InputPaths;
pub use montage::MontageKind;
pub use outcome::{FailureKind, JobFailure, JobOutcome, JobResult};
pub use report::ConsoleReporter;
pub use summary::RunSummary;

use std::path::PathBuf;

use thiserror::Error;

/// Errors that end a whole run.
///
/// Per-job problems are [`JobFailure`]s and never surface here.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// Comparison tool not invocable
    #[error(
        "cannot run {tool} ({reason}). ImageMagick <http://www.imagemagick.org> must be on your PATH to run tests"
    )]
    ToolMissing { tool: PathBuf, reason: String },
    /// Invalid configuration
    #[error(transparent)]
    Core(#[from] sdfcheck_core::Error),
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`HarnessError`].
pub type Result<T> = std::result::Result<T, HarnessError>;
