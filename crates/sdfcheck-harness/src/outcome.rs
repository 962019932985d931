//! Per-job outcomes and the failure taxonomy.

use std::fmt;
use std::path::PathBuf;

use sdfcheck_core::{DiffMetric, Mode, TestJob};
use thiserror::Error;

/// Why a single job failed.
///
/// The `Display` text is the message printed after `FAIL "<path>"`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JobFailure {
    /// Renderer could not be started
    #[error("Error running {}: {reason}", .exe.display())]
    RenderLaunch { exe: PathBuf, reason: String },
    /// Renderer exited non-zero
    #[error("Unable to render {mode} [{status}]")]
    Render { mode: Mode, status: String },
    /// Test render missing or unreadable
    #[error("Unable to read test render {}: {reason}", .path.display())]
    MissingRender { path: PathBuf, reason: String },
    /// Test render has the wrong dimensions
    #[error("Test render {} is {width}x{height}, expected {expected}x{expected}", .path.display())]
    RenderSize {
        path: PathBuf,
        width: u32,
        height: u32,
        expected: u32,
    },
    /// Comparator could not compare the images
    #[error("Error comparing to {} [{status}]: {detail}", .render.display())]
    CompareInfrastructure {
        render: PathBuf,
        status: String,
        detail: String,
    },
    /// Comparator output was not a pixel count
    #[error("(Unknown) Error metric = {}", .raw.trim())]
    MetricParse { raw: String },
    /// Too many differing pixels
    #[error("Error = {}% ({} pixels)", .metric.percentage(), .metric.pixels)]
    Quality { metric: DiffMetric },
}

/// Coarse failure category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Renderer failed to start, exited non-zero, or wrote no usable test render
    Render,
    /// Comparator could not perform the comparison
    CompareInfrastructure,
    /// Comparator output was not a pixel count
    MetricParse,
    /// Difference above the failure threshold
    Quality,
}

impl JobFailure {
    /// Coarse category of this failure.
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::RenderLaunch { .. }
            | Self::Render { .. }
            | Self::MissingRender { .. }
            | Self::RenderSize { .. } => FailureKind::Render,
            Self::CompareInfrastructure { .. } => FailureKind::CompareInfrastructure,
            Self::MetricParse { .. } => FailureKind::MetricParse,
            Self::Quality { .. } => FailureKind::Quality,
        }
    }
}

/// Verdict for one job.
#[derive(Debug, Clone, PartialEq)]
pub enum JobOutcome {
    /// Within tolerance
    Pass(DiffMetric),
    /// Job failed
    Fail(JobFailure),
}

impl JobOutcome {
    /// Returns true for [`JobOutcome::Pass`].
    #[inline]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass(_))
    }

    /// The failure, if the job failed.
    pub const fn failure(&self) -> Option<&JobFailure> {
        match self {
            Self::Pass(_) => None,
            Self::Fail(failure) => Some(failure),
        }
    }
}

impl fmt::Display for JobOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass(metric) if metric.pixels == 0 => f.write_str("Identical"),
            Self::Pass(metric) => write!(
                f,
                "(Acceptable) Error = {}% ({} pixels)",
                metric.percentage(),
                metric.pixels
            ),
            Self::Fail(failure) => write!(f, "{failure}"),
        }
    }
}

/// A finished job.
#[derive(Debug, Clone)]
pub struct JobResult {
    /// The job that ran
    pub job: TestJob,
    /// Its verdict
    pub outcome: JobOutcome,
    /// Whether the comparator ran and wrote its diff artifact.
    pub compared: bool,
}
