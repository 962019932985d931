//! Aggregated results of a run.

use std::path::Path;

use sdfcheck_core::ArtifactPaths;

use crate::outcome::JobResult;

/// Pass/fail tallies and the artifacts produced so far.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    passed: usize,
    failed: usize,
    artifacts: Vec<ArtifactPaths>,
    stopped_early: bool,
}

impl RunSummary {
    /// Empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a finished job.
    ///
    /// Artifacts are only kept when the comparator ran, since only then do
    /// all three files exist.
    pub fn record(&mut self, result: &JobResult) {
        if result.outcome.is_pass() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        if result.compared {
            self.artifacts.push(result.job.artifacts.clone());
        }
    }

    /// Mark the run as aborted by stop-on-fail.
    pub fn mark_stopped(&mut self) {
        self.stopped_early = true;
    }

    /// Jobs that passed.
    pub const fn passed(&self) -> usize {
        self.passed
    }

    /// Jobs that failed, for any reason.
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Jobs that ran.
    pub const fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Whether stop-on-fail ended the run.
    pub const fn stopped_early(&self) -> bool {
        self.stopped_early
    }

    /// True when every job passed and the run was not aborted.
    pub const fn is_success(&self) -> bool {
        self.failed == 0 && !self.stopped_early
    }

    /// Artifact triples of compared jobs, in run order.
    pub fn artifacts(&self) -> &[ArtifactPaths] {
        &self.artifacts
    }

    /// Distance-field images.
    pub fn fields(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().map(|a| a.field.as_path())
    }

    /// Test renders.
    pub fn renders(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().map(|a| a.render.as_path())
    }

    /// Diff images.
    pub fn diffs(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().map(|a| a.diff.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{JobFailure, JobOutcome};
    use sdfcheck_core::{DiffMetric, Mode, TestJob};

    fn result(name: &str, outcome: JobOutcome, compared: bool) -> JobResult {
        JobResult {
            job: TestJob::new(name, Mode::Msdf),
            outcome,
            compared,
        }
    }

    #[test]
    fn empty_summary_is_success() {
        let summary = RunSummary::new();
        assert_eq!(summary.total(), 0);
        assert!(summary.is_success());
    }

    #[test]
    fn tallies_every_outcome() {
        let mut summary = RunSummary::new();
        summary.record(&result("a.svg", JobOutcome::Pass(DiffMetric::identical(8)), true));
        summary.record(&result(
            "b.svg",
            JobOutcome::Fail(JobFailure::Quality {
                metric: DiffMetric::new(60, 8),
            }),
            true,
        ));
        summary.record(&result(
            "c.svg",
            JobOutcome::Fail(JobFailure::Render {
                mode: Mode::Msdf,
                status: "1".into(),
            }),
            false,
        ));

        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.failed(), 2);
        assert_eq!(summary.total(), 3);
        assert!(!summary.is_success());
    }

    #[test]
    fn keeps_artifacts_of_compared_jobs_in_order() {
        let mut summary = RunSummary::new();
        summary.record(&result("a.svg", JobOutcome::Pass(DiffMetric::identical(8)), true));
        summary.record(&result(
            "b.svg",
            JobOutcome::Fail(JobFailure::MetricParse { raw: "?".into() }),
            true,
        ));
        summary.record(&result(
            "c.svg",
            JobOutcome::Fail(JobFailure::RenderLaunch {
                exe: "msdfgen".into(),
                reason: "not found".into(),
            }),
            false,
        ));

        let diffs: Vec<_> = summary.diffs().collect();
        assert_eq!(
            diffs,
            vec![Path::new("a.msdf-diff.png"), Path::new("b.msdf-diff.png")]
        );
        let fields: Vec<_> = summary.fields().collect();
        assert_eq!(fields, vec![Path::new("a.msdf.png"), Path::new("b.msdf.png")]);
        assert_eq!(summary.renders().count(), 2);
    }

    #[test]
    fn stopped_run_is_not_success() {
        let mut summary = RunSummary::new();
        summary.mark_stopped();
        assert!(summary.stopped_early());
        assert!(!summary.is_success());
    }
}
