//! Fuzzy comparison of a test render against its reference vector file.
//!
//! The comparator is ImageMagick's `compare` with the absolute-error metric.
//! It exits 0 when the images match, 1 when they differ (printing the count of
//! differing pixels on stderr) and anything else when it could not compare.

use std::ffi::OsString;

use sdfcheck_core::{DiffMetric, RunnerConfig, TestJob};

use crate::exec::CommandRunner;
use crate::outcome::{JobFailure, JobOutcome};

/// Result of one comparator invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompareResult {
    /// The comparator measured the difference.
    Success(DiffMetric),
    /// The comparator reported a difference that was not a pixel count.
    ParseFailure(String),
    /// The comparison could not be performed.
    InfrastructureFailure { status: String, detail: String },
}

impl CompareResult {
    /// Turn the comparison into a verdict against `threshold`.
    pub fn into_outcome(self, job: &TestJob, threshold: f64) -> JobOutcome {
        match self {
            Self::Success(metric) if metric.verdict(threshold).is_pass() => {
                JobOutcome::Pass(metric)
            }
            Self::Success(metric) => JobOutcome::Fail(JobFailure::Quality { metric }),
            Self::ParseFailure(raw) => JobOutcome::Fail(JobFailure::MetricParse { raw }),
            Self::InfrastructureFailure { status, detail } => {
                JobOutcome::Fail(JobFailure::CompareInfrastructure {
                    render: job.artifacts.render.clone(),
                    status,
                    detail,
                })
            }
        }
    }

    /// Whether the comparator ran to completion and wrote its diff artifact.
    pub const fn completed(&self) -> bool {
        !matches!(self, Self::InfrastructureFailure { .. })
    }
}

/// Comparator arguments for `job`.
pub fn compare_args(config: &RunnerConfig, job: &TestJob) -> Vec<OsString> {
    vec![
        "-fuzz".into(),
        format!("{}%", config.fuzz).into(),
        "-metric".into(),
        "AE".into(),
        job.input.clone().into(),
        job.artifacts.render.clone().into(),
        job.artifacts.diff.clone().into(),
    ]
}

/// Compare `job`'s test render against its reference vector file.
pub fn compare<R: CommandRunner>(
    runner: &mut R,
    config: &RunnerConfig,
    job: &TestJob,
) -> CompareResult {
    let output = match runner.run(&config.compare_tool, &compare_args(config, job)) {
        Ok(output) => output,
        Err(e) => {
            return CompareResult::InfrastructureFailure {
                status: "not started".to_string(),
                detail: e.to_string(),
            };
        }
    };

    match output.status.code() {
        Some(0) => CompareResult::Success(DiffMetric::identical(config.render_size)),
        Some(1) => match parse_pixel_count(&output.stderr) {
            Some(pixels) => CompareResult::Success(DiffMetric::new(pixels, config.render_size)),
            None => CompareResult::ParseFailure(output.stderr),
        },
        _ => CompareResult::InfrastructureFailure {
            status: output.status.to_string(),
            detail: output.stderr.trim().to_string(),
        },
    }
}

/// Parse the comparator's absolute-error output as a pixel count.
pub fn parse_pixel_count(output: &str) -> Option<u64> {
    output.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::FailureKind;
    use crate::testing::{differing, identical, Call, FakeRunner};
    use crate::CommandOutput;
    use sdfcheck_core::Mode;
    use std::io;

    fn job() -> TestJob {
        TestJob::new("shapes/a.svg", Mode::Msdf)
    }

    fn compare_with(output: CommandOutput) -> CompareResult {
        let mut runner = FakeRunner::new(move |_: &Call| Ok(output.clone()));
        compare(&mut runner, &RunnerConfig::new().with_sizes(32, 100), &job())
    }

    #[test]
    fn arguments() {
        let line = compare_args(&RunnerConfig::new(), &job())
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ");
        insta::assert_snapshot!(
            line,
            @"-fuzz 99.5% -metric AE shapes/a.svg shapes/a.msdf-render.png shapes/a.msdf-diff.png"
        );
    }

    #[test]
    fn exit_zero_is_identical() {
        assert_eq!(
            compare_with(identical()),
            CompareResult::Success(DiffMetric::identical(100))
        );
    }

    #[test]
    fn exit_one_parses_pixel_count() {
        assert_eq!(
            compare_with(differing(42)),
            CompareResult::Success(DiffMetric::new(42, 100))
        );
        assert_eq!(
            compare_with(CommandOutput::new(1, "", "  17\n")),
            CompareResult::Success(DiffMetric::new(17, 100))
        );
    }

    #[test]
    fn exit_one_with_unparseable_output() {
        for raw in ["", "1.5e+03", "-3", "1234 (0.0047)", "compare: unable to open image"] {
            assert_eq!(
                compare_with(CommandOutput::new(1, "", raw)),
                CompareResult::ParseFailure(raw.to_string())
            );
        }
    }

    #[test]
    fn other_exit_codes_are_infrastructure_failures() {
        let result = compare_with(CommandOutput::new(2, "", "compare: no decode delegate\n"));
        assert_eq!(
            result,
            CompareResult::InfrastructureFailure {
                status: "2".to_string(),
                detail: "compare: no decode delegate".to_string(),
            }
        );
        assert!(!result.completed());
    }

    #[test]
    fn launch_failure_is_infrastructure_failure() {
        let mut runner = FakeRunner::new(|_: &Call| {
            Err(io::Error::new(io::ErrorKind::NotFound, "gone"))
        });
        let result = compare(&mut runner, &RunnerConfig::new(), &job());
        assert!(matches!(result, CompareResult::InfrastructureFailure { .. }));
    }

    #[test]
    fn verdicts() {
        let job = job();
        assert!(CompareResult::Success(DiffMetric::new(6, 100))
            .into_outcome(&job, 0.06)
            .is_pass());

        let outcome = CompareResult::Success(DiffMetric::new(7, 100)).into_outcome(&job, 0.06);
        assert_eq!(outcome.failure().map(JobFailure::kind), Some(FailureKind::Quality));

        let outcome = CompareResult::ParseFailure("x".into()).into_outcome(&job, 0.06);
        assert_eq!(outcome.failure().map(JobFailure::kind), Some(FailureKind::MetricParse));

        let outcome = CompareResult::InfrastructureFailure {
            status: "2".into(),
            detail: "boom".into(),
        }
        .into_outcome(&job, 0.06);
        insta::assert_snapshot!(
            outcome.to_string(),
            @"Error comparing to shapes/a.msdf-render.png [2]: boom"
        );
    }

    #[test]
    fn identical_passes_zero_threshold() {
        assert!(CompareResult::Success(DiffMetric::identical(512))
            .into_outcome(&job(), 0.0)
            .is_pass());
    }
}
