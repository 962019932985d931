//! Sequential regression run over a batch of shapes.
//!
//! Each job renders one shape with the external renderer, then compares the
//! test render against the reference vector file. Jobs run strictly one after
//! another on the calling thread.

use std::io::Write;
use std::path::{Path, PathBuf};

use sdfcheck_core::{RunnerConfig, TestJob};
use tracing::{info, warn};

use crate::compare::compare;
use crate::exec::CommandRunner;
use crate::jobs::InputPaths;
use crate::montage::build_montages;
use crate::outcome::{JobOutcome, JobResult};
use crate::render::render;
use crate::report::ConsoleReporter;
use crate::summary::RunSummary;
use crate::tools::ensure_available;
use crate::Result;

/// Regression test runner.
///
/// Owns the run configuration and the [`CommandRunner`] used for every
/// external tool.
pub struct Harness<R: CommandRunner> {
    config: RunnerConfig,
    runner: R,
}

impl<R: CommandRunner> Harness<R> {
    /// Create a runner for `config`.
    pub const fn new(config: RunnerConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    /// Validate the configuration, check tools, run every job and build
    /// montages if requested.
    ///
    /// Returns `Err` only for conditions that abort the whole run before any
    /// job starts; job failures are counted in the summary.
    pub fn execute<W: Write>(&mut self, reporter: &mut ConsoleReporter<W>) -> Result<RunSummary> {
        self.config.validate()?;
        self.check_tools()?;

        let inputs = InputPaths::new(&self.config);
        let summary = self.run(inputs, reporter)?;

        if self.config.montage {
            build_montages(&mut self.runner, &self.config, &summary);
        }

        info!(
            passed = summary.passed(),
            failed = summary.failed(),
            stopped_early = summary.stopped_early(),
            "Run complete"
        );
        Ok(summary)
    }

    /// Fail unless the comparison tool can be invoked.
    pub fn check_tools(&mut self) -> Result<()> {
        ensure_available(&mut self.runner, &self.config.compare_tool)
    }

    /// Run jobs for `inputs` in order, printing each verdict as it lands.
    ///
    /// With stop-on-fail, the first failure ends the run and no further input
    /// is pulled from `inputs`.
    pub fn run<W: Write>(
        &mut self,
        inputs: impl IntoIterator<Item = PathBuf>,
        reporter: &mut ConsoleReporter<W>,
    ) -> Result<RunSummary> {
        info!(
            mode = %self.config.mode,
            sdf_size = self.config.sdf_size,
            render_size = self.config.render_size,
            "Starting run"
        );

        let mut summary = RunSummary::new();
        for input in inputs {
            let result = self.run_job(&input);
            reporter.report(&result)?;
            summary.record(&result);

            if self.config.stop_on_fail && !result.outcome.is_pass() {
                warn!("Stopping after failure of {}", input.display());
                summary.mark_stopped();
                break;
            }
        }
        Ok(summary)
    }

    /// Render and compare a single input.
    pub fn run_job(&mut self, input: &Path) -> JobResult {
        let job = TestJob::new(input, self.config.mode);

        if let Err(failure) = render(&mut self.runner, &self.config, &job) {
            return JobResult {
                job,
                outcome: JobOutcome::Fail(failure),
                compared: false,
            };
        }

        let comparison = compare(&mut self.runner, &self.config, &job);
        let compared = comparison.completed();
        let outcome = comparison.into_outcome(&job, self.config.fail_threshold);
        JobResult {
            job,
            outcome,
            compared,
        }
    }
}
