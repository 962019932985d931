//! Preview collages over a run's artifacts.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use sdfcheck_core::{Mode, RunnerConfig};
use tracing::{info, warn};

use crate::exec::CommandRunner;
use crate::summary::RunSummary;

/// Which artifact a collage is built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MontageKind {
    /// Diff images, tiled at native resolution.
    Diff,
    /// Distance fields.
    Field,
    /// Test renders.
    Render,
}

impl MontageKind {
    /// Build order.
    pub const ALL: [Self; 3] = [Self::Diff, Self::Field, Self::Render];

    const fn suffix(self) -> &'static str {
        match self {
            Self::Diff => "diff",
            Self::Field => "out",
            Self::Render => "render",
        }
    }

    /// Output filename, relative to the working directory.
    pub fn output_path(self, mode: Mode, legacy: &str) -> PathBuf {
        PathBuf::from(format!("montage-{mode}-{legacy}-{}.png", self.suffix()))
    }

    fn inputs(self, summary: &RunSummary) -> Vec<&Path> {
        match self {
            Self::Diff => summary.diffs().collect(),
            Self::Field => summary.fields().collect(),
            Self::Render => summary.renders().collect(),
        }
    }
}

/// Collage tool arguments.
///
/// Diff tiles keep their size so detail stays visible; the other collages
/// may be resized by the tool.
pub fn montage_args(kind: MontageKind, inputs: &[&Path], output: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(inputs.len() + 3);
    if kind == MontageKind::Diff {
        args.extend(["-geometry".into(), "+1+1".into()]);
    }
    args.extend(inputs.iter().map(|p| p.as_os_str().to_owned()));
    args.push(output.as_os_str().to_owned());
    args
}

/// Build the diff, field and render collages for `summary`.
///
/// Collage problems are logged and never fail the run. Returns the collages
/// that were written.
pub fn build_montages<R: CommandRunner>(
    runner: &mut R,
    config: &RunnerConfig,
    summary: &RunSummary,
) -> Vec<PathBuf> {
    let mut written = Vec::new();
    for kind in MontageKind::ALL {
        let output = kind.output_path(config.mode, &config.legacy);
        let inputs = kind.inputs(summary);
        if inputs.is_empty() {
            warn!("No artifacts for {}, skipping", output.display());
            continue;
        }

        match runner.run(&config.montage_tool, &montage_args(kind, &inputs, &output)) {
            Ok(result) if result.status.success() => {
                info!("Montage written: {}", output.display());
                written.push(output);
            }
            Ok(result) => warn!(
                stderr = result.stderr.trim(),
                "Montage {} failed with status {}",
                output.display(),
                result.status
            ),
            Err(e) => warn!(
                "Cannot run {}: {e}",
                config.montage_tool.display()
            ),
        }
    }
    written
}
