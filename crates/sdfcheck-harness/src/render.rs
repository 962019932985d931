//! Renderer invocation.

use std::ffi::OsString;

use sdfcheck_core::{RunnerConfig, TestJob};
use tracing::debug;

use crate::exec::CommandRunner;
use crate::outcome::JobFailure;

/// Arguments for rendering `job`'s distance field and test render.
///
/// The field is `sdf_size²`, scaled by `sdf_size / render_size`, and the test
/// render is `render_size²`. Extra renderer arguments go before the test
/// render request.
pub fn renderer_args(config: &RunnerConfig, job: &TestJob) -> Vec<OsString> {
    let sdf_size = config.sdf_size.to_string();
    let render_size = config.render_size.to_string();

    let mut args: Vec<OsString> = vec![
        config.mode.as_str().into(),
        "-svg".into(),
        job.input.clone().into(),
        "-o".into(),
        job.artifacts.field.clone().into(),
        "-scale".into(),
        config.render_scale().to_string().into(),
        "-size".into(),
        sdf_size.clone().into(),
        sdf_size.into(),
    ];
    args.extend(config.renderer_args.iter().map(OsString::from));
    args.extend([
        "-testrender".into(),
        job.artifacts.render.clone().into(),
        render_size.clone().into(),
        render_size.into(),
    ]);
    args
}

/// Run the renderer for `job` and check that it produced a usable test render.
pub fn render<R: CommandRunner>(
    runner: &mut R,
    config: &RunnerConfig,
    job: &TestJob,
) -> Result<(), JobFailure> {
    let output = runner
        .run(&config.renderer, &renderer_args(config, job))
        .map_err(|e| JobFailure::RenderLaunch {
            exe: config.renderer.clone(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        debug!(
            stderr = output.stderr.trim(),
            "Renderer failed on {}",
            job.input.display()
        );
        return Err(JobFailure::Render {
            mode: config.mode,
            status: output.status.to_string(),
        });
    }

    check_test_render(job, config.render_size)
}

fn check_test_render(job: &TestJob, render_size: u32) -> Result<(), JobFailure> {
    let path = &job.artifacts.render;
    let (width, height) =
        image::image_dimensions(path).map_err(|e| JobFailure::MissingRender {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    if (width, height) != (render_size, render_size) {
        return Err(JobFailure::RenderSize {
            path: path.clone(),
            width,
            height,
            expected: render_size,
        });
    }
    Ok(())
}
