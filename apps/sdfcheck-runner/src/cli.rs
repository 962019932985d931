//! Command-line options.

use std::path::PathBuf;

use clap::Parser;
use sdfcheck_core::{defaults, Mode, RunnerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "sdfcheck",
    version,
    about = "Render SVG shapes with a distance-field generator and compare the test renders against the reference vectors"
)]
pub struct Args {
    /// Directory to scan recursively for SVG files
    #[arg(long = "svg-dir", value_name = "DIR")]
    pub svg_dir: Option<PathBuf>,

    /// SVG file to test (repeatable)
    #[arg(long, value_name = "FILE")]
    pub svg: Vec<PathBuf>,

    /// Algorithm: sdf, psdf, msdf or mtsdf
    #[arg(long, default_value_t = Mode::default())]
    pub mode: Mode,

    /// Edge length of the generated distance field
    #[arg(long = "sdf_size", default_value_t = defaults::SDF_SIZE)]
    pub sdf_size: u32,

    /// Edge length of the rendered test image
    #[arg(long = "render_size", default_value_t = defaults::RENDER_SIZE)]
    pub render_size: u32,

    /// Path to the distance-field generator executable
    #[arg(long, default_value = defaults::RENDERER)]
    pub exe: PathBuf,

    /// Percentage of differing pixels above which a test fails
    #[arg(long = "fail-threshold", default_value_t = defaults::FAIL_THRESHOLD)]
    pub fail_threshold: f64,

    /// Color distance (percent) the comparator treats as equal
    #[arg(long, default_value_t = defaults::FUZZ)]
    pub fuzz: f64,

    /// Legacy version label used in montage filenames
    #[arg(long, default_value = defaults::LEGACY)]
    pub legacy: String,

    /// Generate montage images of the results
    #[arg(long)]
    pub montage: bool,

    /// Stop testing after the first failure
    #[arg(long = "stop-on-fail")]
    pub stop_on_fail: bool,

    /// Path to ImageMagick's compare
    #[arg(long = "compare-exe", default_value = defaults::COMPARE_TOOL)]
    pub compare_exe: PathBuf,

    /// Path to ImageMagick's montage
    #[arg(long = "montage-exe", default_value = defaults::MONTAGE_TOOL)]
    pub montage_exe: PathBuf,

    /// Extra argument passed to the generator before -testrender (repeatable)
    #[arg(long = "renderer-arg", value_name = "ARG", allow_hyphen_values = true)]
    pub renderer_args: Vec<String>,
}

impl Args {
    pub fn into_config(self) -> RunnerConfig {
        let mut config = RunnerConfig::new()
            .with_mode(self.mode)
            .with_sizes(self.sdf_size, self.render_size)
            .with_renderer(self.exe)
            .with_tools(self.compare_exe, self.montage_exe)
            .with_tolerances(self.fail_threshold, self.fuzz)
            .with_legacy(self.legacy)
            .with_montage(self.montage)
            .with_stop_on_fail(self.stop_on_fail)
            .with_svgs(self.svg)
            .with_renderer_args(self.renderer_args);
        if let Some(dir) = self.svg_dir {
            config = config.with_svg_dir(dir);
        }
        config
    }
}
