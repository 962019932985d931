//! Run configuration.

use std::path::PathBuf;

use crate::{defaults, Error, Mode, Result};

/// Settings for one harness run.
///
/// Built once from the command line and never mutated afterwards.
#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// Renderer algorithm.
    pub mode: Mode,
    /// Edge length of the generated distance field.
    pub sdf_size: u32,
    /// Edge length of the comparison raster.
    pub render_size: u32,
    /// Renderer executable (path or name resolved through `PATH`).
    pub renderer: PathBuf,
    /// Fuzzy-diff tool executable.
    pub compare_tool: PathBuf,
    /// Collage tool executable.
    pub montage_tool: PathBuf,
    /// Largest tolerated percentage of differing pixels.
    pub fail_threshold: f64,
    /// Color-distance percentage the comparator treats as equal.
    pub fuzz: f64,
    /// Legacy label, only used in montage filenames.
    pub legacy: String,
    /// Build preview collages after the run.
    pub montage: bool,
    /// Abort the run on the first failing job.
    pub stop_on_fail: bool,
    /// Directory scanned recursively for vector files.
    pub svg_dir: Option<PathBuf>,
    /// Explicit input files, in the order given.
    pub svgs: Vec<PathBuf>,
    /// Extra arguments forwarded verbatim to the renderer.
    pub renderer_args: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            sdf_size: defaults::SDF_SIZE,
            render_size: defaults::RENDER_SIZE,
            renderer: PathBuf::from(defaults::RENDERER),
            compare_tool: PathBuf::from(defaults::COMPARE_TOOL),
            montage_tool: PathBuf::from(defaults::MONTAGE_TOOL),
            fail_threshold: defaults::FAIL_THRESHOLD,
            fuzz: defaults::FUZZ,
            legacy: defaults::LEGACY.to_string(),
            montage: false,
            stop_on_fail: false,
            svg_dir: None,
            svgs: Vec::new(),
            renderer_args: Vec::new(),
        }
    }
}

impl RunnerConfig {
    /// Create a config with default settings and no inputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the renderer mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the field and comparison raster sizes.
    pub fn with_sizes(mut self, sdf_size: u32, render_size: u32) -> Self {
        self.sdf_size = sdf_size;
        self.render_size = render_size;
        self
    }

    /// Set the renderer executable.
    pub fn with_renderer(mut self, renderer: impl Into<PathBuf>) -> Self {
        self.renderer = renderer.into();
        self
    }

    /// Set the comparison and collage tool executables.
    pub fn with_tools(
        mut self,
        compare_tool: impl Into<PathBuf>,
        montage_tool: impl Into<PathBuf>,
    ) -> Self {
        self.compare_tool = compare_tool.into();
        self.montage_tool = montage_tool.into();
        self
    }

    /// Set the failure threshold and comparator fuzz, both percentages.
    pub fn with_tolerances(mut self, fail_threshold: f64, fuzz: f64) -> Self {
        self.fail_threshold = fail_threshold;
        self.fuzz = fuzz;
        self
    }

    /// Set the legacy label.
    pub fn with_legacy(mut self, legacy: impl Into<String>) -> Self {
        self.legacy = legacy.into();
        self
    }

    /// Enable or disable montage generation.
    pub fn with_montage(mut self, montage: bool) -> Self {
        self.montage = montage;
        self
    }

    /// Enable or disable stop-on-first-failure.
    pub fn with_stop_on_fail(mut self, stop_on_fail: bool) -> Self {
        self.stop_on_fail = stop_on_fail;
        self
    }

    /// Scan `dir` recursively for vector files.
    pub fn with_svg_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.svg_dir = Some(dir.into());
        self
    }

    /// Append an explicit input file.
    pub fn with_svg(mut self, path: impl Into<PathBuf>) -> Self {
        self.svgs.push(path.into());
        self
    }

    /// Append explicit input files.
    pub fn with_svgs(mut self, paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        self.svgs.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Forward extra arguments to the renderer.
    pub fn with_renderer_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.renderer_args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Scale factor passed to the renderer.
    ///
    /// Keeps the field's coordinate mapping consistent with the comparison
    /// raster's resolution.
    pub fn render_scale(&self) -> f64 {
        f64::from(self.sdf_size) / f64::from(self.render_size)
    }

    /// Whether at least one input source is configured.
    pub fn has_input(&self) -> bool {
        self.svg_dir.is_some() || !self.svgs.is_empty()
    }

    /// Check the settings before any job runs.
    pub fn validate(&self) -> Result<()> {
        if !self.has_input() {
            return Err(Error::NoInputSource);
        }
        if self.sdf_size == 0 {
            return Err(Error::InvalidSize { name: "sdf_size" });
        }
        if self.render_size == 0 {
            return Err(Error::InvalidSize {
                name: "render_size",
            });
        }
        check_percentage("fail-threshold", self.fail_threshold)?;
        check_percentage("fuzz", self.fuzz)?;
        Ok(())
    }
}

fn check_percentage(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidPercentage { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let config = RunnerConfig::new();
        assert_eq!(config.mode, Mode::Msdf);
        assert_eq!(config.sdf_size, 128);
        assert_eq!(config.render_size, 512);
        assert_eq!(config.renderer, PathBuf::from("msdfgen"));
        assert_relative_eq!(config.fail_threshold, 0.06);
        assert_relative_eq!(config.fuzz, 99.5);
        assert_eq!(config.legacy, "0");
        assert!(!config.montage);
        assert!(!config.stop_on_fail);
    }

    #[test]
    fn requires_an_input_source() {
        assert!(matches!(
            RunnerConfig::new().validate(),
            Err(Error::NoInputSource)
        ));
        assert!(RunnerConfig::new().with_svg("a.svg").validate().is_ok());
        assert!(RunnerConfig::new().with_svg_dir("shapes").validate().is_ok());
    }

    #[test]
    fn rejects_zero_sizes() {
        let config = RunnerConfig::new().with_svg("a.svg").with_sizes(0, 512);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidSize { name: "sdf_size" })
        ));
        let config = RunnerConfig::new().with_svg("a.svg").with_sizes(128, 0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidSize {
                name: "render_size"
            })
        ));
    }

    #[test]
    fn rejects_out_of_range_percentages() {
        let base = RunnerConfig::new().with_svg("a.svg");
        assert!(base.clone().with_tolerances(-0.1, 99.5).validate().is_err());
        assert!(base.clone().with_tolerances(0.06, 100.5).validate().is_err());
        assert!(base.clone().with_tolerances(f64::NAN, 99.5).validate().is_err());
        assert!(base.with_tolerances(0.0, 100.0).validate().is_ok());
    }

    #[test]
    fn scale_follows_render_size() {
        let config = RunnerConfig::new().with_sizes(128, 512);
        assert_relative_eq!(config.render_scale(), 0.25);
        let config = RunnerConfig::new().with_sizes(64, 256);
        assert_relative_eq!(config.render_scale(), 0.25);
        let config = RunnerConfig::new().with_sizes(32, 1024);
        assert_relative_eq!(config.render_scale(), 0.031_25);
    }

    #[test]
    fn explicit_inputs_keep_order() {
        let config = RunnerConfig::new().with_svg("b.svg").with_svgs(["a.svg", "c.svg"]);
        assert_eq!(
            config.svgs,
            vec![
                PathBuf::from("b.svg"),
                PathBuf::from("a.svg"),
                PathBuf::from("c.svg")
            ]
        );
    }
}
