//! Core types for the sdfcheck regression harness.
//!
//! This crate provides the pieces that do not touch external processes:
//! - Renderer modes
//! - Test jobs and their derived artifact paths
//! - Difference metrics and pass/fail verdicts
//! - Run configuration and its validation

pub mod config;
pub mod error;
pub mod job;
pub mod metric;
pub mod mode;

pub use config::RunnerConfig;
pub use error::{Error, Result};
pub use job::{ArtifactPaths, TestJob};
pub use metric::{DiffMetric, Verdict};
pub use mode::Mode;

/// Default run settings.
pub mod defaults {
    /// Edge length of the generated distance field, in pixels.
    pub const SDF_SIZE: u32 = 128;
    /// Edge length of the comparison raster, in pixels.
    pub const RENDER_SIZE: u32 = 512;
    /// Largest tolerated percentage of differing pixels.
    ///
    /// Tolerates anti-aliasing disagreement between the reference rasterizer
    /// and the test render while still catching misplaced curves and
    /// inverted fill rules.
    pub const FAIL_THRESHOLD: f64 = 0.06;
    /// Color-distance percentage the comparator treats as equal.
    pub const FUZZ: f64 = 99.5;
    /// Renderer executable name.
    pub const RENDERER: &str = "msdfgen";
    /// Fuzzy-diff tool name.
    pub const COMPARE_TOOL: &str = "compare";
    /// Collage tool name.
    pub const MONTAGE_TOOL: &str = "montage";
    /// Label used in montage filenames when no legacy version is given.
    pub const LEGACY: &str = "0";
    /// Extension (without dot) of the vector inputs picked up by a directory scan.
    pub const VECTOR_EXTENSION: &str = "svg";
}
