//! Test jobs and the artifact paths derived from them.
//!
//! Every artifact path is a pure function of the input path and the mode, so
//! re-running the same job always overwrites the same files.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::Mode;

/// Files written while testing one input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Distance field written by the renderer: `<root>.<mode>.png`.
    pub field: PathBuf,
    /// Test render of the field: `<root>.<mode>-render.png`.
    pub render: PathBuf,
    /// Visual diff written by the comparator: `<root>.<mode>-diff.png`.
    pub diff: PathBuf,
}

impl ArtifactPaths {
    /// Derive the artifact paths for `input` rendered with `mode`.
    ///
    /// `<root>` is `input` with its final extension stripped.
    pub fn derive(input: &Path, mode: Mode) -> Self {
        let root = input.with_extension("");
        Self {
            field: with_suffix(&root, &format!(".{mode}.png")),
            render: with_suffix(&root, &format!(".{mode}-render.png")),
            diff: with_suffix(&root, &format!(".{mode}-diff.png")),
        }
    }
}

fn with_suffix(root: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(root.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}

/// One input vector file selected for testing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestJob {
    /// Reference vector file.
    pub input: PathBuf,
    /// Derived output paths.
    pub artifacts: ArtifactPaths,
}

impl TestJob {
    /// Create a job for `input` rendered with `mode`.
    pub fn new(input: impl Into<PathBuf>, mode: Mode) -> Self {
        let input = input.into();
        let artifacts = ArtifactPaths::derive(&input, mode);
        Self { input, artifacts }
    }
}
