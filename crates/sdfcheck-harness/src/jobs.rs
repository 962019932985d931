//! Job enumeration.

use std::path::PathBuf;
use std::vec;

use sdfcheck_core::{defaults, RunnerConfig};
use tracing::warn;
use walkdir::WalkDir;

/// Lazy sequence of input paths: the directory scan first, then the explicit
/// files in the order given.
///
/// Directory entries are visited sorted by file name so repeated runs report
/// in the same order.
pub struct InputPaths {
    scan: Option<walkdir::IntoIter>,
    explicit: vec::IntoIter<PathBuf>,
}

impl InputPaths {
    pub fn new(config: &RunnerConfig) -> Self {
        Self {
            scan: config
                .svg_dir
                .as_ref()
                .map(|dir| WalkDir::new(dir).sort_by_file_name().into_iter()),
            explicit: config.svgs.clone().into_iter(),
        }
    }

    fn next_scanned(&mut self) -> Option<PathBuf> {
        let scan = self.scan.as_mut()?;
        for entry in scan.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };
            if entry.file_type().is_dir() {
                continue;
            }
            if has_vector_extension(&entry.file_name().to_string_lossy()) {
                return Some(entry.into_path());
            }
        }
        self.scan = None;
        None
    }
}

impl Iterator for InputPaths {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_scanned().or_else(|| self.explicit.next())
    }
}

/// Case-sensitive check for the `.svg` suffix.
fn has_vector_extension(name: &str) -> bool {
    name.strip_suffix(defaults::VECTOR_EXTENSION)
        .is_some_and(|stem| stem.ends_with('.'))
}
