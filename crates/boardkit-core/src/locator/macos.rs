use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::{candidate_exists, InterpreterLocator};
use crate::fs::is_executable;

const FRAMEWORKS_DIR: &str = "Contents/Frameworks";

const BUNDLED_PYTHONS: [&str; 2] = [
    "Contents/Frameworks/Python.framework/Versions/Current/bin/python3",
    "Contents/Frameworks/Python.framework/Versions/Current/Python",
];

const PYTHON_NAMES: [&str; 2] = ["python3", "Python"];

/// Looks inside the first KiCad.app bundle that exists.
pub struct MacOsLocator {
    app_bundles: Vec<PathBuf>,
}

impl MacOsLocator {
    #[must_use]
    pub fn new(app_bundles: Vec<PathBuf>) -> Self {
        Self { app_bundles }
    }

    fn bundle(&self) -> Option<&Path> {
        self.app_bundles
            .iter()
            .map(PathBuf::as_path)
            .find(|bundle| candidate_exists(bundle))
    }
}

impl InterpreterLocator for MacOsLocator {
    fn locate(&self) -> Option<PathBuf> {
        let bundle = self.bundle()?;
        debug!(bundle = %bundle.display(), "searching KiCad bundle");
        BUNDLED_PYTHONS
            .iter()
            .map(|relative| bundle.join(relative))
            .find(|candidate| candidate_exists(candidate))
            .map(|candidate| resolve_link(&candidate))
            .or_else(|| scan_frameworks(&bundle.join(FRAMEWORKS_DIR)))
    }

    fn platform_label(&self) -> &str {
        "macOS"
    }
}

/// Falls back to the unresolved path if the link cannot be followed.
fn resolve_link(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn scan_frameworks(frameworks: &Path) -> Option<PathBuf> {
    WalkDir::new(frameworks)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| !entry.file_type().is_dir())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| PYTHON_NAMES.contains(&name))
        })
        .find(|entry| is_executable(entry.path()))
        .map(|entry| resolve_link(entry.path()))
}
