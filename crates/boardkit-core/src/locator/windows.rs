use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::registry::RegistryProbe;
use super::version::sort_newest_first;
use super::{candidate_exists, InterpreterLocator};

const PYTHON_EXE: &str = "python.exe";

// Layouts seen across KiCad releases, most common first.
const PYTHON_SUBDIRS: [&str; 2] = ["bin", "python"];

/// Searches KiCad install roots, newest version directory first, then asks
/// the registry for `InstallDir`.
pub struct WindowsLocator {
    install_roots: Vec<PathBuf>,
    registry: Box<dyn RegistryProbe>,
}

impl WindowsLocator {
    #[must_use]
    pub fn new(install_roots: Vec<PathBuf>, registry: Box<dyn RegistryProbe>) -> Self {
        Self {
            install_roots,
            registry,
        }
    }

    fn search_root(root: &Path) -> Option<PathBuf> {
        if !candidate_exists(root) {
            return None;
        }
        let versions = match version_dirs(root) {
            Ok(versions) => versions,
            Err(err) => {
                debug!(root = %root.display(), %err, "skipping unreadable install root");
                return None;
            }
        };
        versions
            .iter()
            .map(|name| root.join(name))
            .chain(std::iter::once(root.to_path_buf()))
            .find_map(|dir| python_in(&dir))
    }

    fn search_registry(&self) -> Option<PathBuf> {
        let install_dir = self.registry.install_dir()?;
        debug!(install_dir = %install_dir.display(), "registry reports KiCad install");
        let candidate = install_dir.join("bin").join(PYTHON_EXE);
        candidate_exists(&candidate).then_some(candidate)
    }
}

impl InterpreterLocator for WindowsLocator {
    fn locate(&self) -> Option<PathBuf> {
        self.install_roots
            .iter()
            .find_map(|root| Self::search_root(root))
            .or_else(|| self.search_registry())
    }

    fn platform_label(&self) -> &str {
        "Windows"
    }
}

/// Child directories whose name starts with a digit, newest first.
fn version_dirs(root: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }
        if entry.path().is_dir() {
            names.push(name);
        }
    }
    sort_newest_first(&mut names);
    Ok(names)
}

fn python_in(dir: &Path) -> Option<PathBuf> {
    PYTHON_SUBDIRS
        .iter()
        .map(|sub| dir.join(sub).join(PYTHON_EXE))
        .find(|candidate| candidate_exists(candidate))
}
