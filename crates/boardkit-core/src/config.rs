use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

pub const KICAD_PYTHON_ENV: &str = "KICAD_PYTHON";
pub const KICAD_PATH_ENV: &str = "KICAD_PATH";

const DEFAULT_KICAD_PATH: &str = "C:/KiCad";

const WINDOWS_INSTALL_ROOTS: [&str; 2] = ["C:/Program Files/KiCad", "C:/Program Files (x86)/KiCad"];

const MACOS_APP_BUNDLES: [&str; 2] = ["/Applications/KiCad/KiCad.app", "/Applications/KiCad.app"];

/// Values are kept as `OsString`; unrelated non-UTF-8 variables are harmless.
#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    vars: HashMap<OsString, OsString>,
}

impl EnvSnapshot {
    #[must_use]
    pub fn capture() -> Self {
        Self {
            vars: env::vars_os().collect(),
        }
    }

    #[must_use]
    pub fn var(&self, key: &str) -> Option<&OsStr> {
        self.vars.get(OsStr::new(key)).map(OsString::as_os_str)
    }

    #[cfg(test)]
    pub(crate) fn testing(pairs: &[(&str, &str)]) -> Self {
        let vars = pairs
            .iter()
            .map(|(k, v)| (OsString::from(k), OsString::from(v)))
            .collect();
        Self { vars }
    }

    /// Empty and all-whitespace values count as unset; anything else is
    /// returned exactly as given.
    fn non_blank(&self, key: &str) -> Option<&OsStr> {
        self.var(key)
            .filter(|value| !value.to_string_lossy().trim().is_empty())
    }
}

/// Where the locator looks for a KiCad-bundled interpreter.
#[derive(Debug, Clone)]
pub struct LocatorConfig {
    pub explicit_python: Option<PathBuf>,
    pub kicad_path: PathBuf,
}

impl LocatorConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_snapshot(&EnvSnapshot::capture())
    }

    #[must_use]
    pub fn from_snapshot(snapshot: &EnvSnapshot) -> Self {
        Self {
            explicit_python: snapshot.non_blank(KICAD_PYTHON_ENV).map(PathBuf::from),
            kicad_path: snapshot
                .non_blank(KICAD_PATH_ENV)
                .map_or_else(|| PathBuf::from(DEFAULT_KICAD_PATH), PathBuf::from),
        }
    }

    /// Windows base directories in search order; `KICAD_PATH` comes last.
    #[must_use]
    pub fn windows_install_roots(&self) -> Vec<PathBuf> {
        WINDOWS_INSTALL_ROOTS
            .iter()
            .map(|root| PathBuf::from(*root))
            .chain(std::iter::once(self.kicad_path.clone()))
            .collect()
    }

    #[must_use]
    pub fn macos_app_bundles(&self) -> Vec<PathBuf> {
        MACOS_APP_BUNDLES
            .iter()
            .map(|bundle| PathBuf::from(*bundle))
            .collect()
    }
}
