//! Discovery of the Python interpreter bundled with a KiCad installation.
//!
//! Each supported host has its own [`InterpreterLocator`]; [`Platform`] picks
//! one at startup. Probes only read the filesystem, so repeated calls against
//! the same layout return the same path.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::config::LocatorConfig;

mod macos;
mod registry;
mod version;
mod windows;

pub use macos::MacOsLocator;
pub use registry::{RegQuery, RegistryProbe};
pub use windows::WindowsLocator;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("KiCad Python not found on {platform}")]
    NotFound { platform: String },
    #[error("Unsupported operating system: {os}")]
    Unsupported { os: String },
}

pub trait InterpreterLocator {
    /// Returns the first interpreter found, or `None` when every candidate is absent.
    fn locate(&self) -> Option<PathBuf>;

    /// Human name of the host this strategy searches, used in diagnostics.
    fn platform_label(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Other(String),
}

impl Platform {
    #[must_use]
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    #[must_use]
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            other => Self::Other(other.to_string()),
        }
    }

    /// Builds the search strategy for this host, or `None` when KiCad's
    /// interpreter layout is not known for it.
    #[must_use]
    pub fn locator(&self, config: &LocatorConfig) -> Option<Box<dyn InterpreterLocator>> {
        match self {
            Self::Windows => Some(Box::new(WindowsLocator::new(
                config.windows_install_roots(),
                Box::new(RegQuery),
            ))),
            Self::MacOs => Some(Box::new(MacOsLocator::new(config.macos_app_bundles()))),
            Self::Other(_) => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Windows => f.write_str("Windows"),
            Self::MacOs => f.write_str("macOS"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Resolves the interpreter to relay through.
///
/// An explicit `KICAD_PYTHON` wins over any search; it is validated later,
/// when the relay launches it.
///
/// # Errors
///
/// Returns [`LocateError::Unsupported`] for hosts without a strategy and
/// [`LocateError::NotFound`] when the strategy finds nothing.
pub fn locate_interpreter(
    platform: &Platform,
    config: &LocatorConfig,
) -> Result<PathBuf, LocateError> {
    if let Some(explicit) = &config.explicit_python {
        debug!(path = %explicit.display(), "using explicit interpreter");
        return Ok(explicit.clone());
    }
    let Some(locator) = platform.locator(config) else {
        return Err(LocateError::Unsupported {
            os: platform.to_string(),
        });
    };
    locate_with(locator.as_ref())
}

/// Runs a single strategy, turning an empty search into [`LocateError::NotFound`].
///
/// # Errors
///
/// Returns [`LocateError::NotFound`] when `locator` finds nothing.
pub fn locate_with(locator: &dyn InterpreterLocator) -> Result<PathBuf, LocateError> {
    locator.locate().ok_or_else(|| LocateError::NotFound {
        platform: locator.platform_label().to_string(),
    })
}

/// Unreadable candidates count as absent.
fn candidate_exists(path: &Path) -> bool {
    let found = fs::metadata(path).is_ok();
    debug!(candidate = %path.display(), found, "probed interpreter candidate");
    found
}
