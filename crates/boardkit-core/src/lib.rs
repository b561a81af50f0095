#![deny(clippy::all)]

mod config;
mod fs;
mod locator;
mod placement;
mod relay;

pub use crate::config::{EnvSnapshot, LocatorConfig, KICAD_PATH_ENV, KICAD_PYTHON_ENV};
pub use crate::locator::{
    locate_interpreter, locate_with, InterpreterLocator, LocateError, MacOsLocator, Platform,
    RegQuery, RegistryProbe, WindowsLocator,
};
pub use crate::placement::{
    remap_file, remap_header, HeaderReplacement, PlacementError, RemapReport,
    JLC_HEADER_REPLACEMENTS,
};
pub use crate::relay::{relay, RelayError, RelayOutcome};
