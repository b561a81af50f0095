//! Column header rewriting for KiCad placement exports.
//!
//! JLCPCB's assembly service expects `Designator`, `Mid X`, `Mid Y`,
//! `Rotation` and `Layer` where KiCad writes `Ref`, `PosX`, `PosY`, `Rot` and
//! `Side`. Only the header row is touched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// A literal substring swap applied to the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderReplacement<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

impl<'a> HeaderReplacement<'a> {
    #[must_use]
    pub const fn new(from: &'a str, to: &'a str) -> Self {
        Self { from, to }
    }
}

/// KiCad to JLCPCB column names, in application order.
pub const JLC_HEADER_REPLACEMENTS: [HeaderReplacement<'static>; 5] = [
    HeaderReplacement::new("Ref", "Designator"),
    HeaderReplacement::new("PosX", "\"Mid X\""),
    HeaderReplacement::new("PosY", "\"Mid Y\""),
    HeaderReplacement::new("Rot", "Rotation"),
    HeaderReplacement::new("Side", "Layer"),
];

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("The file {} does not exist.", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PlacementError {
    /// Missing input is the caller's mistake; I/O trouble is not.
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapReport {
    /// Source tokens that matched, in application order.
    pub applied: Vec<String>,
    pub written: bool,
}

/// Applies every replacement, in order, to all occurrences in `header`.
#[must_use]
pub fn remap_header(header: &str, replacements: &[HeaderReplacement<'_>]) -> String {
    apply_replacements(header, replacements).0
}

fn apply_replacements(
    header: &str,
    replacements: &[HeaderReplacement<'_>],
) -> (String, Vec<String>) {
    let mut line = header.to_string();
    let mut applied = Vec::new();
    for replacement in replacements {
        if line.contains(replacement.from) {
            line = line.replace(replacement.from, replacement.to);
            applied.push(replacement.from.to_string());
        }
    }
    (line, applied)
}

/// Rewrites the header row of the placement file at `path` in place.
///
/// The file is truncated and rewritten directly; a crash mid-write can leave
/// it partially written. The header ends at the first `\n`, `\r\n` or bare
/// `\r`; everything after it is written back unchanged. An empty file is left
/// alone.
///
/// # Errors
///
/// Returns [`PlacementError::NotFound`] without writing when `path` does not
/// exist, otherwise read or write failures.
pub fn remap_file(
    path: &Path,
    replacements: &[HeaderReplacement<'_>],
) -> Result<RemapReport, PlacementError> {
    if !path.exists() {
        return Err(PlacementError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path).map_err(|source| PlacementError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if contents.is_empty() {
        debug!(path = %path.display(), "placement file is empty");
        return Ok(RemapReport::default());
    }

    let split = contents.find(['\r', '\n']).unwrap_or(contents.len());
    let (header, body) = contents.split_at(split);
    let (remapped, applied) = apply_replacements(header, replacements);
    debug!(before = header, after = %remapped, "remapped header");

    let mut output = String::with_capacity(remapped.len() + body.len());
    output.push_str(&remapped);
    output.push_str(body);
    fs::write(path, output).map_err(|source| PlacementError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(RemapReport {
        applied,
        written: true,
    })
}
