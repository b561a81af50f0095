use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use tracing::debug;

const KICAD_KEY: &str = r"HKLM\SOFTWARE\KiCad";
const INSTALL_DIR_VALUE: &str = "InstallDir";

/// Source of KiCad's registered install directory.
pub trait RegistryProbe {
    /// Returns `None` when the key, the value, or the registry itself is unavailable.
    fn install_dir(&self) -> Option<PathBuf>;
}

/// Reads `HKLM\SOFTWARE\KiCad\InstallDir` through the `reg` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegQuery;

impl RegistryProbe for RegQuery {
    fn install_dir(&self) -> Option<PathBuf> {
        match query_install_dir() {
            Ok(dir) => dir,
            Err(err) => {
                debug!(%err, "registry lookup unavailable");
                None
            }
        }
    }
}

fn query_install_dir() -> Result<Option<PathBuf>> {
    let output = Command::new("reg")
        .args(["query", KICAD_KEY, "/v", INSTALL_DIR_VALUE])
        .stdin(Stdio::null())
        .output()
        .context("failed to start reg")?;
    if !output.status.success() {
        bail!(
            "reg query exited with {}",
            output.status.code().unwrap_or(-1)
        );
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_reg_value(&stdout, INSTALL_DIR_VALUE).map(PathBuf::from))
}

/// Extracts a string value from `reg query` output.
///
/// Value lines look like `    InstallDir    REG_SZ    C:\Program Files\KiCad\8.0`;
/// the data may itself contain spaces.
fn parse_reg_value(output: &str, name: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let rest = line.trim_start().strip_prefix(name)?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let rest = rest.trim_start();
        let kind_end = rest.find(char::is_whitespace)?;
        let (kind, data) = rest.split_at(kind_end);
        if !matches!(kind, "REG_SZ" | "REG_EXPAND_SZ") {
            return None;
        }
        let data = data.trim();
        (!data.is_empty()).then(|| data.to_string())
    })
}
