use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::debug;

use crate::fs::is_executable;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("KiCad Python executable not found at {}", path.display())]
    Missing { path: PathBuf },
    #[error("failed to start {}", path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayOutcome {
    code: i32,
}

impl RelayOutcome {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.code
    }

    #[must_use]
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs `interpreter` with `args`, inheriting stdio, and waits for it.
///
/// # Errors
///
/// Returns [`RelayError::Missing`] when the interpreter is absent or not
/// executable, and [`RelayError::Spawn`] for any other launch failure. A
/// child that starts and fails is not an error; its code is in the outcome.
pub fn relay(interpreter: &Path, args: &[OsString]) -> Result<RelayOutcome, RelayError> {
    if !is_executable(interpreter) {
        return Err(RelayError::Missing {
            path: interpreter.to_path_buf(),
        });
    }
    debug!(interpreter = %interpreter.display(), args = args.len(), "relaying");

    let status = Command::new(interpreter)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => RelayError::Missing {
                path: interpreter.to_path_buf(),
            },
            _ => RelayError::Spawn {
                path: interpreter.to_path_buf(),
                source,
            },
        })?;
    let code = exit_code(status);
    debug!(code, "interpreter exited");
    Ok(RelayOutcome { code })
}

// Signal deaths follow the shell convention of 128 + signal.
#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use anyhow::Result;
    use tempfile::tempdir;

    fn sh(script: &str) -> Vec<OsString> {
        vec![OsString::from("-c"), OsString::from(script)]
    }

    #[test]
    fn child_exit_code_is_forwarded() -> Result<()> {
        let outcome = relay(Path::new("/bin/sh"), &sh("exit 3"))?;
        assert_eq!(outcome.exit_code(), 3);
        assert!(!outcome.success());
        Ok(())
    }

    #[test]
    fn clean_exit_is_success() -> Result<()> {
        let outcome = relay(Path::new("/bin/sh"), &sh("true"))?;
        assert_eq!(outcome.exit_code(), 0);
        assert!(outcome.success());
        Ok(())
    }

    #[test]
    fn arguments_pass_through_untouched() -> Result<()> {
        let mut args = sh(r#"[ "$1" = "--flag" ] && [ "$2" = "two words" ] || exit 9"#);
        args.extend(["relay", "--flag", "two words"].map(OsString::from));
        let outcome = relay(Path::new("/bin/sh"), &args)?;
        assert_eq!(outcome.exit_code(), 0);
        Ok(())
    }

    #[test]
    fn signal_death_maps_to_shell_convention() -> Result<()> {
        let outcome = relay(Path::new("/bin/sh"), &sh("kill -TERM $$"))?;
        assert_eq!(outcome.exit_code(), 128 + 15);
        Ok(())
    }

    #[test]
    fn missing_interpreter_is_reported() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("python3");
        let err = relay(&path, &[]).expect_err("missing interpreter");
        assert!(matches!(err, RelayError::Missing { path: ref p } if *p == path));
        assert!(err.to_string().contains("not found at"));
        Ok(())
    }

    #[test]
    fn non_executable_interpreter_is_missing() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("python3");
        fs::write(&path, b"#!/bin/sh\n")?;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644))?;
        let err = relay(&path, &[]).expect_err("not executable");
        assert!(matches!(err, RelayError::Missing { .. }));
        Ok(())
    }
}
