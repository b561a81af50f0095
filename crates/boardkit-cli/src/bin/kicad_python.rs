use std::ffi::OsString;
use std::path::Path;

use boardkit_cli::cli::KicadPythonCli;
use boardkit_cli::logging::init_tracing;
use boardkit_cli::style::Style;
use boardkit_cli::{render_error, CommandStatus};
use boardkit_core::{
    locate_interpreter, relay, LocatorConfig, Platform, RelayError, KICAD_PYTHON_ENV,
};
use clap::Parser;
use color_eyre::Result;
use tracing::debug;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = KicadPythonCli::parse();
    init_tracing(&cli.log);
    let style = Style::for_stderr(cli.log.no_color);

    let config = LocatorConfig::from_env();
    let platform = Platform::current();
    let interpreter = match locate_interpreter(&platform, &config) {
        Ok(path) => path,
        Err(err) => exit_with(&style, CommandStatus::UserError, &err.to_string()),
    };
    debug!(interpreter = %interpreter.display(), %platform, "resolved KiCad Python");

    if cli.which {
        println!("{}", interpreter.display());
        return Ok(());
    }

    let code = run(&style, &config, &interpreter, &cli.script_args);
    std::process::exit(code);
}

fn run(
    style: &Style,
    config: &LocatorConfig,
    interpreter: &Path,
    args: &[OsString],
) -> i32 {
    match relay(interpreter, args) {
        Ok(outcome) => {
            let code = outcome.exit_code();
            if !outcome.success() {
                eprintln!(
                    "{}",
                    style.status(
                        CommandStatus::Failure,
                        &format!("KiCad Python exited with status {code}")
                    )
                );
            }
            code
        }
        Err(err) => {
            eprintln!(
                "{}",
                style.status(CommandStatus::UserError, &render_error(&err))
            );
            if matches!(err, RelayError::Missing { .. }) && config.explicit_python.is_some() {
                eprintln!(
                    "{}",
                    style.hint(&format!("{KICAD_PYTHON_ENV} points at a missing interpreter"))
                );
            }
            CommandStatus::UserError.code()
        }
    }
}

fn exit_with(style: &Style, status: CommandStatus, message: &str) -> ! {
    eprintln!("{}", style.status(status, message));
    std::process::exit(status.code());
}
