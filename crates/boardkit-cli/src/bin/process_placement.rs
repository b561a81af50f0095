use boardkit_cli::cli::ProcessPlacementCli;
use boardkit_cli::logging::init_tracing;
use boardkit_cli::style::Style;
use boardkit_cli::{render_error, CommandStatus};
use boardkit_core::{remap_file, JLC_HEADER_REPLACEMENTS};
use clap::Parser;
use color_eyre::Result;
use tracing::debug;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = ProcessPlacementCli::parse();
    init_tracing(&cli.log);

    match remap_file(&cli.file, &JLC_HEADER_REPLACEMENTS) {
        Ok(report) => {
            debug!(
                file = %cli.file.display(),
                renamed = ?report.applied,
                written = report.written,
                "processed placement file"
            );
            if !cli.log.quiet {
                let style = Style::for_stdout(cli.log.no_color);
                let message = if report.written {
                    format!(
                        "Updated {} ({} header column(s) renamed)",
                        cli.file.display(),
                        report.applied.len()
                    )
                } else {
                    format!("{} is empty; nothing to do", cli.file.display())
                };
                println!("{}", style.status(CommandStatus::Ok, &message));
            }
            Ok(())
        }
        Err(err) => {
            let status = if err.is_user_error() {
                CommandStatus::UserError
            } else {
                CommandStatus::Failure
            };
            let style = Style::for_stderr(cli.log.no_color);
            eprintln!("{}", style.status(status, &render_error(&err)));
            std::process::exit(status.code());
        }
    }
}
