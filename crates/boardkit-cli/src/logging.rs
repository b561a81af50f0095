use crate::cli::LogArgs;

/// Installs a stderr subscriber so relayed stdout stays clean.
pub fn init_tracing(args: &LogArgs) {
    let level = filter_level(args);
    let filter = format!(
        "boardkit_core={level},boardkit_cli={level},kicad_python={level},process_placement={level}"
    );
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn filter_level(args: &LogArgs) -> &'static str {
    if args.trace {
        return "trace";
    }
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}
