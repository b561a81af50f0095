use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser};

#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    #[arg(short, long, help = "Only log errors")]
    pub quiet: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase logging (-vv reaches trace)")]
    pub verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v/-q")]
    pub trace: bool,
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "kicad-python",
    author,
    version,
    about = "Run a script with the Python interpreter bundled with KiCad.",
    after_help = "Set KICAD_PYTHON to skip discovery, or KICAD_PATH to add a Windows install root.\n\nExample:\n    kicad-python generate_bom.py board.kicad_pcb --out bom.csv"
)]
pub struct KicadPythonCli {
    #[command(flatten)]
    pub log: LogArgs,
    #[arg(long, help = "Print the resolved interpreter path and exit")]
    pub which: bool,
    #[arg(
        value_name = "SCRIPT",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 1..,
        required_unless_present = "which",
        help = "Script to run followed by any arguments to pass through"
    )]
    pub script_args: Vec<OsString>,
}

#[derive(Parser, Debug)]
#[command(
    name = "process-placement",
    author,
    version,
    about = "Process a KiCad placement file to conform to JLC PCB requirements."
)]
pub struct ProcessPlacementCli {
    #[command(flatten)]
    pub log: LogArgs,
    #[arg(value_name = "FILE", help = "Path to the placement file to process.")]
    pub file: PathBuf,
}
