use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments and command structure
#[derive(Parser)]
#[clap(version, about = "Local prompt manager")]
pub struct Cli {
    /// Path to the data directory holding the storage file
    #[clap(long, value_parser)]
    pub data_dir: Option<PathBuf>,

    /// Clipboard copy command to use instead of auto-detection
    #[clap(long)]
    pub clipboard_command: Option<String>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the promptstore application
    #[clap(subcommand)]
    pub command: Commands,
}
