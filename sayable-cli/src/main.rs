//! `sayable` command-line entry point

use clap::Parser;
use sayable_cli::commands::Commands;

/// Prepare written text for speech synthesis
#[derive(Debug, Parser)]
#[command(name = "sayable", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    Cli::parse().command.execute()
}
