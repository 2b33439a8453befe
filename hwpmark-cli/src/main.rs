//! hwpmark command-line entry point

use clap::Parser;
use hwpmark_cli::commands::Commands;
use std::process::ExitCode;

/// Convert HWP word-processor files to Markdown
#[derive(Debug, Parser)]
#[command(name = "hwpmark", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
