//! isizulu command-line entry point

use std::process::ExitCode;

use clap::Parser;
use isizulu_cli::commands::Commands;
use isizulu_cli::CliError;

/// Rule-based morpheme segmentation and tagging for isiZulu text
#[derive(Debug, Parser)]
#[command(name = "isizulu", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(CliError::ItemsFailed { .. }) = e.downcast_ref::<CliError>() {
                eprintln!("Warning: {e}");
                return ExitCode::from(2);
            }
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
