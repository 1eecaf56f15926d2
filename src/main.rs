//! Mktables CLI - regenerates the engine's static board and tile tables.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Mktables - deterministic board-layout and tile-table compiler
#[derive(Parser, Debug)]
#[command(name = "mktables")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Regenerate the tables header
    Generate {
        /// Write to a file instead of stdout (regenerate in place)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },

    /// Validate the table derivations and print a summary
    Check {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Print an ASCII rendering of the premium-square grid
    Show {
        /// Which premium kind to show
        #[arg(short, long, default_value = "all")]
        kind: cli::GridKind,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Generate { output } => cli::generate::execute(output),
        Commands::Check { format } => cli::check::execute(format),
        Commands::Show { kind } => cli::show::execute(kind),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
