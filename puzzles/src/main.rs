//! Standalone text-puzzle solvers behind one CLI.
//!
//! Each subcommand parses one small input file and prints its one or two
//! integer answers. The solvers are independent of each other and of the
//! patrol crate; nothing is shared beyond the workspace.

mod calibration;
mod cli;
mod distance;
mod instructions;
mod ordering;
mod reports;
mod wordsearch;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "puzzles", version, about = "Standalone text-puzzle solvers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pair two integer columns and score their distance and similarity.
    Distance { input: PathBuf },
    /// Count safe level reports, with and without the dampener.
    Reports { input: PathBuf },
    /// Sum multiplication instructions found in corrupted memory.
    Instructions { input: PathBuf },
    /// Count word occurrences and X-shaped crosses in a letter grid.
    Wordsearch {
        input: PathBuf,
        /// Word to search for in all eight directions.
        #[arg(long, default_value = "XMAS")]
        word: String,
    },
    /// Validate page updates against ordering rules and repair the rest.
    Ordering { input: PathBuf },
    /// Sum the calibration equations an operator assignment can satisfy.
    Calibration { input: PathBuf },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Command::Distance { input } => cli::run_distance(&input),
        Command::Reports { input } => cli::run_reports(&input),
        Command::Instructions { input } => cli::run_instructions(&input),
        Command::Wordsearch { input, word } => cli::run_wordsearch(&input, &word),
        Command::Ordering { input } => cli::run_ordering(&input),
        Command::Calibration { input } => cli::run_calibration(&input),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
