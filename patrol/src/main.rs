//! Thin CLI over the patrol core.
//!
//! Reads a map file, runs the requested simulation, and prints integer
//! answers on stdout. Exit codes are stable (see [`patrol::exit_codes`])
//! so scripted callers can tell malformed maps apart from I/O failures.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use patrol::core::grid::GridError;
use patrol::core::search::count_loop_inducing_obstructions;
use patrol::core::walker::count_visited;
use patrol::exit_codes;
use patrol::io::input::read_grid;
use patrol::logging;

#[derive(Parser)]
#[command(
    name = "patrol",
    version,
    about = "Guard patrol simulation over a fixed grid map"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count distinct cells the guard visits before leaving the grid.
    Visited { input: PathBuf },
    /// Count open cells where one new obstacle traps the guard in a loop.
    Obstructions { input: PathBuf },
    /// Compute both answers.
    Solve {
        input: PathBuf,
        /// Output a machine-readable JSON report.
        #[arg(long)]
        json: bool,
    },
}

/// Both answers for one map, as emitted by `solve --json`.
#[derive(Debug, Serialize)]
struct SolveReport {
    visited: usize,
    obstructions: usize,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Visited { input } => cmd_visited(&input),
        Command::Obstructions { input } => cmd_obstructions(&input),
        Command::Solve { input, json } => cmd_solve(&input, json),
    }
}

/// Map grid-validation failures to their dedicated exit code.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<GridError>().is_some() {
        exit_codes::MALFORMED
    } else {
        exit_codes::INVALID
    }
}

fn cmd_visited(input: &Path) -> Result<()> {
    let grid = read_grid(input)?;
    let visited = count_visited(&grid)?;
    println!("{visited}");
    Ok(())
}

fn cmd_obstructions(input: &Path) -> Result<()> {
    let mut grid = read_grid(input)?;
    let obstructions = count_loop_inducing_obstructions(&mut grid)?;
    println!("{obstructions}");
    Ok(())
}

fn cmd_solve(input: &Path, json: bool) -> Result<()> {
    let mut grid = read_grid(input)?;
    let (rows, cols) = grid.dimensions();
    debug!(rows, cols, "map loaded");

    let report = SolveReport {
        visited: count_visited(&grid)?,
        obstructions: count_loop_inducing_obstructions(&mut grid)?,
    };
    if json {
        let payload = serde_json::to_string(&report).context("serialize report")?;
        println!("{payload}");
    } else {
        println!("visited: {}", report.visited);
        println!("obstructions: {}", report.obstructions);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use patrol::core::grid::Position;

    #[test]
    fn parse_visited() {
        let cli = Cli::parse_from(["patrol", "visited", "map.txt"]);
        assert!(matches!(cli.command, Command::Visited { .. }));
    }

    #[test]
    fn parse_solve_with_json_flag() {
        let cli = Cli::parse_from(["patrol", "solve", "map.txt", "--json"]);
        assert!(matches!(cli.command, Command::Solve { json: true, .. }));
    }

    #[test]
    fn grid_errors_map_to_the_malformed_exit_code() {
        let err = anyhow::Error::new(GridError::NoGuardFound);
        assert_eq!(exit_code_for(&err), exit_codes::MALFORMED);
        let err = anyhow::Error::new(GridError::GuardEnclosed {
            position: Position { row: 0, col: 0 },
        });
        assert_eq!(exit_code_for(&err), exit_codes::MALFORMED);
    }

    #[test]
    fn other_errors_map_to_the_invalid_exit_code() {
        let err = anyhow::anyhow!("read map.txt");
        assert_eq!(exit_code_for(&err), exit_codes::INVALID);
    }
}
