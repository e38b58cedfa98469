//! Command-line interface for ranking points along a travel line.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rank;

pub use error::CliError;
use rank::{RankArgs, run_rank};

const ARG_INPUT: &str = "input";
const ARG_START: &str = "start";
const ARG_END: &str = "end";
const ENV_RANK_INPUT: &str = "TRAVELORD_CMDS_RANK_INPUT";
const ENV_RANK_START: &str = "TRAVELORD_CMDS_RANK_START";
const ENV_RANK_END: &str = "TRAVELORD_CMDS_RANK_END";

/// Run the travelord CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when argument parsing, configuration merging,
/// input loading, or output writing fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "travelord",
    about = "Rank points along the bearing line between two coordinates",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter and order a point set along the start-to-end travel line.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
