//! Command-line interface for the PaceMatch ranking engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod files;
mod rank;
mod validate;

pub use error::CliError;

use rank::RankArgs;
use validate::ValidateArgs;

const ARG_RANK_RUNS: &str = "runs";
const ARG_RANK_LATITUDE: &str = "latitude";
const ARG_RANK_LONGITUDE: &str = "longitude";
const ARG_RANK_PACE_RANGE: &str = "pace-range";
const ARG_RANK_INCLUDE_INACTIVE: &str = "include-inactive";
const ARG_VALIDATE_RUNS: &str = "runs";
const ENV_RANK_RUNS: &str = "PACEMATCH_CMDS_RANK_RUNS_PATH";
const ENV_RANK_LATITUDE: &str = "PACEMATCH_CMDS_RANK_LATITUDE";
const ENV_RANK_LONGITUDE: &str = "PACEMATCH_CMDS_RANK_LONGITUDE";
const ENV_RANK_PACE_RANGE: &str = "PACEMATCH_CMDS_RANK_PACE_RANGE";
const ENV_VALIDATE_RUNS: &str = "PACEMATCH_CMDS_VALIDATE_RUNS_PATH";

/// Run the PaceMatch CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing, configuration merging, or
/// the selected command fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
        Command::Validate(args) => validate::run_validate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pacematch",
    about = "Rank and validate running-group datasets for the PaceMatch engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a run dataset for a seeker location and pace bucket.
    Rank(RankArgs),
    /// Validate a run dataset and summarise its contents.
    Validate(ValidateArgs),
}

#[cfg(test)]
mod tests;
