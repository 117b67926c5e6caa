//! Rank command implementation for the PaceMatch CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pacematch_core::{PaceRange, RankedRun, Run, SeekerQuery, rank};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::files::{open_utf8_file, require_existing};
use crate::{
    ARG_RANK_INCLUDE_INACTIVE, ARG_RANK_LATITUDE, ARG_RANK_LONGITUDE, ARG_RANK_PACE_RANGE,
    ARG_RANK_RUNS, CliError, ENV_RANK_LATITUDE, ENV_RANK_LONGITUDE, ENV_RANK_PACE_RANGE,
    ENV_RANK_RUNS,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a run dataset for one seeker. The dataset is a \
                 JSON-encoded array of run records; the seeker position and \
                 pace bucket can come from CLI flags, configuration files, \
                 or environment variables.",
    about = "Rank a run dataset for a seeker"
)]
#[ortho_config(prefix = "PACEMATCH")]
pub(crate) struct RankArgs {
    /// Path to a JSON file containing the run dataset.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) runs_path: Option<Utf8PathBuf>,
    /// Seeker latitude in decimal degrees.
    #[arg(long = ARG_RANK_LATITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Seeker longitude in decimal degrees.
    #[arg(long = ARG_RANK_LONGITUDE, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Pace bucket the seeker wants to join (for example `9_to_10`).
    #[arg(long = ARG_RANK_PACE_RANGE, value_name = "bucket")]
    #[serde(default)]
    pub(crate) pace_range: Option<PaceRange>,
    /// Keep inactive runs in the ranking instead of excluding them.
    #[arg(long = ARG_RANK_INCLUDE_INACTIVE)]
    #[serde(default)]
    pub(crate) include_inactive: bool,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    /// Path to the JSON run dataset.
    pub(crate) runs_path: Utf8PathBuf,
    /// Seeker latitude in decimal degrees.
    pub(crate) latitude: f64,
    /// Seeker longitude in decimal degrees.
    pub(crate) longitude: f64,
    /// Pace bucket the seeker wants to join.
    pub(crate) pace_range: PaceRange,
    /// Whether inactive runs stay in the ranking.
    pub(crate) include_inactive: bool,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.runs_path, ARG_RANK_RUNS)
    }

    fn seeker_query(&self) -> Result<SeekerQuery, CliError> {
        let query = SeekerQuery {
            latitude: self.latitude,
            longitude: self.longitude,
            pace_range: self.pace_range,
        };
        query
            .validate()
            .map_err(|source| CliError::InvalidQuery { source })?;
        Ok(query)
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let runs_path = args.runs_path.ok_or(CliError::MissingArgument {
            field: ARG_RANK_RUNS,
            env: ENV_RANK_RUNS,
        })?;
        let latitude = args.latitude.ok_or(CliError::MissingArgument {
            field: ARG_RANK_LATITUDE,
            env: ENV_RANK_LATITUDE,
        })?;
        let longitude = args.longitude.ok_or(CliError::MissingArgument {
            field: ARG_RANK_LONGITUDE,
            env: ENV_RANK_LONGITUDE,
        })?;
        let pace_range = args.pace_range.ok_or(CliError::MissingArgument {
            field: ARG_RANK_PACE_RANGE,
            env: ENV_RANK_PACE_RANGE,
        })?;

        Ok(Self {
            runs_path,
            latitude,
            longitude,
            pace_range,
            include_inactive: args.include_inactive,
        })
    }
}

pub(super) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(super) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let query = config.seeker_query()?;
    let runs = load_runs(&config.runs_path)?;
    validate_runs(&config.runs_path, &runs)?;
    let eligible = select_eligible(runs, config.include_inactive);
    let ranked = rank(&eligible, &query);
    write_ranking(writer, &ranked)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded run dataset from disk.
pub(crate) fn load_runs(path: &Utf8Path) -> Result<Vec<Run>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenRuns {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseRuns {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks every record in the dataset, naming the first offending run.
pub(crate) fn validate_runs(path: &Utf8Path, runs: &[Run]) -> Result<(), CliError> {
    for run in runs {
        run.validate().map_err(|source| CliError::InvalidRun {
            path: path.to_path_buf(),
            id: run.id,
            source,
        })?;
    }
    Ok(())
}

/// Drops inactive runs unless the invocation asked to keep them.
fn select_eligible(runs: Vec<Run>, include_inactive: bool) -> Vec<Run> {
    let total = runs.len();
    if include_inactive {
        log::info!("loaded {total} runs (inactive runs included)");
        return runs;
    }
    let active: Vec<Run> = runs.into_iter().filter(|run| run.is_active).collect();
    let excluded = total.saturating_sub(active.len());
    log::info!("loaded {total} runs, excluded {excluded} inactive");
    if active.is_empty() && total > 0 {
        log::warn!("all {total} runs are inactive; the ranking will be empty");
    }
    active
}

fn write_ranking(writer: &mut dyn Write, ranked: &[RankedRun<'_>]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(ranked).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
