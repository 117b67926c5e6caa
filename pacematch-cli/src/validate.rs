//! Validate command implementation for the PaceMatch CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::files::require_existing;
use crate::rank::{load_runs, validate_runs};
use crate::{ARG_VALIDATE_RUNS, CliError, ENV_VALIDATE_RUNS};

/// CLI arguments for the `validate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Validate every record in a JSON run dataset and print a \
                 summary of its contents. The dataset path can come from a \
                 CLI argument, configuration files, or environment \
                 variables.",
    about = "Validate a run dataset"
)]
#[ortho_config(prefix = "PACEMATCH")]
pub(crate) struct ValidateArgs {
    /// Path to a JSON file containing the run dataset.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) runs_path: Option<Utf8PathBuf>,
}

impl ValidateArgs {
    pub(crate) fn into_config(self) -> Result<ValidateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ValidateConfig::try_from(merged)
    }
}

/// Resolved `validate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidateConfig {
    /// Path to the JSON run dataset.
    pub(crate) runs_path: Utf8PathBuf,
}

impl ValidateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.runs_path, ARG_VALIDATE_RUNS)
    }
}

impl TryFrom<ValidateArgs> for ValidateConfig {
    type Error = CliError;

    fn try_from(args: ValidateArgs) -> Result<Self, Self::Error> {
        let runs_path = args.runs_path.ok_or(CliError::MissingArgument {
            field: ARG_VALIDATE_RUNS,
            env: ENV_VALIDATE_RUNS,
        })?;
        Ok(Self { runs_path })
    }
}

/// Counts reported after a dataset passes validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ValidationSummary {
    /// Number of records in the dataset.
    pub(crate) total: usize,
    /// Records currently accepting new members.
    pub(crate) active: usize,
    /// Records marked inactive.
    pub(crate) inactive: usize,
}

pub(super) fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_validate_with(args, &mut stdout)
}

pub(super) fn run_validate_with(args: ValidateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let runs = load_runs(&config.runs_path)?;
    validate_runs(&config.runs_path, &runs)?;

    let active = runs.iter().filter(|run| run.is_active).count();
    let summary = ValidationSummary {
        total: runs.len(),
        active,
        inactive: runs.len().saturating_sub(active),
    };
    log::info!(
        "validated {} runs at {:?} ({} active)",
        summary.total,
        config.runs_path,
        summary.active
    );
    write_summary(writer, &summary)
}

fn write_summary(writer: &mut dyn Write, summary: &ValidationSummary) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(summary).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
