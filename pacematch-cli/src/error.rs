//! Error types emitted by the PaceMatch CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and large variants would bloat every call site.

use std::sync::Arc;

use camino::Utf8PathBuf;
use pacematch_core::{RunValidationError, SeekerQueryValidationError};
use thiserror::Error;

/// Errors emitted by the PaceMatch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the run dataset file failed.
    #[error("failed to open run dataset at {path:?}: {source}")]
    OpenRuns {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Run dataset JSON could not be decoded.
    #[error("failed to parse run dataset JSON at {path:?}: {source}")]
    ParseRuns {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A run record in the dataset failed validation.
    #[error("run {id} in {path:?} failed validation: {source}")]
    InvalidRun {
        path: Utf8PathBuf,
        id: u64,
        #[source]
        source: RunValidationError,
    },
    /// The seeker query assembled from the command line failed validation.
    #[error("seeker query failed validation: {source}")]
    InvalidQuery {
        #[source]
        source: SeekerQueryValidationError,
    },
    /// Serializing the command output failed.
    #[error("failed to serialize command output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write command output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
