//! Error types emitted by the travelord CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the travelord CLI.
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
        /// Long flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it instead.
        env: &'static str,
    },
    /// A coordinate flag did not parse as `lat,lng`.
    #[error("invalid {field} coordinate {value:?}: expected decimal degrees as lat,lng")]
    InvalidCoordinate {
        /// Long flag name of the offending option.
        field: &'static str,
        /// The raw value as supplied.
        value: String,
    },
    /// The input path does not refer to an existing file.
    #[error("{field} path {path} does not exist or is not a file")]
    MissingSourceFile {
        /// Long flag name of the offending option.
        field: &'static str,
        /// The path as resolved from configuration.
        path: Utf8PathBuf,
    },
    /// The input file could not be opened for reading.
    #[error("failed to open input {path}")]
    OpenInput {
        /// Path of the unreadable file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The input file did not contain a JSON array of points.
    #[error("failed to parse points from {path}")]
    ParseInput {
        /// Path of the malformed file.
        path: Utf8PathBuf,
        /// Underlying JSON failure.
        source: serde_json::Error,
    },
    /// The ranked points could not be serialised to JSON.
    #[error("failed to serialise ranked points")]
    SerialiseOutput(#[source] serde_json::Error),
    /// The ranked points could not be written to the output file.
    #[error("failed to write ranked points to {path}")]
    WriteOutputFile {
        /// Path of the output file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The ranked points could not be written to the console.
    #[error("failed to write ranked points")]
    WriteOutput(#[source] std::io::Error),
}
