//! Error types for the overlay CLI

use arcs_overlay_core::OverlayError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Export could not be parsed or game data could not be encoded
    #[error(transparent)]
    Overlay(#[from] OverlayError),

    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Game data could not be written as JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Output file name could not be derived from the input path
    #[error("Cannot derive an output name from {0:?}")]
    InvalidPath(PathBuf),

    /// `--output` names a single file but several exports were given
    #[error("--output accepts a single input ({0} given); use --output-dir")]
    AmbiguousOutput(usize),

    /// Two inputs would be written to the same output file
    #[error("{first:?} and {second:?} both map to output {output:?}")]
    DuplicateOutput {
        output: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    /// Broadcast output needs the broadcaster's channel id
    #[error("Broadcast format requires --channel-id")]
    MissingChannelId,

    /// Worker pool could not be started
    #[error("Failed to start worker pool: {0}")]
    ThreadPool(String),
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;
