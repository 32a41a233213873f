//! CLI error types.

use duopoly_core::InvalidQualityError;
use duopoly_optimiser::OptimiserError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `duopoly` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Rejected responsive-firm quality.
    #[error(transparent)]
    InvalidQuality(#[from] InvalidQualityError),

    /// Search or sweep failure.
    #[error(transparent)]
    Optimiser(#[from] OptimiserError),

    /// Configuration could not be loaded or validated.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialisation failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
