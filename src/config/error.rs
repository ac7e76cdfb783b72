//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Threshold must be between 0 and 100")]
    ThresholdOutOfRange,

    #[error("Intermediate threshold must be below advanced threshold")]
    ThresholdOrderInverted,

    #[error("Minimum history points must be at least 2")]
    MinimumHistoryTooSmall,

    #[error("Contamination must be between 0.01 and 0.5")]
    InvalidContamination,

    #[error("Train fraction must be between 0.1 and 0.95")]
    InvalidTrainFraction,

    #[error("Minimum cluster size must be at least 2")]
    ClusterSizeTooSmall,

    #[error("Accuracy window must be nonzero")]
    EmptyAccuracyWindow,
}
