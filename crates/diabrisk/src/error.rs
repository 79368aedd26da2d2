//! Error types for the Diabrisk library.

use std::path::PathBuf;
use thiserror::Error;

use crate::indicator::Indicator;

/// Main error type for Diabrisk operations.
#[derive(Debug, Error)]
pub enum DiabriskError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The classifier artifact is missing, corrupt, or in an unsupported format.
    #[error("Failed to load model artifact '{path}': {reason}")]
    ArtifactLoad { path: PathBuf, reason: String },

    /// An indicator value outside what the input form allows.
    #[error("Invalid value {value} for {indicator}: {reason}")]
    InvalidInput {
        indicator: Indicator,
        value: f64,
        reason: String,
    },

    /// A feature vector of the wrong length.
    #[error("Expected {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    /// A classifier produced something other than 0 or 1.
    #[error("Classifier returned label {0}, expected 0 or 1")]
    InvalidLabel(i64),

    /// Malformed report content.
    #[error("Report error: {0}")]
    Report(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DiabriskError {
    /// Shorthand for an [`DiabriskError::ArtifactLoad`] error.
    pub(crate) fn artifact(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        DiabriskError::ArtifactLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for Diabrisk operations.
pub type Result<T> = std::result::Result<T, DiabriskError>;
