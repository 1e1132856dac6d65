//! Error types for configuration validation and parameter loading

use thiserror::Error;

/// Configuration errors, raised before a projection runs.
///
/// The engine itself never fails mid-run; every failure mode is one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid constants: {0}")]
    InvalidConstants(String),

    #[error("invalid scenario '{name}': {reason}")]
    InvalidScenario { name: String, reason: String },

    #[error("invalid horizon: {0} months (must be positive)")]
    InvalidHorizon(i64),
}

impl ConfigError {
    pub(crate) fn scenario(name: &str, reason: impl Into<String>) -> Self {
        ConfigError::InvalidScenario {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Errors while reading run files or scenario catalogs
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON run file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed scenario CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
