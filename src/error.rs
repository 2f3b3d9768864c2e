//! Input errors raised before a check can evaluate anything.
//!
//! A `GateError` always means "could not evaluate". Rule failures are never
//! errors; they come back as values from the checkers.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("Failed to parse coverage XML: {detail}")]
    ReportParse { path: PathBuf, detail: String },

    #[error("Failed to parse thresholds JSON: {detail}")]
    ThresholdParse { path: PathBuf, detail: String },

    #[error("invalid threshold for `{unit}`: expected an integer percentage 0-100, got {value}")]
    InvalidThreshold { unit: String, value: String },

    #[error("invalid configuration in {}: {detail}", .path.display())]
    Config { path: PathBuf, detail: String },

    #[error("invalid {name} environment variable: {detail}")]
    Env { name: String, detail: String },

    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GateError {
    pub(crate) fn config(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        GateError::Config {
            path: path.into(),
            detail: detail.into(),
        }
    }
}
