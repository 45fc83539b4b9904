//! Top-level error for a front-end run.

use super::error_code::{self, OutlierErrorCode};
use super::{ConfigError, DetectionError, LoadError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Detection error: {0}")]
    Detection(#[from] DetectionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Output error: {0}")]
    Output(String),
}

impl OutlierErrorCode for AppError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Load(e) => e.error_code(),
            Self::Detection(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Output(_) => error_code::OUTPUT_ERROR,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Output(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        Self::Output(e.to_string())
    }
}
