//! Tabular data loading errors (front end only; the detector never sees files).

use super::error_code::{self, OutlierErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to open {path}: {message}")]
    Io { path: String, message: String },

    #[error("CSV error in {path}: {message}")]
    Csv { path: String, message: String },

    #[error("Column '{0}' not found")]
    ColumnNotFound(String),

    #[error("Column '{0}' is not numeric")]
    NotNumeric(String),

    #[error("No numeric columns found in {path}")]
    NoNumericColumns { path: String },
}

impl OutlierErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoNumericColumns { .. } | Self::NotNumeric(_) => error_code::NO_NUMERIC_DATA,
            _ => error_code::LOAD_ERROR,
        }
    }
}
