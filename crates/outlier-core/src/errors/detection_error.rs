//! Detection errors. Every variant is invalid input; numeric degeneracy
//! (zero spread) is a documented branch of the result, not an error.

use super::error_code::{self, OutlierErrorCode};

/// Errors returned synchronously by `detect`. No partial result accompanies them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DetectionError {
    #[error("Invalid input: sample is empty")]
    EmptySample,

    #[error("Invalid input: value at index {index} is not finite ({value})")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("Invalid input: missing value at index {index}")]
    MissingValue { index: usize },

    #[error("Invalid input: sample has no finite values ({missing} missing)")]
    NoFiniteValues { missing: usize },

    #[error("Invalid input: {name} = {value} {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl OutlierErrorCode for DetectionError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_INPUT
    }
}
