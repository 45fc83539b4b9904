//! OutlierErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait OutlierErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const NO_NUMERIC_DATA: &str = "NO_NUMERIC_DATA";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
