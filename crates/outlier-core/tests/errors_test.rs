//! Tests for error codes and conversions.

use outlier_core::errors::{AppError, ConfigError, DetectionError, LoadError, OutlierErrorCode};

#[test]
fn test_detection_errors_are_invalid_input() {
    let errors = [
        DetectionError::EmptySample,
        DetectionError::NonFiniteValue { index: 2, value: f64::INFINITY },
        DetectionError::MissingValue { index: 0 },
        DetectionError::NoFiniteValues { missing: 4 },
        DetectionError::InvalidParameter { name: "k", value: -1.5, reason: "must be >= 0" },
    ];
    for err in &errors {
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.coded_string().starts_with("[INVALID_INPUT] Invalid input:"));
    }
}

#[test]
fn test_non_finite_display() {
    let err = DetectionError::NonFiniteValue { index: 3, value: f64::NEG_INFINITY };
    assert_eq!(err.to_string(), "Invalid input: value at index 3 is not finite (-inf)");
}

#[test]
fn test_app_error_from_conversions_keep_codes() {
    let app: AppError = DetectionError::EmptySample.into();
    assert_eq!(app.error_code(), "INVALID_INPUT");

    let app: AppError = LoadError::NoNumericColumns { path: "data.csv".into() }.into();
    assert_eq!(app.error_code(), "NO_NUMERIC_DATA");

    let app: AppError = LoadError::ColumnNotFound("price".into()).into();
    assert_eq!(app.error_code(), "LOAD_ERROR");

    let app: AppError = ConfigError::FileNotFound { path: "x".into() }.into();
    assert_eq!(app.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_app_error_display_wraps_source() {
    let app: AppError = LoadError::ColumnNotFound("price".into()).into();
    assert_eq!(app.to_string(), "Load error: Column 'price' not found");
}

#[test]
fn test_io_error_becomes_output_error() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let app: AppError = io.into();
    assert_eq!(app.error_code(), "OUTPUT_ERROR");
}
