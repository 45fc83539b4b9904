//! Error handling for the outlier engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod app_error;
pub mod config_error;
pub mod detection_error;
pub mod error_code;
pub mod load_error;

pub use app_error::AppError;
pub use config_error::ConfigError;
pub use detection_error::DetectionError;
pub use error_code::OutlierErrorCode;
pub use load_error::LoadError;
