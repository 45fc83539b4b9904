//! Configuration system.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod detection_config;
pub mod outlier_config;
pub mod output_config;

pub use detection_config::DetectionConfig;
pub use outlier_config::{CliOverrides, OutlierConfig};
pub use output_config::OutputConfig;
