//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DetectionConfig, OutputConfig};
use crate::errors::ConfigError;
use crate::types::{MadScale, MethodKind, MissingPolicy, OutputFormat};

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "outlier.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`OUTLIER_*`)
/// 3. Project config (`outlier.toml` in project root)
/// 4. User config (`~/.outlier/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutlierConfig {
    pub detection: DetectionConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub method: Option<MethodKind>,
    pub threshold: Option<f64>,
    pub iqr_multiplier: Option<f64>,
    pub missing: Option<MissingPolicy>,
    pub mad_scale: Option<MadScale>,
    pub format: Option<OutputFormat>,
    pub preview_rows: Option<usize>,
}

impl OutlierConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(
            method = %config.detection.effective_method(),
            threshold = config.detection.effective_threshold(),
            iqr_multiplier = config.detection.effective_iqr_multiplier(),
            "configuration resolved"
        );

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &OutlierConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.detection.threshold {
            if threshold.is_nan() || threshold < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "detection.threshold".to_string(),
                    message: "must be >= 0".to_string(),
                });
            }
        }
        if let Some(k) = config.detection.iqr_multiplier {
            if k.is_nan() || k < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "detection.iqr_multiplier".to_string(),
                    message: "must be >= 0".to_string(),
                });
            }
        }
        if config.output.preview_rows == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "output.preview_rows".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.outlier/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut OutlierConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: OutlierConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut OutlierConfig, other: &OutlierConfig) {
        let (b, o) = (&mut base.detection, &other.detection);
        if o.method.is_some() {
            b.method = o.method;
        }
        if o.threshold.is_some() {
            b.threshold = o.threshold;
        }
        if o.iqr_multiplier.is_some() {
            b.iqr_multiplier = o.iqr_multiplier;
        }
        if o.missing.is_some() {
            b.missing = o.missing;
        }
        if o.mad_scale.is_some() {
            b.mad_scale = o.mad_scale;
        }

        if other.output.format.is_some() {
            base.output.format = other.output.format;
        }
        if other.output.preview_rows.is_some() {
            base.output.preview_rows = other.output.preview_rows;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `OUTLIER_DETECTION_THRESHOLD`, `OUTLIER_OUTPUT_FORMAT`, etc.
    /// Unparseable values are ignored with a warning.
    fn apply_env_overrides(config: &mut OutlierConfig) {
        if let Some(v) = env_parsed::<MethodKind>("OUTLIER_DETECTION_METHOD") {
            config.detection.method = Some(v);
        }
        if let Some(v) = env_parsed::<f64>("OUTLIER_DETECTION_THRESHOLD") {
            config.detection.threshold = Some(v);
        }
        if let Some(v) = env_parsed::<f64>("OUTLIER_DETECTION_IQR_MULTIPLIER") {
            config.detection.iqr_multiplier = Some(v);
        }
        if let Some(v) = env_parsed::<MissingPolicy>("OUTLIER_DETECTION_MISSING") {
            config.detection.missing = Some(v);
        }
        if let Some(v) = env_parsed::<MadScale>("OUTLIER_DETECTION_MAD_SCALE") {
            config.detection.mad_scale = Some(v);
        }
        if let Some(v) = env_parsed::<OutputFormat>("OUTLIER_OUTPUT_FORMAT") {
            config.output.format = Some(v);
        }
        if let Some(v) = env_parsed::<usize>("OUTLIER_OUTPUT_PREVIEW_ROWS") {
            config.output.preview_rows = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut OutlierConfig, cli: &CliOverrides) {
        if cli.method.is_some() {
            config.detection.method = cli.method;
        }
        if cli.threshold.is_some() {
            config.detection.threshold = cli.threshold;
        }
        if cli.iqr_multiplier.is_some() {
            config.detection.iqr_multiplier = cli.iqr_multiplier;
        }
        if cli.missing.is_some() {
            config.detection.missing = cli.missing;
        }
        if cli.mad_scale.is_some() {
            config.detection.mad_scale = cli.mad_scale;
        }
        if cli.format.is_some() {
            config.output.format = cli.format;
        }
        if cli.preview_rows.is_some() {
            config.output.preview_rows = cli.preview_rows;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}

/// Returns the user-level config directory: `~/.outlier/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".outlier"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
