//! Small policy switches for the detector and the front end.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How `NaN` entries in a sample are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Exclude from every statistic; the mask entry is always `false`.
    #[default]
    Skip,
    /// Any `NaN` is invalid input.
    Reject,
}

/// Scaling applied to the median absolute deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MadScale {
    /// `median(|x - median|)` as is.
    #[default]
    Raw,
    /// Divided by 0.6745 so it estimates the standard deviation under normality.
    Normal,
}

/// Rendering of front-end results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn unknown_value(field: &str, value: &str, expected: &[&str]) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!(
            "unknown value '{}' (expected one of: {})",
            value,
            expected.join(", ")
        ),
    }
}

impl MissingPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Skip => "skip",
            Self::Reject => "reject",
        }
    }
}

impl FromStr for MissingPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "reject" => Ok(Self::Reject),
            other => Err(unknown_value("detection.missing", other, &["skip", "reject"])),
        }
    }
}

impl fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl MadScale {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Normal => "normal",
        }
    }
}

impl FromStr for MadScale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "normal" => Ok(Self::Normal),
            other => Err(unknown_value("detection.mad_scale", other, &["raw", "normal"])),
        }
    }
}

impl fmt::Display for MadScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(unknown_value("output.format", other, &["table", "json"])),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
