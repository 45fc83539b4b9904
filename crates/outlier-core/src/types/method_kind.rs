//! Method selector as it appears in config files and on the command line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Which detection rule to run. Parameters are attached later, when the
/// kind is turned into an `outlier_analysis::Method`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[default]
    ZScore,
    Iqr,
    ModifiedZScore,
}

impl MethodKind {
    pub const ALL: [MethodKind; 3] = [Self::ZScore, Self::Iqr, Self::ModifiedZScore];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ZScore => "z_score",
            Self::Iqr => "iqr",
            Self::ModifiedZScore => "modified_z_score",
        }
    }

    /// Display label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ZScore => "Z-Score",
            Self::Iqr => "IQR",
            Self::ModifiedZScore => "Modified Z-Score",
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MethodKind {
    type Err = ConfigError;

    /// Accepts snake_case, kebab-case, and the display labels, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match normalized.as_str() {
            "zscore" | "z" => Ok(Self::ZScore),
            "iqr" | "tukey" => Ok(Self::Iqr),
            "modifiedzscore" | "mad" => Ok(Self::ModifiedZScore),
            _ => Err(ConfigError::InvalidValue {
                field: "detection.method".to_string(),
                message: format!(
                    "unknown method '{s}' (expected one of: z_score, iqr, modified_z_score)"
                ),
            }),
        }
    }
}
