//! Detection configuration.

use serde::{Deserialize, Serialize};

use crate::types::{MadScale, MethodKind, MissingPolicy};

/// Default threshold for Z-Score and Modified Z-Score.
pub const DEFAULT_THRESHOLD: f64 = 3.0;
/// Default Tukey fence multiplier.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Configuration for the detector.
///
/// `threshold` applies to Z-Score and Modified Z-Score only. IQR uses
/// `iqr_multiplier` and ignores `threshold`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DetectionConfig {
    /// Detection rule. Default: z_score.
    pub method: Option<MethodKind>,
    /// |score| above this is an outlier. Default: 3.0.
    pub threshold: Option<f64>,
    /// Tukey fence multiplier k. Default: 1.5.
    pub iqr_multiplier: Option<f64>,
    /// Treatment of missing (NaN) values. Default: skip.
    pub missing: Option<MissingPolicy>,
    /// MAD scaling for Modified Z-Score. Default: raw.
    pub mad_scale: Option<MadScale>,
}

impl DetectionConfig {
    pub fn effective_method(&self) -> MethodKind {
        self.method.unwrap_or_default()
    }

    /// Returns the effective threshold, defaulting to 3.0.
    pub fn effective_threshold(&self) -> f64 {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    /// Returns the effective IQR multiplier, defaulting to 1.5.
    pub fn effective_iqr_multiplier(&self) -> f64 {
        self.iqr_multiplier.unwrap_or(DEFAULT_IQR_MULTIPLIER)
    }

    pub fn effective_missing(&self) -> MissingPolicy {
        self.missing.unwrap_or_default()
    }

    pub fn effective_mad_scale(&self) -> MadScale {
        self.mad_scale.unwrap_or_default()
    }
}
