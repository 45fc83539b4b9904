//! Core types for outlier detection.

use std::fmt;

use outlier_core::config::DetectionConfig;
use outlier_core::errors::DetectionError;
use outlier_core::types::MethodKind;
use serde::{Deserialize, Serialize};

/// A detection rule together with its parameters.
///
/// Closed set: callers pick a variant, they never inject their own scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Method {
    /// Flag |x - mean| / std > threshold.
    ZScore { threshold: f64 },
    /// Flag values outside [Q1 - k*IQR, Q3 + k*IQR].
    Iqr { k: f64 },
    /// Flag |0.6745 * (x - median) / MAD| > threshold.
    ModifiedZScore { threshold: f64 },
}

impl Method {
    pub fn z_score(threshold: f64) -> Self {
        Self::ZScore { threshold }
    }

    /// IQR with the conventional multiplier of 1.5.
    pub fn iqr() -> Self {
        Self::Iqr { k: 1.5 }
    }

    pub fn iqr_with_multiplier(k: f64) -> Self {
        Self::Iqr { k }
    }

    pub fn modified_z_score(threshold: f64) -> Self {
        Self::ModifiedZScore { threshold }
    }

    /// Attach parameters to a method kind.
    ///
    /// `threshold` only reaches Z-Score and Modified Z-Score; IQR takes
    /// `iqr_multiplier` and ignores `threshold`.
    pub fn from_kind(kind: MethodKind, threshold: f64, iqr_multiplier: f64) -> Self {
        match kind {
            MethodKind::ZScore => Self::ZScore { threshold },
            MethodKind::Iqr => Self::Iqr { k: iqr_multiplier },
            MethodKind::ModifiedZScore => Self::ModifiedZScore { threshold },
        }
    }

    pub fn from_config(config: &DetectionConfig) -> Self {
        Self::from_kind(
            config.effective_method(),
            config.effective_threshold(),
            config.effective_iqr_multiplier(),
        )
    }

    pub fn kind(&self) -> MethodKind {
        match self {
            Self::ZScore { .. } => MethodKind::ZScore,
            Self::Iqr { .. } => MethodKind::Iqr,
            Self::ModifiedZScore { .. } => MethodKind::ModifiedZScore,
        }
    }

    /// Check the parameter against its domain (>= 0, not NaN).
    pub fn validate(&self) -> Result<(), DetectionError> {
        let (name, value) = match *self {
            Self::ZScore { threshold } | Self::ModifiedZScore { threshold } => {
                ("threshold", threshold)
            }
            Self::Iqr { k } => ("k", k),
        };
        if value.is_nan() {
            return Err(DetectionError::InvalidParameter {
                name,
                value,
                reason: "must be a number",
            });
        }
        if value < 0.0 {
            return Err(DetectionError::InvalidParameter {
                name,
                value,
                reason: "must be >= 0",
            });
        }
        Ok(())
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::ZScore { threshold: 3.0 }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZScore { threshold } => write!(f, "z_score(threshold={threshold})"),
            Self::Iqr { k } => write!(f, "iqr(k={k})"),
            Self::ModifiedZScore { threshold } => {
                write!(f, "modified_z_score(threshold={threshold})")
            }
        }
    }
}

/// Population mean and standard deviation (divide by N).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZScoreStats {
    pub mean: f64,
    pub std: f64,
}

/// Quartiles and Tukey fences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IqrStats {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower: f64,
    pub upper: f64,
}

/// Median and MAD, plus the Z-Score statistics when MAD was zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModifiedZScoreStats {
    pub median: f64,
    pub mad: f64,
    pub fallback: Option<ZScoreStats>,
}

/// Intermediate statistics, by method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MethodStats {
    ZScore(ZScoreStats),
    Iqr(IqrStats),
    ModifiedZScore(ModifiedZScoreStats),
}

impl MethodStats {
    /// Mean and standard deviation, if this method computed them.
    pub fn z_score(&self) -> Option<&ZScoreStats> {
        match self {
            Self::ZScore(s) => Some(s),
            Self::ModifiedZScore(s) => s.fallback.as_ref(),
            Self::Iqr(_) => None,
        }
    }

    pub fn iqr(&self) -> Option<&IqrStats> {
        match self {
            Self::Iqr(s) => Some(s),
            _ => None,
        }
    }

    pub fn modified_z_score(&self) -> Option<&ModifiedZScoreStats> {
        match self {
            Self::ModifiedZScore(s) => Some(s),
            _ => None,
        }
    }
}

/// Zero-spread branch taken during detection. Not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateBranch {
    /// σ == 0: nothing flagged.
    ZeroStdDev,
    /// IQR == 0: fences collapse onto Q1, every value != Q1 flagged.
    ZeroIqr,
    /// MAD == 0: Z-Score fallback used.
    ZeroMad,
    /// MAD == 0 and σ == 0: nothing flagged.
    ZeroMadAndStdDev,
}

impl DegenerateBranch {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ZeroStdDev => "zero_std_dev",
            Self::ZeroIqr => "zero_iqr",
            Self::ZeroMad => "zero_mad",
            Self::ZeroMadAndStdDev => "zero_mad_and_std_dev",
        }
    }
}

impl fmt::Display for DegenerateBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one detection call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Method and parameters that produced this result.
    pub method: Method,
    /// One flag per input element, same order; `true` = outlier.
    pub mask: Vec<bool>,
    /// Number of `true` entries in `mask`.
    pub outlier_count: usize,
    /// Number of NaN entries excluded from the statistics.
    pub missing_count: usize,
    pub stats: MethodStats,
    pub degenerate: Option<DegenerateBranch>,
}

impl Detection {
    pub fn len(&self) -> usize {
        self.mask.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    pub fn is_outlier(&self, index: usize) -> bool {
        self.mask.get(index).copied().unwrap_or(false)
    }

    /// Indices of flagged elements, ascending.
    pub fn flagged_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask
            .iter()
            .enumerate()
            .filter_map(|(i, &flagged)| flagged.then_some(i))
    }
}

/// What a single strategy hands back to the detector.
#[derive(Debug, Clone)]
pub(crate) struct StrategyOutcome {
    pub mask: Vec<bool>,
    pub stats: MethodStats,
    pub degenerate: Option<DegenerateBranch>,
}
