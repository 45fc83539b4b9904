//! Outlier detection engine.
//!
//! Three classical rules over a numeric sample, each returning a boolean
//! mask aligned with the input plus the statistics used to derive it:
//! Z-Score, IQR with Tukey fences, and Modified Z-Score (MAD).

pub mod outliers;

pub use outliers::{
    detect, DegenerateBranch, Detection, DetectorOptions, IqrStats, Method, MethodStats,
    ModifiedZScoreStats, OutlierDetector, OutlierReport, ZScoreStats,
};
