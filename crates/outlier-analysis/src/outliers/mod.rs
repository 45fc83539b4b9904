//! Outlier detection: three statistical methods selected by value.
//!
//! - Z-Score → population mean / standard deviation
//! - IQR → Tukey fences around linearly interpolated quartiles
//! - Modified Z-Score → median / MAD, falling back to Z-Score when MAD is zero
//!
//! Every method is a pure function of the sample and its parameters.
//! Zero-spread samples take explicit guarded branches (`DegenerateBranch`)
//! instead of relying on NaN comparisons.

pub mod detector;
pub mod iqr;
pub mod mad;
pub mod report;
pub mod sample;
pub mod stats;
pub mod types;
pub mod zscore;

pub use detector::{detect, DetectorOptions, OutlierDetector};
pub use report::{OutlierReport, ScatterSeries};
pub use sample::Sample;
pub use types::{
    DegenerateBranch, Detection, IqrStats, Method, MethodStats, ModifiedZScoreStats, ZScoreStats,
};
