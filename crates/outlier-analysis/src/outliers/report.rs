//! Render-ready view of a detection: counts, statistics, flagged rows,
//! and the two scatter series (all points, flagged points).

use serde::{Deserialize, Serialize};

use super::types::{DegenerateBranch, Detection, Method, MethodStats};

/// `(row index, value)` pairs for plotting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    /// Every non-missing point.
    pub all: Vec<(usize, f64)>,
    /// Flagged points only.
    pub flagged: Vec<(usize, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlierReport {
    /// Name of the analyzed column.
    pub label: String,
    pub method: Method,
    pub total: usize,
    pub outlier_count: usize,
    pub missing_count: usize,
    pub stats: MethodStats,
    pub degenerate: Option<DegenerateBranch>,
    pub outlier_indices: Vec<usize>,
    pub series: ScatterSeries,
}

impl OutlierReport {
    /// Build a report from the sample that produced `detection`.
    ///
    /// `sample` must be the slice passed to `detect`; entries past the
    /// shorter of the two are ignored.
    pub fn from_detection(label: impl Into<String>, sample: &[f64], detection: &Detection) -> Self {
        let mut series = ScatterSeries::default();
        for (index, (&value, &flagged)) in sample.iter().zip(&detection.mask).enumerate() {
            if value.is_nan() {
                continue;
            }
            series.all.push((index, value));
            if flagged {
                series.flagged.push((index, value));
            }
        }

        Self {
            label: label.into(),
            method: detection.method,
            total: detection.len(),
            outlier_count: detection.outlier_count,
            missing_count: detection.missing_count,
            stats: detection.stats,
            degenerate: detection.degenerate,
            outlier_indices: detection.flagged_indices().collect(),
            series,
        }
    }

    /// Plot title, e.g. `price - IQR Outliers`.
    pub fn title(&self) -> String {
        format!("{} - {} Outliers", self.label, self.method.kind().label())
    }
}
