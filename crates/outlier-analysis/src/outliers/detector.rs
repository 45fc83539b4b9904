//! Detection entry point.
//!
//! `OutlierDetector` holds the options that are not part of a method's
//! parameters (missing-value policy, MAD scaling). It carries no state
//! between calls; one instance can serve any number of threads.

use outlier_core::config::DetectionConfig;
use outlier_core::errors::DetectionError;
use outlier_core::types::{MadScale, MissingPolicy};
use rayon::prelude::*;

use super::sample::Sample;
use super::types::{Detection, Method, StrategyOutcome};
use super::{iqr, mad, zscore};

/// Options applied to every detection run by one detector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetectorOptions {
    pub missing: MissingPolicy,
    pub mad_scale: MadScale,
}

impl DetectorOptions {
    pub fn from_config(config: &DetectionConfig) -> Self {
        Self {
            missing: config.effective_missing(),
            mad_scale: config.effective_mad_scale(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OutlierDetector {
    options: DetectorOptions,
}

impl OutlierDetector {
    /// Detector with default options (skip NaN, raw MAD).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: DetectorOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &DetectionConfig) -> Self {
        Self::with_options(DetectorOptions::from_config(config))
    }

    pub fn options(&self) -> DetectorOptions {
        self.options
    }

    /// Run `method` over `sample`.
    ///
    /// Returns a complete `Detection` or an invalid-input error, never both.
    /// The mask has exactly `sample.len()` entries.
    pub fn detect(&self, sample: &[f64], method: Method) -> Result<Detection, DetectionError> {
        if sample.is_empty() {
            return Err(DetectionError::EmptySample);
        }
        method.validate()?;
        let prepared = Sample::new(sample, self.options.missing)?;

        let StrategyOutcome {
            mask,
            stats,
            degenerate,
        } = match method {
            Method::ZScore { threshold } => zscore::run(&prepared, threshold),
            Method::Iqr { k } => iqr::run(&prepared, k),
            Method::ModifiedZScore { threshold } => {
                mad::run(&prepared, threshold, self.options.mad_scale)
            }
        };

        let outlier_count = mask.iter().filter(|&&flagged| flagged).count();
        let missing_count = prepared.missing();

        tracing::debug!(
            method = %method,
            n = sample.len(),
            missing = missing_count,
            outliers = outlier_count,
            degenerate = ?degenerate,
            "detection complete"
        );

        Ok(Detection {
            method,
            mask,
            outlier_count,
            missing_count,
            stats,
            degenerate,
        })
    }

    /// Run independent detections in parallel. Results are in job order and
    /// one failing job does not affect the others.
    pub fn detect_many(&self, jobs: &[(&[f64], Method)]) -> Vec<Result<Detection, DetectionError>> {
        jobs.par_iter()
            .map(|&(sample, method)| self.detect(sample, method))
            .collect()
    }
}

/// Run `method` over `sample` with default options.
pub fn detect(sample: &[f64], method: Method) -> Result<Detection, DetectionError> {
    OutlierDetector::new().detect(sample, method)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample_checked_before_parameters() {
        assert_eq!(
            detect(&[], Method::z_score(-1.0)).unwrap_err(),
            DetectionError::EmptySample
        );
    }

    #[test]
    fn test_detector_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OutlierDetector>();
        assert_send_sync::<Detection>();
    }

    #[test]
    fn test_from_config_reads_options() {
        let config = DetectionConfig {
            missing: Some(MissingPolicy::Reject),
            mad_scale: Some(MadScale::Normal),
            ..Default::default()
        };
        let detector = OutlierDetector::from_config(&config);
        assert_eq!(detector.options().missing, MissingPolicy::Reject);
        assert_eq!(detector.options().mad_scale, MadScale::Normal);
    }
}
