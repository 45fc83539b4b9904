//! Input validation and missing-value handling.

use outlier_core::errors::DetectionError;
use outlier_core::types::MissingPolicy;

/// A validated view of the caller's data.
///
/// Holds the original slice (for mask alignment) and a copy of its finite
/// values (for statistics). The caller's data is never modified.
#[derive(Debug, Clone)]
pub struct Sample<'a> {
    raw: &'a [f64],
    finite: Vec<f64>,
}

impl<'a> Sample<'a> {
    /// Validate `raw` under `policy`.
    ///
    /// Rejects an empty slice, any `±inf`, any `NaN` under
    /// `MissingPolicy::Reject`, and a slice with no finite values.
    pub fn new(raw: &'a [f64], policy: MissingPolicy) -> Result<Self, DetectionError> {
        if raw.is_empty() {
            return Err(DetectionError::EmptySample);
        }

        let mut finite = Vec::with_capacity(raw.len());
        for (index, &value) in raw.iter().enumerate() {
            if value.is_nan() {
                if policy == MissingPolicy::Reject {
                    return Err(DetectionError::MissingValue { index });
                }
                continue;
            }
            if value.is_infinite() {
                return Err(DetectionError::NonFiniteValue { index, value });
            }
            finite.push(value);
        }

        if finite.is_empty() {
            return Err(DetectionError::NoFiniteValues { missing: raw.len() });
        }

        Ok(Self { raw, finite })
    }

    pub fn raw(&self) -> &'a [f64] {
        self.raw
    }

    /// Finite values in original order.
    pub fn finite(&self) -> &[f64] {
        &self.finite
    }

    /// Finite values, ascending.
    pub fn sorted(&self) -> Vec<f64> {
        let mut sorted = self.finite.clone();
        sorted.sort_by(f64::total_cmp);
        sorted
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn missing(&self) -> usize {
        self.raw.len() - self.finite.len()
    }

    /// Build a mask aligned with the original slice. Missing entries are
    /// never flagged.
    pub fn mask<F>(&self, is_outlier: F) -> Vec<bool>
    where
        F: Fn(f64) -> bool,
    {
        self.raw
            .iter()
            .map(|&x| !x.is_nan() && is_outlier(x))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(
            Sample::new(&[], MissingPolicy::Skip).unwrap_err(),
            DetectionError::EmptySample
        );
    }

    #[test]
    fn test_skip_drops_nan() {
        let raw = [1.0, f64::NAN, 3.0];
        let sample = Sample::new(&raw, MissingPolicy::Skip).unwrap();
        assert_eq!(sample.finite(), &[1.0, 3.0]);
        assert_eq!(sample.missing(), 1);
        assert_eq!(sample.mask(|_| true), vec![true, false, true]);
    }

    #[test]
    fn test_reject_reports_index() {
        let raw = [1.0, 2.0, f64::NAN];
        assert_eq!(
            Sample::new(&raw, MissingPolicy::Reject).unwrap_err(),
            DetectionError::MissingValue { index: 2 }
        );
    }

    #[test]
    fn test_all_nan_is_rejected() {
        let raw = [f64::NAN, f64::NAN];
        assert_eq!(
            Sample::new(&raw, MissingPolicy::Skip).unwrap_err(),
            DetectionError::NoFiniteValues { missing: 2 }
        );
    }

    #[test]
    fn test_infinity_is_rejected() {
        let raw = [1.0, f64::INFINITY];
        assert!(matches!(
            Sample::new(&raw, MissingPolicy::Skip),
            Err(DetectionError::NonFiniteValue { index: 1, .. })
        ));
    }

    #[test]
    fn test_sorted_is_ascending() {
        let raw = [3.0, -1.0, 2.0];
        let sample = Sample::new(&raw, MissingPolicy::Skip).unwrap();
        assert_eq!(sample.sorted(), vec![-1.0, 2.0, 3.0]);
    }
}
