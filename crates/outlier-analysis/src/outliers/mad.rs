//! Modified Z-Score (median / MAD).
//!
//! modified z = 0.6745 * (x - median) / MAD. A zero MAD falls back to the
//! plain Z-Score rule with the same threshold, including its zero
//! standard deviation branch.

use outlier_core::types::MadScale;

use super::sample::Sample;
use super::stats::{self, NORMAL_Q75};
use super::types::{DegenerateBranch, MethodStats, ModifiedZScoreStats, StrategyOutcome};
use super::zscore;

/// Compute the median and the (optionally normal-scaled) MAD.
pub fn fit(sample: &Sample<'_>, scale: MadScale) -> ModifiedZScoreStats {
    let sorted = sample.sorted();
    let median = stats::median(&sorted);
    let raw = stats::median_absolute_deviation(&sorted, median);
    let mad = match scale {
        MadScale::Raw => raw,
        MadScale::Normal => raw / NORMAL_Q75,
    };
    ModifiedZScoreStats {
        median,
        mad,
        fallback: None,
    }
}

/// Modified z-score, or `None` when MAD is zero.
pub fn score(value: f64, stats: &ModifiedZScoreStats) -> Option<f64> {
    if stats.mad == 0.0 {
        return None;
    }
    Some(NORMAL_Q75 * (value - stats.median) / stats.mad)
}

pub(crate) fn run(sample: &Sample<'_>, threshold: f64, scale: MadScale) -> StrategyOutcome {
    let mut fitted = fit(sample, scale);

    if fitted.mad == 0.0 {
        let (mask, fallback, z_degenerate) = zscore::flag(sample, threshold);
        let degenerate = match z_degenerate {
            Some(_) => DegenerateBranch::ZeroMadAndStdDev,
            None => DegenerateBranch::ZeroMad,
        };
        tracing::debug!(
            median = fitted.median,
            branch = %degenerate,
            "modified z-score: zero MAD, falling back to z-score"
        );
        fitted.fallback = Some(fallback);
        return StrategyOutcome {
            mask,
            stats: MethodStats::ModifiedZScore(fitted),
            degenerate: Some(degenerate),
        };
    }

    StrategyOutcome {
        mask: sample.mask(|x| score(x, &fitted).is_some_and(|m| m.abs() > threshold)),
        stats: MethodStats::ModifiedZScore(fitted),
        degenerate: None,
    }
}

#[cfg(test)]
mod tests {
    use outlier_core::types::MissingPolicy;

    use super::*;

    fn sample(values: &[f64]) -> Sample<'_> {
        Sample::new(values, MissingPolicy::Skip).unwrap()
    }

    #[test]
    fn test_robust_to_masking() {
        // median 12, MAD 1
        let mut values: Vec<f64> = (0..20).map(|i| 10.0 + (i % 5) as f64).collect();
        values.push(1000.0);
        values.push(1100.0);
        let outcome = run(&sample(&values), 3.5, MadScale::Raw);
        assert!(outcome.mask[20]);
        assert!(outcome.mask[21]);
        assert_eq!(outcome.mask.iter().filter(|&&m| m).count(), 2);
    }

    #[test]
    fn test_known_scores() {
        // median 3, MAD 1
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let fitted = fit(&sample(&values), MadScale::Raw);
        assert_eq!(fitted.median, 3.0);
        assert_eq!(fitted.mad, 1.0);
        assert!((score(5.0, &fitted).unwrap() - 2.0 * 0.6745).abs() < 1e-12);
    }

    #[test]
    fn test_normal_scale_divides_by_constant() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let fitted = fit(&sample(&values), MadScale::Normal);
        assert!((fitted.mad - 1.0 / 0.6745).abs() < 1e-12);
    }

    #[test]
    fn test_zero_mad_and_zero_std_flags_nothing() {
        let values = vec![7.0; 8];
        let outcome = run(&sample(&values), 0.0, MadScale::Raw);
        assert!(outcome.mask.iter().all(|&m| !m));
        assert_eq!(outcome.degenerate, Some(DegenerateBranch::ZeroMadAndStdDev));
    }

    #[test]
    fn test_zero_mad_records_fallback_stats() {
        let values = [5.0, 5.0, 5.0, 5.0, 100.0];
        let outcome = run(&sample(&values), 1.5, MadScale::Raw);
        let stats = outcome.stats.modified_z_score().unwrap();
        assert_eq!(stats.mad, 0.0);
        let fallback = stats.fallback.unwrap();
        assert!((fallback.mean - 24.0).abs() < 1e-9);
        assert!((fallback.std - 38.0).abs() < 1e-9);
        assert_eq!(outcome.mask, vec![false, false, false, false, true]);
        assert_eq!(outcome.degenerate, Some(DegenerateBranch::ZeroMad));
    }
}
