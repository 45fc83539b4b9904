//! Z-Score with population statistics.
//!
//! z = (x - mean) / std, std divided by N. A zero standard deviation is a
//! guarded branch that flags nothing.

use super::sample::Sample;
use super::stats;
use super::types::{DegenerateBranch, MethodStats, StrategyOutcome, ZScoreStats};

/// Compute population mean and standard deviation over the finite values.
pub fn fit(sample: &Sample<'_>) -> ZScoreStats {
    let (mean, std) = stats::mean_and_population_std(sample.finite());
    ZScoreStats { mean, std }
}

/// Standardized score, or `None` when the standard deviation is zero.
pub fn score(value: f64, stats: &ZScoreStats) -> Option<f64> {
    if stats.std == 0.0 {
        return None;
    }
    Some((value - stats.mean) / stats.std)
}

/// Flag every value whose |z| exceeds `threshold`.
///
/// Returns the mask, the statistics, and `ZeroStdDev` when nothing could
/// be standardized.
pub(crate) fn flag(
    sample: &Sample<'_>,
    threshold: f64,
) -> (Vec<bool>, ZScoreStats, Option<DegenerateBranch>) {
    let fitted = fit(sample);

    if fitted.std == 0.0 {
        tracing::debug!(mean = fitted.mean, "z-score: zero standard deviation, nothing flagged");
        return (vec![false; sample.len()], fitted, Some(DegenerateBranch::ZeroStdDev));
    }

    let mask = sample.mask(|x| score(x, &fitted).is_some_and(|z| z.abs() > threshold));
    (mask, fitted, None)
}

pub(crate) fn run(sample: &Sample<'_>, threshold: f64) -> StrategyOutcome {
    let (mask, fitted, degenerate) = flag(sample, threshold);
    StrategyOutcome {
        mask,
        stats: MethodStats::ZScore(fitted),
        degenerate,
    }
}
