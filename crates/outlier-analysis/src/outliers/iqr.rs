//! IQR with Tukey fences.
//!
//! Quartiles by linear interpolation at rank (n - 1) * p. Fences are
//! Q1 - k*IQR and Q3 + k*IQR (k = 1.5 default).
//!
//! When IQR is zero both fences collapse onto Q1 and every value other
//! than Q1 is flagged. That is the intended reading of a sample that is
//! constant apart from its outliers, so it is not special-cased away.

use super::sample::Sample;
use super::stats;
use super::types::{DegenerateBranch, IqrStats, MethodStats, StrategyOutcome};

/// Compute quartiles and fences for multiplier `k`.
pub fn fit(sample: &Sample<'_>, k: f64) -> IqrStats {
    let sorted = sample.sorted();
    let q1 = stats::quantile(&sorted, 0.25);
    let q3 = stats::quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    IqrStats {
        q1,
        q3,
        iqr,
        lower: q1 - k * iqr,
        upper: q3 + k * iqr,
    }
}

/// True when `value` lies strictly outside the fences.
pub fn is_outside(value: f64, fences: &IqrStats) -> bool {
    value < fences.lower || value > fences.upper
}

pub(crate) fn run(sample: &Sample<'_>, k: f64) -> StrategyOutcome {
    let fitted = fit(sample, k);

    let degenerate = if fitted.iqr == 0.0 {
        tracing::debug!(q1 = fitted.q1, "iqr: zero interquartile range, fences collapse onto q1");
        Some(DegenerateBranch::ZeroIqr)
    } else {
        None
    };

    StrategyOutcome {
        mask: sample.mask(|x| is_outside(x, &fitted)),
        stats: MethodStats::Iqr(fitted),
        degenerate,
    }
}
