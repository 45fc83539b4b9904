//! Descriptive statistics shared by the strategies.
//!
//! All inputs are finite. Functions taking `sorted` expect ascending order.

use statrs::statistics::Statistics;

/// The standard normal 0.75 quantile, to four places.
pub const NORMAL_Q75: f64 = 0.6745;

/// Population mean and standard deviation (divide by N).
///
/// A sample whose values are all equal reports a standard deviation of
/// exactly 0.0; accumulated rounding must not turn a constant sample into
/// a spread one.
pub fn mean_and_population_std(values: &[f64]) -> (f64, f64) {
    if let Some(&first) = values.first() {
        if is_constant(values) {
            return (first, 0.0);
        }
    }
    (values.iter().mean(), values.iter().population_std_dev())
}

/// True when every value equals the first one. Empty slices are constant.
pub fn is_constant(values: &[f64]) -> bool {
    match values.split_first() {
        Some((first, rest)) => rest.iter().all(|v| v == first),
        None => true,
    }
}

/// Quantile at `p` in [0, 1] by linear interpolation between closest ranks,
/// at fractional rank `(n - 1) * p`.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = p.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1]
    } else {
        sorted[lower] + (sorted[upper] - sorted[lower]) * frac
    }
}

pub fn median(sorted: &[f64]) -> f64 {
    quantile(sorted, 0.5)
}

/// Median absolute deviation from `center`, unscaled.
pub fn median_absolute_deviation(values: &[f64], center: f64) -> f64 {
    let mut deviations: Vec<f64> = values.iter().map(|v| (v - center).abs()).collect();
    deviations.sort_by(f64::total_cmp);
    median(&deviations)
}
