//! Descriptive statistics over samples of `f64`.
//!
//! # Conventions
//!
//! - **Percentiles** use linear interpolation between order statistics: for a
//!   sorted sample `x[0..n]` and a level `p` in `[0, 100]`, the rank is
//!   `h = p / 100 * (n - 1)` and the result is
//!   `x[floor(h)] + (h - floor(h)) * (x[ceil(h)] - x[floor(h)])`.
//! - **Standard deviation** is the sample estimator (denominator `n - 1`) and is
//!   `0` for samples with fewer than two values.
//! - **Skewness** and **kurtosis** are the population (moment) estimators
//!   `g1 = m3 / m2^(3/2)` and `g2 = m4 / m2^2 - 3` (excess kurtosis, Normal = 0),
//!   where `mk` is the k-th central moment with denominator `n`.
//!
//! Statistically undefined values are reported as sentinels instead of errors:
//! empty samples yield `NaN` means and percentiles; moments yield `NaN` for
//! fewer than three values or zero variance. A sample whose values all compare
//! equal has zero variance exactly, whatever rounding its running sums carry.

/// Minimum sample size for which skewness and kurtosis are reported.
pub const MIN_MOMENT_SAMPLES: usize = 3;

/// Arithmetic mean, or `NaN` for an empty sample.
///
/// # Examples
///
/// ```rust
/// use decision_core::math::statistics::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    if let Some(value) = constant_value(values) {
        return value;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Returns the shared value when every element compares equal.
fn constant_value(values: &[f64]) -> Option<f64> {
    let (&first, rest) = values.split_first()?;
    rest.iter().all(|&x| x == first).then_some(first)
}

/// Sample standard deviation (denominator `n - 1`); `0` when `n < 2`.
///
/// # Examples
///
/// ```rust
/// use decision_core::math::statistics::sample_std_dev;
///
/// assert_eq!(sample_std_dev(&[5.0]), 0.0);
/// assert!((sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]) - 2.138089935).abs() < 1e-8);
/// ```
pub fn sample_std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 || constant_value(values).is_some() {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|&x| (x - m).powi(2)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Returns an ascending copy of `values` (total order, NaN last).
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

/// Percentile of an already **sorted** sample using linear interpolation.
///
/// `p` is expressed in percent and clamped to `[0, 100]`. Returns `NaN` for an
/// empty sample.
///
/// # Examples
///
/// ```rust
/// use decision_core::math::statistics::percentile;
///
/// let sorted = [10.0, 20.0, 30.0, 40.0];
/// assert_eq!(percentile(&sorted, 0.0), 10.0);
/// assert_eq!(percentile(&sorted, 50.0), 25.0);
/// assert_eq!(percentile(&sorted, 100.0), 40.0);
/// ```
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted[0];
    }

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let weight = rank - lower as f64;
    sorted[lower] + weight * (sorted[upper] - sorted[lower])
}

/// Percentile of an unsorted sample; sorts a copy first.
///
/// Prefer [`percentile`] with a pre-sorted buffer when several levels are
/// needed from the same sample.
pub fn percentile_of(values: &[f64], p: f64) -> f64 {
    percentile(&sorted(values), p)
}

/// Central moments `(m2, m3, m4)` with denominator `n`.
fn central_moments(values: &[f64]) -> (f64, f64, f64) {
    let n = values.len() as f64;
    let m = mean(values);
    let (mut s2, mut s3, mut s4) = (0.0, 0.0, 0.0);
    for &x in values {
        let d = x - m;
        let d2 = d * d;
        s2 += d2;
        s3 += d2 * d;
        s4 += d2 * d2;
    }
    (s2 / n, s3 / n, s4 / n)
}

/// Skewness (third standardised central moment).
///
/// Returns `NaN` when fewer than [`MIN_MOMENT_SAMPLES`] values are given or the
/// sample has zero variance.
///
/// # Examples
///
/// ```rust
/// use decision_core::math::statistics::skewness;
///
/// assert!(skewness(&[1.0, 2.0, 3.0]).abs() < 1e-12);
/// assert!(skewness(&[1.0, 2.0]).is_nan());
/// ```
pub fn skewness(values: &[f64]) -> f64 {
    if values.len() < MIN_MOMENT_SAMPLES || constant_value(values).is_some() {
        return f64::NAN;
    }
    let (m2, m3, _) = central_moments(values);
    if m2 == 0.0 {
        return f64::NAN;
    }
    m3 / m2.powf(1.5)
}

/// Excess kurtosis (fourth standardised central moment minus 3).
///
/// Returns `NaN` when fewer than [`MIN_MOMENT_SAMPLES`] values are given or the
/// sample has zero variance.
///
/// # Examples
///
/// ```rust
/// use decision_core::math::statistics::excess_kurtosis;
///
/// let k = excess_kurtosis(&[1.0, 2.0, 3.0, 4.0, 5.0]);
/// assert!((k + 1.3).abs() < 1e-12);
/// ```
pub fn excess_kurtosis(values: &[f64]) -> f64 {
    if values.len() < MIN_MOMENT_SAMPLES || constant_value(values).is_some() {
        return f64::NAN;
    }
    let (m2, _, m4) = central_moments(values);
    if m2 == 0.0 {
        return f64::NAN;
    }
    m4 / (m2 * m2) - 3.0
}

/// Share of `count` in `total`, in percent; `NaN` when `total` is zero.
#[inline]
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return f64::NAN;
    }
    100.0 * count as f64 / total as f64
}
