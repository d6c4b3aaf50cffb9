pub mod decimal;
pub mod sig_figs;
pub mod bytes;
pub mod random;

pub use bytes::{to_bytes, BytesOptions};
pub use decimal::{js_to_string, to_fixed, to_precision};
pub use random::{random_int_range, random_int_range_with, random_range, random_range_with};
pub use sig_figs::{to_sig_figs, to_sig_figs_with_unit, DEFAULT_SIG_FIGS};

/// Bound `value` to `[min, max]` inclusive.
///
/// The upper bound is applied first, so when `min > max` the result is `min`.
/// A `NaN` anywhere gives `NaN`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || min.is_nan() || max.is_nan() {
        return f64::NAN;
    }
    let upper = if value > max { max } else { value };
    if upper < min {
        min
    } else {
        upper
    }
}

/// Sum the values, skipping missing entries and `NaN`.
///
/// ```
/// use format_utils::number::sum;
/// assert_eq!(sum([Some(1.0), None, Some(f64::NAN), Some(5.0)]), 6.0);
/// assert_eq!(sum(Vec::<f64>::new()), 0.0);
/// ```
pub fn sum<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<Option<f64>>,
{
    values
        .into_iter()
        .filter_map(Into::<Option<f64>>::into)
        .filter(|n| !n.is_nan())
        .fold(0.0, |total, n| total + n)
}

/// `ratio` as a percentage with exactly `decimals` places.
///
/// ```
/// use format_utils::number::to_percentage;
/// assert_eq!(to_percentage(0.12, 0), "12");
/// assert_eq!(to_percentage(0.12, 2), "12.00");
/// ```
pub fn to_percentage(ratio: f64, decimals: usize) -> String {
    to_fixed(ratio * 100.0, decimals)
}
