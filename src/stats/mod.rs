// Statistics kernels
//
// Plain reductions over `f64` slices used by the summaries. Missing values
// never reach this layer; callers hand over the values that survived their
// missing-value policy.

pub mod descriptive;

use serde::Serialize;

/// Location and spread of a set of values
///
/// # Example
/// ```rust
/// use churn_eda::stats;
///
/// let moments = stats::describe(&[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(moments.count, 4);
/// assert_eq!(moments.mean, Some(2.5));
/// assert_eq!(moments.median, Some(2.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Moments {
    /// Number of values
    pub count: usize,
    /// Arithmetic mean, `None` for no values
    pub mean: Option<f64>,
    /// Median, `None` for no values
    pub median: Option<f64>,
    /// Sample standard deviation (n - 1 denominator), `None` below two values
    pub std_dev: Option<f64>,
}

/// Computes count, mean, median and sample standard deviation in one call
pub fn describe<T: AsRef<[f64]>>(data: T) -> Moments {
    descriptive::describe_impl(data.as_ref())
}

pub fn mean<T: AsRef<[f64]>>(data: T) -> Option<f64> {
    descriptive::mean_impl(data.as_ref())
}

pub fn median<T: AsRef<[f64]>>(data: T) -> Option<f64> {
    descriptive::median_impl(data.as_ref())
}

/// Sample standard deviation
pub fn std_dev<T: AsRef<[f64]>>(data: T) -> Option<f64> {
    descriptive::std_dev_impl(data.as_ref())
}

/// Rounds to `digits` decimal places, ties to even
///
/// ```rust
/// use churn_eda::stats::round_to;
///
/// assert_eq!(round_to(64.76123, 2), 64.76);
/// assert_eq!(round_to(3.125, 2), 3.12);
/// assert_eq!(round_to(0.375, 2), 0.38);
/// ```
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(digits.min(i32::MAX as u32) as i32);
    let rounded = (value * factor).round_ties_even() / factor;
    // keep the untouched value when scaling would overflow
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}
