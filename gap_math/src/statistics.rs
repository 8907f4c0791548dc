//! Descriptive statistics used by the forecasting models
//!
//! The ratios here fall back to zero instead of failing when their
//! denominator vanishes, which is how the models degrade on flat input.

use crate::{MathError, Result};
use statrs::statistics::Statistics;

/// Arithmetic mean of a non-empty slice
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData(
            "Cannot take the mean of an empty series".to_string(),
        ));
    }
    Ok(values.iter().mean())
}

/// Sample standard deviation (n - 1 denominator), or 0.0 with fewer than two values
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    values.iter().std_dev()
}

/// Ratio of lagged cross products to lagged squares.
///
/// Computes `Σ x[j]·x[j-lag] / Σ x[j-lag]²` over `j` in `start..n`. Terms
/// whose lagged index would fall before the series are skipped. Returns 0.0
/// when the denominator is zero or no terms exist.
pub fn lagged_ratio(values: &[f64], lag: usize, start: usize) -> f64 {
    let first = start.max(lag);
    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for j in first..values.len() {
        let lagged = values[j - lag];
        numerator += values[j] * lagged;
        denominator += lagged * lagged;
    }

    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Mean-centred sample autocovariance at `lag`, divided by `n - lag`.
///
/// Returns 0.0 when the series is not longer than the lag.
pub fn autocovariance(values: &[f64], lag: usize) -> f64 {
    let n = values.len();
    if n <= lag {
        return 0.0;
    }
    let mean = values.iter().mean();

    let sum: f64 = (lag..n)
        .map(|j| (values[j] - mean) * (values[j - lag] - mean))
        .sum();

    sum / (n - lag) as f64
}

/// Least-squares slope of `y` on a single predictor `x`.
///
/// `Σ(y-ȳ)(x-x̄) / Σ(x-x̄)²`, or 0.0 when `x` has no variance.
pub fn slope(y: &[f64], x: &[f64]) -> Result<f64> {
    if y.len() != x.len() {
        return Err(MathError::InvalidInput(format!(
            "Response length ({}) doesn't match predictor length ({})",
            y.len(),
            x.len()
        )));
    }
    let y_mean = mean(y)?;
    let x_mean = mean(x)?;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (&yi, &xi) in y.iter().zip(x.iter()) {
        let x_diff = xi - x_mean;
        numerator += (yi - y_mean) * x_diff;
        denominator += x_diff * x_diff;
    }

    if denominator == 0.0 {
        Ok(0.0)
    } else {
        Ok(numerator / denominator)
    }
}

/// Two-sided normal critical value for a supported confidence level.
///
/// 0.90, 0.95 and 0.99 are supported; any other level falls back to the
/// 95% value.
pub fn z_score(confidence_level: f64) -> f64 {
    const LEVELS: [(f64, f64); 3] = [(0.90, 1.645), (0.95, 1.96), (0.99, 2.576)];

    LEVELS
        .iter()
        .find(|(level, _)| (confidence_level - level).abs() < 1e-9)
        .map(|&(_, z)| z)
        .unwrap_or(1.96)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[35.0, 33.0, 30.0, 32.0, 28.0]).unwrap(), 31.6, epsilon = 1e-12);
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_sample_std_dev() {
        // Sample variance of [2, 4, 4, 4, 5, 5, 7, 9] is 32 / 7
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sample_std_dev(&values), (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);

        assert_eq!(sample_std_dev(&[]), 0.0);
        assert_eq!(sample_std_dev(&[4.0]), 0.0);
    }

    #[test]
    fn test_lagged_ratio() {
        let diffs = [-2.0, -3.0, 2.0, -4.0];
        // lag 1 from j = 2: (2*-3 + -4*2) / (9 + 4)
        assert_relative_eq!(lagged_ratio(&diffs, 1, 2), -14.0 / 13.0, epsilon = 1e-12);
        // lag 2 from j = 2: (2*-2 + -4*-3) / (4 + 9)
        assert_relative_eq!(lagged_ratio(&diffs, 2, 2), 8.0 / 13.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lagged_ratio_degenerate() {
        assert_eq!(lagged_ratio(&[0.0, 0.0, 0.0], 1, 1), 0.0);
        assert_eq!(lagged_ratio(&[1.0, 2.0], 1, 2), 0.0);
        assert_eq!(lagged_ratio(&[], 2, 2), 0.0);
    }

    #[test]
    fn test_autocovariance() {
        let diffs = [-2.0, -3.0, 2.0, -4.0];
        // mean -1.75; products at lag 1: (-1.25)(-0.25) + (3.75)(-1.25) + (-2.25)(3.75)
        let expected = (0.3125 - 4.6875 - 8.4375) / 3.0;
        assert_relative_eq!(autocovariance(&diffs, 1), expected, epsilon = 1e-12);
        assert_eq!(autocovariance(&[1.0], 1), 0.0);
    }

    #[test]
    fn test_slope() {
        let y = [1.0, 3.0, 5.0, 7.0];
        let x = [0.0, 1.0, 2.0, 3.0];
        assert_relative_eq!(slope(&y, &x).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_slope_zero_variance_predictor() {
        let y = [1.0, 3.0, 5.0];
        let x = [4.0, 4.0, 4.0];
        assert_eq!(slope(&y, &x).unwrap(), 0.0);
    }

    #[test]
    fn test_slope_length_mismatch() {
        assert!(matches!(
            slope(&[1.0, 2.0], &[1.0]),
            Err(MathError::InvalidInput(_))
        ));
    }

    #[rstest]
    #[case(0.90, 1.645)]
    #[case(0.95, 1.96)]
    #[case(0.99, 2.576)]
    #[case(0.80, 1.96)]
    #[case(0.999, 1.96)]
    fn test_z_score(#[case] level: f64, #[case] expected: f64) {
        assert_eq!(z_score(level), expected);
    }
}
