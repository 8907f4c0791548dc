//! Differencing for integrated time-series models

/// Apply `order` rounds of first differencing to a series.
///
/// Each round replaces the series with `series[i + 1] - series[i]`, so the
/// result is `order` elements shorter than the input. A series too short for
/// the requested order yields an empty vector.
///
/// ```
/// use gap_math::difference;
///
/// assert_eq!(difference(&[5.0, 8.0, 4.0, 9.0], 1), vec![3.0, -4.0, 5.0]);
/// assert!(difference(&[1.0, 2.0], 5).is_empty());
/// ```
pub fn difference(series: &[f64], order: usize) -> Vec<f64> {
    if series.len() <= order {
        return Vec::new();
    }

    let mut result = series.to_vec();
    for _ in 0..order {
        result = result.windows(2).map(|w| w[1] - w[0]).collect();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_difference() {
        assert_eq!(difference(&[5.0, 8.0, 4.0, 9.0], 1), vec![3.0, -4.0, 5.0]);
    }

    #[test]
    fn test_zero_order_is_identity() {
        let series = [35.0, 33.0, 30.0, 32.0, 28.0];
        assert_eq!(difference(&series, 0), series.to_vec());
    }

    #[test]
    fn test_second_difference() {
        // [1, 4, 9, 16] -> [3, 5, 7] -> [2, 2]
        assert_eq!(difference(&[1.0, 4.0, 9.0, 16.0], 2), vec![2.0, 2.0]);
    }

    #[test]
    fn test_short_series_yields_empty() {
        assert!(difference(&[1.0, 2.0], 5).is_empty());
        assert!(difference(&[1.0, 2.0], 2).is_empty());
        assert!(difference(&[], 1).is_empty());
        assert!(difference(&[], 0).is_empty());
    }

    #[test]
    fn test_length_shrinks_by_order() {
        let series: Vec<f64> = (0..10).map(|i| (i * i) as f64).collect();
        for order in 0..10 {
            assert_eq!(difference(&series, order).len(), series.len() - order);
        }
    }
}
