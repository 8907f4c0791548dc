//! Compound growth and rounding helpers

/// Value of `base` after `periods` rounds of compound growth at `rate_percent`.
///
/// `base · (1 + rate_percent / 100)^periods`
pub fn compound_growth(base: f64, rate_percent: f64, periods: u32) -> f64 {
    base * (1.0 + rate_percent / 100.0).powi(periods as i32)
}

/// Round to a fixed number of decimal places, halves away from zero
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}
