//! ARIMA-like model for skill-gap forecasting
//!
//! Coefficients come from simple correlation ratios on the differenced
//! series rather than maximum likelihood. AR coefficients are ratios of
//! lagged cross products, MA coefficients are the mean-centred
//! autocovariances. Forecasting is recursive: each prediction is appended to
//! an extended history buffer and feeds the next step's AR lags, so errors
//! compound with the horizon.

use crate::data::HistoricalData;
use crate::error::{ForecastError, Result};
use crate::models::{forecast_year, ForecastModel, ForecastPoint, ForecastResult, TrainedForecastModel};
use gap_math::difference;
use gap_math::statistics::{autocovariance, lagged_ratio, sample_std_dev, z_score};

/// Per-step widening of the confidence band, applied as `sqrt(1 + step * k)`
const CI_WIDENING: f64 = 0.1;

/// ARIMA model (AutoRegressive Integrated Moving Average)
#[derive(Debug, Clone)]
pub struct ArimaModel {
    /// Name of the model
    name: String,
    /// AR order (p)
    p: usize,
    /// Differencing order (d)
    d: usize,
    /// MA order (q)
    q: usize,
    /// Confidence level for the forecast band
    confidence_level: f64,
}

/// Trained ARIMA model
#[derive(Debug, Clone)]
pub struct TrainedArimaModel {
    /// Name of the model
    name: String,
    /// Fitted AR coefficients
    ar_coefficients: Vec<f64>,
    /// Fitted MA coefficients
    ma_coefficients: Vec<f64>,
    /// Historical data
    historical_data: Vec<f64>,
    /// Residuals from fitting
    residuals: Vec<f64>,
    /// Sample standard deviation of the residuals
    standard_error: f64,
    confidence_level: f64,
    last_year: i32,
}

impl ArimaModel {
    /// Create a new ARIMA model
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self {
            name: format!("ARIMA({},{},{})", p, d, q),
            p,
            d,
            q,
            confidence_level: 0.95,
        }
    }

    /// Set the confidence level of the forecast band (0.90, 0.95 or 0.99)
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Smallest history the lag structure can be fitted on
    pub fn min_observations(&self) -> usize {
        self.p.max(self.q) + 1
    }

    /// Fit the model to a gap series whose last value belongs to `last_year`
    pub fn fit_series(&self, series: &[f64], last_year: i32) -> Result<TrainedArimaModel> {
        if series.len() < self.min_observations() {
            return Err(ForecastError::insufficient_history(
                &self.name,
                self.min_observations(),
                series.len(),
            ));
        }

        let data = difference(series, self.d);

        let ar_coefficients: Vec<f64> = (0..self.p)
            .map(|i| lagged_ratio(&data, i + 1, self.p))
            .collect();
        let ma_coefficients: Vec<f64> = (0..self.q)
            .map(|i| autocovariance(&data, i + 1))
            .collect();

        let residuals: Vec<f64> = (self.p.max(self.q)..data.len())
            .map(|i| {
                let fitted: f64 = ar_coefficients
                    .iter()
                    .enumerate()
                    .map(|(j, coefficient)| coefficient * data[i - j - 1])
                    .sum();
                data[i] - fitted
            })
            .collect();
        let standard_error = sample_std_dev(&residuals);

        tracing::debug!(
            model = %self.name,
            ar = ?ar_coefficients,
            ma = ?ma_coefficients,
            standard_error,
            "fitted arima coefficients"
        );

        Ok(TrainedArimaModel {
            name: self.name.clone(),
            ar_coefficients,
            ma_coefficients,
            historical_data: series.to_vec(),
            residuals,
            standard_error,
            confidence_level: self.confidence_level,
            last_year,
        })
    }
}

impl Default for ArimaModel {
    /// ARIMA(2,1,1)
    fn default() -> Self {
        Self::new(2, 1, 1)
    }
}

impl ForecastModel for ArimaModel {
    type Trained = TrainedArimaModel;

    fn train(&self, history: &HistoricalData) -> Result<TrainedArimaModel> {
        self.fit_series(&history.gaps(), history.last_year())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedArimaModel {
    pub fn ar_coefficients(&self) -> &[f64] {
        &self.ar_coefficients
    }

    pub fn ma_coefficients(&self) -> &[f64] {
        &self.ma_coefficients
    }

    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    pub fn standard_error(&self) -> f64 {
        self.standard_error
    }
}

impl TrainedForecastModel for TrainedArimaModel {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        let z = z_score(self.confidence_level);

        // Extended history: observed values followed by raw predictions
        let mut history = self.historical_data.clone();
        history.reserve(horizon);

        let ma_component: f64 = self
            .residuals
            .iter()
            .rev()
            .zip(self.ma_coefficients.iter())
            .map(|(residual, coefficient)| coefficient * residual)
            .sum();

        let mut points = Vec::with_capacity(horizon);
        for step in 0..horizon {
            let ar_component: f64 = history
                .iter()
                .rev()
                .zip(self.ar_coefficients.iter())
                .map(|(value, coefficient)| coefficient * value)
                .sum();

            let raw = ar_component + ma_component;
            history.push(raw);

            let predicted = raw.max(0.0);
            let half_width = z * self.standard_error * (1.0 + step as f64 * CI_WIDENING).sqrt();

            points.push(ForecastPoint {
                year: forecast_year(self.last_year, step),
                predicted,
                ci_lower: (predicted - half_width).max(0.0),
                ci_upper: predicted + half_width,
            });
        }

        ForecastResult::new(self.name.clone(), points)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
