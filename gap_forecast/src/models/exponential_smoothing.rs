//! Holt linear-trend exponential smoothing for skill-gap forecasting

use crate::data::HistoricalData;
use crate::error::{ForecastError, Result};
use crate::models::{forecast_year, ForecastModel, ForecastPoint, ForecastResult, TrainedForecastModel};
use gap_math::DoubleExponentialSmoothing;

/// Half-width of the band at the first forecast step
const BASE_HALF_WIDTH: f64 = 2.0;
/// Growth of the half-width per additional step
const HALF_WIDTH_STEP: f64 = 0.5;

/// Holt's linear trend model (double exponential smoothing, no seasonality)
#[derive(Debug, Clone)]
pub struct HoltLinear {
    /// Name of the model
    name: String,
    /// Level smoothing parameter
    alpha: f64,
    /// Trend smoothing parameter
    beta: f64,
}

/// Trained Holt model
#[derive(Debug, Clone)]
pub struct TrainedHoltLinear {
    /// Name of the model
    name: String,
    /// Smoothing state after the last observation
    state: DoubleExponentialSmoothing,
    last_year: i32,
}

impl HoltLinear {
    /// Create a new Holt model
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        if alpha <= 0.0 || alpha >= 1.0 {
            return Err(ForecastError::InvalidParameter(
                "Alpha must be between 0 and 1".to_string(),
            ));
        }
        if beta <= 0.0 || beta >= 1.0 {
            return Err(ForecastError::InvalidParameter(
                "Beta must be between 0 and 1".to_string(),
            ));
        }

        Ok(Self {
            name: format!("Holt Linear (alpha={}, beta={})", alpha, beta),
            alpha,
            beta,
        })
    }

    /// Fit the model to a gap series whose last value belongs to `last_year`.
    ///
    /// The level starts at the first observation and the trend at the mean
    /// slope between the first and last observation.
    pub fn fit_series(&self, series: &[f64], last_year: i32) -> Result<TrainedHoltLinear> {
        let (first, rest) = series
            .split_first()
            .ok_or_else(|| ForecastError::insufficient_history(&self.name, 1, 0))?;

        let initial_trend = match rest.last() {
            Some(last) => (last - first) / rest.len() as f64,
            None => 0.0,
        };

        let mut state = DoubleExponentialSmoothing::seeded(self.alpha, self.beta, *first, initial_trend)?;
        for &value in rest {
            state.update(value)?;
        }

        tracing::debug!(
            model = %self.name,
            level = state.level()?,
            trend = state.trend()?,
            "fitted holt state"
        );

        Ok(TrainedHoltLinear {
            name: self.name.clone(),
            state,
            last_year,
        })
    }
}

impl Default for HoltLinear {
    /// alpha = 0.3, beta = 0.1
    fn default() -> Self {
        Self {
            name: "Holt Linear (alpha=0.3, beta=0.1)".to_string(),
            alpha: 0.3,
            beta: 0.1,
        }
    }
}

impl ForecastModel for HoltLinear {
    type Trained = TrainedHoltLinear;

    fn train(&self, history: &HistoricalData) -> Result<Self::Trained> {
        self.fit_series(&history.gaps(), history.last_year())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedHoltLinear {
    pub fn level(&self) -> Result<f64> {
        Ok(self.state.level()?)
    }

    pub fn trend(&self) -> Result<f64> {
        Ok(self.state.trend()?)
    }
}

impl TrainedForecastModel for TrainedHoltLinear {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        let mut points = Vec::with_capacity(horizon);
        for step in 0..horizon {
            let predicted = self.state.forecast(step + 1)?.max(0.0);
            // Fixed linear widening, not derived from residual variance
            let half_width = BASE_HALF_WIDTH + step as f64 * HALF_WIDTH_STEP;

            points.push(ForecastPoint {
                year: forecast_year(self.last_year, step),
                predicted,
                ci_lower: predicted - half_width,
                ci_upper: predicted + half_width,
            });
        }

        ForecastResult::new(self.name.clone(), points)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
