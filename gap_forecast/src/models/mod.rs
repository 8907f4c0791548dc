//! Forecasting models for skill-gap series

use crate::data::HistoricalData;
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// One forecast year with its confidence band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub year: i32,
    pub predicted: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
}

impl ForecastPoint {
    /// Width of the confidence band
    pub fn interval_width(&self) -> f64 {
        self.ci_upper - self.ci_lower
    }

    /// Distance from the prediction to the upper bound.
    ///
    /// Unlike [`interval_width`](Self::interval_width) this is never cut by
    /// the zero floor on predictions and lower bounds.
    pub fn upper_margin(&self) -> f64 {
        self.ci_upper - self.predicted
    }
}

/// Forecast result containing one point per forecast year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    /// Name of the model that produced the forecast
    model: String,
    /// Forecast points in year order
    points: Vec<ForecastPoint>,
}

impl ForecastResult {
    /// Create a new forecast result
    pub fn new(model: impl Into<String>, points: Vec<ForecastPoint>) -> Result<Self> {
        for pair in points.windows(2) {
            if pair[1].year <= pair[0].year {
                return Err(ForecastError::ValidationError(format!(
                    "Forecast years must strictly increase, found {} after {}",
                    pair[1].year, pair[0].year
                )));
            }
        }

        Ok(Self {
            model: model.into(),
            points,
        })
    }

    /// Name of the producing model
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Get the number of periods forecasted
    pub fn horizons(&self) -> usize {
        self.points.len()
    }

    pub fn years(&self) -> Vec<i32> {
        self.points.iter().map(|p| p.year).collect()
    }

    /// Get the forecasted values
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted).collect()
    }

    pub fn lower_bounds(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.ci_lower).collect()
    }

    pub fn upper_bounds(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.ci_upper).collect()
    }

    /// Confidence band width per forecast year
    pub fn interval_widths(&self) -> Vec<f64> {
        self.points.iter().map(ForecastPoint::interval_width).collect()
    }

    /// Calculate mean absolute error between forecast and actual values
    pub fn mean_absolute_error(&self, actual: &[f64]) -> Result<f64> {
        self.check_actual_len(actual)?;

        let sum: f64 = self
            .points
            .iter()
            .zip(actual.iter())
            .map(|(p, a)| (p.predicted - a).abs())
            .sum();

        Ok(sum / self.points.len() as f64)
    }

    /// Upper margins of each point's band
    pub fn upper_margins(&self) -> Vec<f64> {
        self.points.iter().map(ForecastPoint::upper_margin).collect()
    }

    /// Calculate mean squared error between forecast and actual values
    pub fn mean_squared_error(&self, actual: &[f64]) -> Result<f64> {
        self.check_actual_len(actual)?;

        let sum: f64 = self
            .points
            .iter()
            .zip(actual.iter())
            .map(|(p, a)| (p.predicted - a).powi(2))
            .sum();

        Ok(sum / self.points.len() as f64)
    }

    fn check_actual_len(&self, actual: &[f64]) -> Result<()> {
        if self.points.is_empty() || self.points.len() != actual.len() {
            return Err(ForecastError::ValidationError(format!(
                "Forecast length ({}) doesn't match actual length ({})",
                self.points.len(),
                actual.len()
            )));
        }
        Ok(())
    }
}

/// Trained forecast model
pub trait TrainedForecastModel: Debug {
    /// Generate forecast for future periods
    fn forecast(&self, horizon: usize) -> Result<ForecastResult>;

    /// Name of the model
    fn name(&self) -> &str;
}

/// Forecast model that can be trained on historical data
pub trait ForecastModel: Debug + Clone {
    /// The type of trained model produced
    type Trained: TrainedForecastModel;

    /// Train the model on historical data
    fn train(&self, history: &HistoricalData) -> Result<Self::Trained>;

    /// Get the name of the model
    fn name(&self) -> &str;
}

/// Year of the `step`-th forecast (0-indexed) after `last_year`
pub(crate) fn forecast_year(last_year: i32, step: usize) -> i32 {
    last_year + 1 + step as i32
}

pub mod arima;
pub mod exponential_smoothing;
pub mod regression;

pub use arima::{ArimaModel, TrainedArimaModel};
pub use exponential_smoothing::{HoltLinear, TrainedHoltLinear};
pub use regression::{EconomicRegression, FutureDrivers, RegressionCoefficients, TrainedEconomicRegression};
