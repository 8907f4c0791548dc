//! Accuracy metrics and hold-out backtesting

use crate::data::HistoricalData;
use crate::error::{ForecastError, Result};
use crate::models::{ArimaModel, TrainedForecastModel};
use gap_math::round_to;
use serde::{Deserialize, Serialize};

/// Backtested accuracy of a forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelAccuracy {
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Error
    pub mae: f64,
    /// Coefficient of determination; negative when worse than the mean
    pub r2: f64,
}

impl ModelAccuracy {
    /// Round every metric to `decimals` places
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            rmse: round_to(self.rmse, decimals),
            mae: round_to(self.mae, decimals),
            r2: round_to(self.r2, decimals),
        }
    }
}

impl std::fmt::Display for ModelAccuracy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Backtest Accuracy:")?;
        writeln!(f, "  RMSE: {:.2}", self.rmse)?;
        writeln!(f, "  MAE:  {:.2}", self.mae)?;
        writeln!(f, "  R2:   {:.2}", self.r2)?;
        Ok(())
    }
}

/// Evaluate forecast accuracy against actual values
///
/// `r2` is not clamped. When the actual values have no variance it is 1.0 for
/// a perfect forecast and 0.0 otherwise.
pub fn evaluate_forecast(forecast: &[f64], actual: &[f64]) -> Result<ModelAccuracy> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::ValidationError(
            "Forecast and actual values must have the same non-zero length".to_string(),
        ));
    }

    let n = forecast.len() as f64;
    let errors: Vec<f64> = forecast
        .iter()
        .zip(actual.iter())
        .map(|(&f, &a)| a - f)
        .collect();

    let ss_residual: f64 = errors.iter().map(|e| e.powi(2)).sum();
    let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let rmse = (ss_residual / n).sqrt();

    let actual_mean = actual.iter().sum::<f64>() / n;
    let ss_total: f64 = actual.iter().map(|a| (a - actual_mean).powi(2)).sum();
    let r2 = if ss_total == 0.0 {
        if ss_residual == 0.0 {
            1.0
        } else {
            0.0
        }
    } else {
        1.0 - ss_residual / ss_total
    };

    Ok(ModelAccuracy { rmse, mae, r2 })
}

/// Hold out the last `holdout` gaps, refit the ARIMA model on the rest and
/// score its forecast of the held-out years.
pub fn backtest(model: &ArimaModel, history: &HistoricalData, holdout: usize) -> Result<ModelAccuracy> {
    let needed = model.min_observations() + holdout;
    if holdout == 0 || history.len() < needed {
        return Err(ForecastError::insufficient_history(
            "ARIMA backtest",
            needed,
            history.len(),
        ));
    }

    let train = history.head(history.len() - holdout)?;
    let actual = &history.gaps()[train.len()..];

    let trained = model.fit_series(&train.gaps(), train.last_year())?;
    let forecast = trained.forecast(holdout)?;

    let accuracy = evaluate_forecast(&forecast.values(), actual)?;
    tracing::debug!(
        holdout,
        rmse = accuracy.rmse,
        mae = accuracy.mae,
        r2 = accuracy.r2,
        "arima backtest"
    );
    Ok(accuracy)
}
