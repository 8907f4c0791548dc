//! Economic-driver regression for skill-gap forecasting
//!
//! Each driver's slope is fitted on its own (`cov(gap, x) / var(x)`) as if
//! the three drivers were orthogonal; there is no joint least-squares solve,
//! so correlated drivers are counted more than once. The intercept then
//! centres the combined prediction on the mean gap.

use crate::data::HistoricalData;
use crate::error::{ForecastError, Result};
use crate::models::{forecast_year, ForecastModel, ForecastPoint, ForecastResult, TrainedForecastModel};
use gap_math::statistics::{mean, slope};
use serde::{Deserialize, Serialize};

/// Fitted parameters including the intercept
const PARAMETER_COUNT: usize = 4;
const Z_95: f64 = 1.96;
/// Per-step widening of the confidence band, applied as `sqrt(1 + step * k)`
const CI_WIDENING: f64 = 0.15;

/// Economic drivers assumed for one forecast year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FutureDrivers {
    pub year: i32,
    pub gdp_growth: f64,
    pub it_growth: f64,
    pub kdem_investment: f64,
}

/// Intercept and per-driver slopes
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RegressionCoefficients {
    pub intercept: f64,
    pub gdp_growth: f64,
    pub it_growth: f64,
    pub kdem_investment: f64,
}

impl RegressionCoefficients {
    fn predict(&self, gdp_growth: f64, it_growth: f64, kdem_investment: f64) -> f64 {
        self.intercept
            + self.gdp_growth * gdp_growth
            + self.it_growth * it_growth
            + self.kdem_investment * kdem_investment
    }
}

/// Regression of the gap on GDP growth, IT-sector growth and KDEM investment
#[derive(Debug, Clone)]
pub struct EconomicRegression {
    /// Name of the model
    name: String,
    /// Driver assumptions for consecutive forecast years; the last repeats
    future: Vec<FutureDrivers>,
}

/// Trained regression model
#[derive(Debug, Clone)]
pub struct TrainedEconomicRegression {
    name: String,
    coefficients: RegressionCoefficients,
    standard_error: f64,
    future: Vec<FutureDrivers>,
    last_year: i32,
}

impl EconomicRegression {
    /// Create a regression that forecasts from the given driver assumptions
    pub fn new(future: Vec<FutureDrivers>) -> Result<Self> {
        if future.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "At least one set of future drivers is required".to_string(),
            ));
        }

        Ok(Self {
            name: "Economic Regression".to_string(),
            future,
        })
    }

    pub fn future(&self) -> &[FutureDrivers] {
        &self.future
    }
}

impl ForecastModel for EconomicRegression {
    type Trained = TrainedEconomicRegression;

    fn train(&self, history: &HistoricalData) -> Result<TrainedEconomicRegression> {
        let last_year = history.last_year();
        for (step, drivers) in self.future.iter().enumerate() {
            let expected = forecast_year(last_year, step);
            if drivers.year != expected {
                return Err(ForecastError::ValidationError(format!(
                    "Future drivers for step {} are for {}, expected {}",
                    step, drivers.year, expected
                )));
            }
        }

        let gaps = history.gaps();
        let gdp = history.gdp_growth();
        let it = history.it_growth();
        let kdem = history.kdem_investment();

        let gdp_slope = slope(&gaps, &gdp)?;
        let it_slope = slope(&gaps, &it)?;
        let kdem_slope = slope(&gaps, &kdem)?;

        let intercept = mean(&gaps)?
            - (gdp_slope * mean(&gdp)? + it_slope * mean(&it)? + kdem_slope * mean(&kdem)?);

        let coefficients = RegressionCoefficients {
            intercept,
            gdp_growth: gdp_slope,
            it_growth: it_slope,
            kdem_investment: kdem_slope,
        };

        let n = gaps.len();
        let standard_error = if n > PARAMETER_COUNT {
            let ss_residual: f64 = history
                .factors()
                .iter()
                .zip(gaps.iter())
                .map(|(factor, actual)| {
                    let fitted = coefficients.predict(
                        factor.gdp_growth,
                        factor.it_growth,
                        factor.kdem_investment,
                    );
                    (actual - fitted).powi(2)
                })
                .sum();
            (ss_residual / (n - PARAMETER_COUNT) as f64).sqrt()
        } else {
            tracing::debug!(observations = n, "too few observations for a regression standard error");
            0.0
        };

        tracing::debug!(
            model = %self.name,
            coefficients = ?coefficients,
            standard_error,
            "fitted regression coefficients"
        );

        Ok(TrainedEconomicRegression {
            name: self.name.clone(),
            coefficients,
            standard_error,
            future: self.future.clone(),
            last_year,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl TrainedEconomicRegression {
    pub fn coefficients(&self) -> &RegressionCoefficients {
        &self.coefficients
    }

    pub fn standard_error(&self) -> f64 {
        self.standard_error
    }

    fn drivers_for(&self, step: usize) -> &FutureDrivers {
        // `new` rejects an empty driver list
        &self.future[step.min(self.future.len() - 1)]
    }
}

impl TrainedForecastModel for TrainedEconomicRegression {
    fn forecast(&self, horizon: usize) -> Result<ForecastResult> {
        let mut points = Vec::with_capacity(horizon);
        for step in 0..horizon {
            let drivers = self.drivers_for(step);
            let predicted = self
                .coefficients
                .predict(drivers.gdp_growth, drivers.it_growth, drivers.kdem_investment)
                .max(0.0);
            let half_width = Z_95 * self.standard_error * (1.0 + step as f64 * CI_WIDENING).sqrt();

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{EconomicFactor, HistoricalObservation};
    use approx::assert_relative_eq;

    fn drivers(gdp_growth: f64, it_growth: f64, kdem_investment: f64) -> FutureDrivers {
        FutureDrivers {
            year: 2025,
            gdp_growth,
            it_growth,
            kdem_investment,
        }
    }

    fn history(rows: &[(f64, f64, f64, f64)]) -> HistoricalData {
        let observations = rows
            .iter()
            .enumerate()
            .map(|(i, &(gap, ..))| HistoricalObservation {
                year: 2020 + i as i32,
                gap_percent: gap,
                demand: 1_000,
                supply: 700,
            })
            .collect();
        let factors = rows
            .iter()
            .enumerate()
            .map(|(i, &(_, gdp_growth, it_growth, kdem_investment))| EconomicFactor {
                year: 2020 + i as i32,
                gdp_growth,
                it_growth,
                kdem_investment,
            })
            .collect();
        HistoricalData::new(observations, factors).unwrap()
    }

    #[test]
    fn test_requires_future_drivers() {
        assert!(matches!(
            EconomicRegression::new(Vec::new()),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_driver_years_must_follow_history() {
        let stale = EconomicRegression::new(vec![FutureDrivers {
            year: 2024,
            ..drivers(7.0, 12.0, 850.0)
        }])
        .unwrap();
        assert!(matches!(
            stale.train(&HistoricalData::reference()),
            Err(ForecastError::ValidationError(_))
        ));

        let skipped = EconomicRegression::new(vec![
            drivers(7.0, 12.0, 850.0),
            FutureDrivers {
                year: 2027,
                ..drivers(7.0, 12.0, 850.0)
            },
        ])
        .unwrap();
        assert!(skipped.train(&HistoricalData::reference()).is_err());
    }

    #[test]
    fn test_reference_fit() {
        let model = EconomicRegression::new(vec![drivers(7.0, 12.0, 850.0)]).unwrap();
        let trained = model.train(&HistoricalData::reference()).unwrap();
        let c = trained.coefficients();

        assert_relative_eq!(c.gdp_growth, -1.7005813953488371, epsilon = 1e-9);
        assert_relative_eq!(c.it_growth, -1.303030303030303, epsilon = 1e-9);
        assert_relative_eq!(c.kdem_investment, -0.01794409377817854, epsilon = 1e-9);
        assert_relative_eq!(c.intercept, 65.5113784504512, epsilon = 1e-8);
        assert_relative_eq!(trained.standard_error(), 9.581179675231198, epsilon = 1e-8);

        let forecast = trained.forecast(6).unwrap();
        assert_relative_eq!(forecast.values()[0], 22.718, epsilon = 1e-3);
    }

    #[test]
    fn test_last_drivers_repeat() {
        let model = EconomicRegression::new(vec![
            drivers(8.5, 18.0, 1200.0),
            FutureDrivers {
                year: 2026,
                ..drivers(5.5, 6.0, 500.0)
            },
        ])
        .unwrap();
        let forecast = model
            .train(&HistoricalData::reference())
            .unwrap()
            .forecast(4)
            .unwrap();
        let values = forecast.values();

        assert!(values[0] < values[1]);
        assert_eq!(values[1], values[2]);
        assert_eq!(values[2], values[3]);
    }

    #[test]
    fn test_band_widens_with_horizon() {
        let model = EconomicRegression::new(vec![drivers(7.0, 12.0, 850.0)]).unwrap();
        let trained = model.train(&HistoricalData::reference()).unwrap();
        let widths = trained.forecast(6).unwrap().interval_widths();

        for pair in widths.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        assert_relative_eq!(widths[0], 2.0 * 1.96 * trained.standard_error(), epsilon = 1e-9);
    }

    #[test]
    fn test_constant_drivers_collapse_to_mean() {
        let data = history(&[
            (30.0, 5.0, 10.0, 400.0),
            (28.0, 5.0, 10.0, 400.0),
            (26.0, 5.0, 10.0, 400.0),
        ]);
        let model = EconomicRegression::new(vec![FutureDrivers {
            year: 2023,
            ..drivers(9.0, 20.0, 900.0)
        }])
        .unwrap();
        let trained = model.train(&data).unwrap();

        assert_eq!(trained.coefficients().gdp_growth, 0.0);
        assert_eq!(trained.coefficients().it_growth, 0.0);
        assert_eq!(trained.coefficients().kdem_investment, 0.0);
        // Too few observations for four parameters
        assert_eq!(trained.standard_error(), 0.0);

        let forecast = trained.forecast(2).unwrap();
        assert_relative_eq!(forecast.values()[0], 28.0, epsilon = 1e-12);
    }

    #[test]
    fn test_predictions_floored_at_zero() {
        let model = EconomicRegression::new(vec![drivers(50.0, 100.0, 10_000.0)]).unwrap();
        let forecast = model
            .train(&HistoricalData::reference())
            .unwrap()
            .forecast(3)
            .unwrap();
        assert!(forecast.values().iter().all(|v| *v == 0.0));
    }
}
