//! Ensemble scenario engine
//!
//! Runs the ARIMA-like, Holt and regression forecasters on the same history,
//! averages their predictions and confidence bands year by year, applies each
//! scenario's decay and projects demand and supply by compound growth.
//!
//! The engine holds only immutable inputs, so one instance can serve
//! concurrent callers and repeated calls return identical results.

use crate::cache::ForecastCache;
use crate::config::EngineConfig;
use crate::data::HistoricalData;
use crate::error::{ForecastError, Result};
use crate::metrics::{backtest, ModelAccuracy};
use crate::models::{
    forecast_year, ArimaModel, EconomicRegression, ForecastModel, ForecastPoint, ForecastResult,
    HoltLinear, TrainedForecastModel,
};
use crate::projection::{adjust_gap, project_demand, project_supply, ProjectedYear, ScenarioForecast};
use crate::scenarios::Scenario;
use serde::Serialize;

/// Decimal places of the reported accuracy metrics
const ACCURACY_DECIMALS: u32 = 2;

/// Un-adjusted ensemble of the three sub-models for one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnsembleForecast {
    pub scenario: Scenario,
    /// Sub-model forecasts: ARIMA, Holt, regression
    pub members: Vec<ForecastResult>,
    /// Per-year mean prediction with the mean of the member bands
    pub points: Vec<ForecastPoint>,
}

impl EnsembleForecast {
    fn combine(scenario: Scenario, members: Vec<ForecastResult>) -> Result<Self> {
        let horizon = members.first().map(ForecastResult::horizons).unwrap_or(0);
        if members.iter().any(|m| m.horizons() != horizon) {
            return Err(ForecastError::ValidationError(
                "Ensemble members must forecast the same number of years".to_string(),
            ));
        }

        let count = members.len() as f64;
        let points = (0..horizon)
            .map(|step| {
                let column = || members.iter().map(move |m| m.points()[step]);
                ForecastPoint {
                    year: members[0].points()[step].year,
                    predicted: column().map(|p| p.predicted).sum::<f64>() / count,
                    ci_lower: column().map(|p| p.ci_lower).sum::<f64>() / count,
                    ci_upper: column().map(|p| p.ci_upper).sum::<f64>() / count,
                }
            })
            .collect();

        Ok(Self {
            scenario,
            members,
            points,
        })
    }

    /// Forecast of the named member, if present
    pub fn member(&self, name: &str) -> Option<&ForecastResult> {
        self.members.iter().find(|m| m.model() == name)
    }
}

/// Scenario forecasting engine over a fixed history
#[derive(Debug, Clone)]
pub struct ScenarioEngine {
    history: HistoricalData,
    config: EngineConfig,
    arima: ArimaModel,
    holt: HoltLinear,
}

impl ScenarioEngine {
    /// Create an engine with the default configuration
    pub fn new(history: HistoricalData) -> Self {
        let config = EngineConfig::default();
        Self {
            arima: ArimaModel::default().with_confidence_level(config.confidence_level),
            holt: HoltLinear::default(),
            history,
            config,
        }
    }

    /// Create an engine with a validated configuration
    pub fn with_config(history: HistoricalData, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            arima: ArimaModel::default().with_confidence_level(config.confidence_level),
            holt: HoltLinear::default(),
            history,
            config,
        })
    }

    /// Engine over the built-in reference history
    pub fn reference() -> Self {
        Self::new(HistoricalData::reference())
    }

    pub fn history(&self) -> &HistoricalData {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the three sub-models for a scenario and average them
    pub fn ensemble(&self, scenario: Scenario) -> Result<EnsembleForecast> {
        let horizon = self.config.horizon;
        let assumptions = scenario.assumptions();
        let last_year = self.history.last_year();

        let drivers = (0..horizon)
            .map(|step| assumptions.drivers(forecast_year(last_year, step)))
            .collect();
        let regression = EconomicRegression::new(drivers)?;

        let members = vec![
            self.arima.train(&self.history)?.forecast(horizon)?,
            self.holt.train(&self.history)?.forecast(horizon)?,
            regression.train(&self.history)?.forecast(horizon)?,
        ];

        EnsembleForecast::combine(scenario, members)
    }

    /// Backtested accuracy of the ARIMA sub-model on the held-out tail
    pub fn accuracy(&self) -> Result<ModelAccuracy> {
        Ok(backtest(&self.arima, &self.history, self.config.holdout)?.rounded(ACCURACY_DECIMALS))
    }

    /// Forecast one scenario
    pub fn generate_scenario(&self, scenario: Scenario) -> Result<ScenarioForecast> {
        let assumptions = scenario.assumptions();
        let ensemble = self.ensemble(scenario)?;
        let model_accuracy = self.accuracy()?;

        let forecasts = ensemble
            .points
            .iter()
            .enumerate()
            .map(|(step, point)| ProjectedYear {
                year: point.year,
                gap: adjust_gap(
                    point.predicted,
                    step,
                    scenario.decay_rate(),
                    self.config.gap_floor,
                ),
                demand: project_demand(self.history.last_demand(), &assumptions, step),
                supply: project_supply(self.history.last_supply(), &assumptions, step),
                confidence_lower: point.ci_lower,
                confidence_upper: point.ci_upper,
            })
            .collect();

        tracing::info!(%scenario, horizon = self.config.horizon, "generated scenario forecast");

        Ok(ScenarioForecast {
            scenario,
            assumptions,
            forecasts,
            model_accuracy,
        })
    }

    /// Forecast every scenario in reporting order.
    ///
    /// Always returns one entry per scenario; a failure is reported in that
    /// scenario's slot without affecting the others.
    pub fn generate_scenarios(&self) -> Vec<Result<ScenarioForecast>> {
        Scenario::all()
            .iter()
            .map(|&scenario| {
                let result = self.generate_scenario(scenario);
                if let Err(err) = &result {
                    tracing::warn!(%scenario, error = %err, "scenario forecast failed");
                }
                result
            })
            .collect()
    }

    /// Forecast every scenario, failing on the first error
    pub fn generate_all(&self) -> Result<Vec<ScenarioForecast>> {
        self.generate_scenarios().into_iter().collect()
    }

    /// Like [`generate_all`](Self::generate_all), memoized in a caller-owned cache
    pub fn generate_cached(&self, cache: &mut ForecastCache) -> Result<Vec<ScenarioForecast>> {
        let key = ForecastCache::key(&self.history, &self.config)?;
        if let Some(forecasts) = cache.get(&key) {
            tracing::debug!("scenario forecasts served from cache");
            return Ok(forecasts);
        }

        let forecasts = self.generate_all()?;
        cache.insert(key, forecasts.clone());
        Ok(forecasts)
    }
}
