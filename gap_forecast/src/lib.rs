//! # Gap Forecast
//!
//! Scenario forecasting of workforce skill gaps.
//!
//! ## Features
//!
//! - Validated annual history of gap, demand, supply and economic drivers
//! - Three forecasters: an ARIMA-like model, Holt linear smoothing and an
//!   economic-driver regression
//! - An ensemble engine that projects gap, demand and supply under the
//!   optimistic, baseline and pessimistic scenarios
//! - Hold-out backtesting with RMSE, MAE and R²
//! - CSV loading, JSON configuration and JSON export
//!
//! ## Quick Start
//!
//! ```rust
//! use gap_forecast::{HistoricalData, Scenario, ScenarioEngine};
//!
//! let engine = ScenarioEngine::new(HistoricalData::reference());
//! let forecasts = engine.generate_all()?;
//!
//! assert_eq!(forecasts.len(), 3);
//! assert_eq!(forecasts[0].scenario, Scenario::Optimistic);
//! assert_eq!(forecasts[0].forecasts[0].year, 2025);
//! # Ok::<(), gap_forecast::ForecastError>(())
//! ```

pub mod cache;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;
pub mod export;
pub mod metrics;
pub mod models;
pub mod projection;
pub mod scenarios;

// Re-export commonly used types
pub use crate::cache::ForecastCache;
pub use crate::config::EngineConfig;
pub use crate::data::{DataLoader, EconomicFactor, HistoricalData, HistoricalObservation};
pub use crate::engine::{EnsembleForecast, ScenarioEngine};
pub use crate::error::ForecastError;
pub use crate::metrics::ModelAccuracy;
pub use crate::models::{ForecastModel, ForecastPoint, ForecastResult, TrainedForecastModel};
pub use crate::projection::{ProjectedYear, ScenarioForecast};
pub use crate::scenarios::{Scenario, ScenarioAssumptions};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
