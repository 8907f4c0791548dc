//! Engine configuration

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable settings of the scenario engine.
///
/// Every field has a default, so a JSON document only needs the fields it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of forecast years
    pub horizon: usize,
    /// Confidence level of the ARIMA band (0.90, 0.95 or 0.99)
    pub confidence_level: f64,
    /// Trailing years held out for the accuracy backtest
    pub holdout: usize,
    /// Lowest gap percentage a scenario may report
    pub gap_floor: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon: 6,
            confidence_level: 0.95,
            holdout: 2,
            gap_floor: 5.0,
        }
    }
}

impl EngineConfig {
    /// Parse a configuration from JSON and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    pub fn with_holdout(mut self, holdout: usize) -> Self {
        self.holdout = holdout;
        self
    }

    /// Check that the settings describe a runnable forecast
    pub fn validate(&self) -> Result<()> {
        if self.horizon == 0 {
            return Err(ForecastError::InvalidParameter(
                "Horizon must be at least one year".to_string(),
            ));
        }
        if self.holdout == 0 {
            return Err(ForecastError::InvalidParameter(
                "Backtest holdout must be at least one year".to_string(),
            ));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "Confidence level must be between 0 and 1, got {}",
                self.confidence_level
            )));
        }
        if !self.gap_floor.is_finite() || self.gap_floor < 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "Gap floor must be a non-negative number, got {}",
                self.gap_floor
            )));
        }
        Ok(())
    }
}
