//! JSON export of scenario forecasts for the chart layer

use crate::error::Result;
use crate::projection::ScenarioForecast;

/// Serialize scenario forecasts as compact JSON
pub fn to_json(forecasts: &[ScenarioForecast]) -> Result<String> {
    Ok(serde_json::to_string(forecasts)?)
}

/// Serialize scenario forecasts as indented JSON
pub fn to_json_pretty(forecasts: &[ScenarioForecast]) -> Result<String> {
    Ok(serde_json::to_string_pretty(forecasts)?)
}

/// Parse scenario forecasts previously written by [`to_json`]
pub fn from_json(json: &str) -> Result<Vec<ScenarioForecast>> {
    Ok(serde_json::from_str(json)?)
}
