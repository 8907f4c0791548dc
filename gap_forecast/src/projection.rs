//! Per-year scenario projections reported to the dashboard

use crate::metrics::ModelAccuracy;
use crate::scenarios::{Scenario, ScenarioAssumptions};
use gap_math::{compound_growth, round_to};
use serde::{Deserialize, Serialize};

/// One projected year of a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectedYear {
    pub year: i32,
    /// Scenario-adjusted skill gap in percent, one decimal
    pub gap: f64,
    pub demand: u64,
    pub supply: u64,
    /// Mean of the sub-model lower bounds; not recentred on `gap`
    pub confidence_lower: f64,
    /// Mean of the sub-model upper bounds; not recentred on `gap`
    pub confidence_upper: f64,
}

/// Complete forecast of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioForecast {
    pub scenario: Scenario,
    pub assumptions: ScenarioAssumptions,
    /// Projected years in ascending order
    pub forecasts: Vec<ProjectedYear>,
    pub model_accuracy: ModelAccuracy,
}

impl ScenarioForecast {
    /// Projection for the last forecast year
    pub fn final_year(&self) -> Option<&ProjectedYear> {
        self.forecasts.last()
    }
}

/// Apply scenario decay to an ensemble gap at a 0-indexed step, then floor and round
pub fn adjust_gap(ensemble_gap: f64, step: usize, decay_rate: f64, floor: f64) -> f64 {
    let adjusted = ensemble_gap * (1.0 - step as f64 * decay_rate);
    round_to(adjusted.max(floor), 1)
}

/// Demand after `step + 1` years of industry demand growth
pub fn project_demand(last_demand: u64, assumptions: &ScenarioAssumptions, step: usize) -> u64 {
    grow(last_demand, assumptions.industry_demand_growth_percent, step)
}

/// Supply after `step + 1` years of demand growth plus added training capacity
pub fn project_supply(last_supply: u64, assumptions: &ScenarioAssumptions, step: usize) -> u64 {
    grow(last_supply, assumptions.supply_growth_percent(), step)
}

fn grow(base: u64, rate_percent: f64, step: usize) -> u64 {
    let periods = u32::try_from(step + 1).unwrap_or(u32::MAX);
    compound_growth(base as f64, rate_percent, periods).round().max(0.0) as u64
}
