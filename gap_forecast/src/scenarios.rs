//! The three fixed what-if scenarios and their assumptions

use crate::models::FutureDrivers;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named what-if scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Optimistic,
    Baseline,
    Pessimistic,
}

impl Scenario {
    /// Every scenario, in reporting order
    pub const ALL: [Scenario; 3] = [Scenario::Optimistic, Scenario::Baseline, Scenario::Pessimistic];

    pub fn all() -> [Scenario; 3] {
        Self::ALL
    }

    /// Preset assumptions for this scenario
    pub fn assumptions(&self) -> ScenarioAssumptions {
        match self {
            Scenario::Optimistic => ScenarioAssumptions::OPTIMISTIC,
            Scenario::Baseline => ScenarioAssumptions::BASELINE,
            Scenario::Pessimistic => ScenarioAssumptions::PESSIMISTIC,
        }
    }

    /// Fraction of the ensemble gap removed per forecast step
    pub fn decay_rate(&self) -> f64 {
        match self {
            Scenario::Optimistic => 0.08,
            Scenario::Baseline => 0.05,
            Scenario::Pessimistic => 0.02,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Optimistic => "optimistic",
            Scenario::Baseline => "baseline",
            Scenario::Pessimistic => "pessimistic",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Economic and labour-market assumptions behind a scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAssumptions {
    /// Annual GDP growth, percent
    pub gdp_growth: f64,
    /// Annual IT-sector growth, percent
    pub it_growth: f64,
    /// Digital-economy investment
    pub kdem_investment: f64,
    /// Extra annual growth of graduate supply from training, percent
    pub training_capacity_increase_percent: f64,
    /// Annual growth of industry demand, percent
    pub industry_demand_growth_percent: f64,
}

impl ScenarioAssumptions {
    pub const OPTIMISTIC: ScenarioAssumptions = ScenarioAssumptions {
        gdp_growth: 8.5,
        it_growth: 18.0,
        kdem_investment: 1200.0,
        training_capacity_increase_percent: 25.0,
        industry_demand_growth_percent: 20.0,
    };

    pub const BASELINE: ScenarioAssumptions = ScenarioAssumptions {
        gdp_growth: 7.0,
        it_growth: 12.0,
        kdem_investment: 850.0,
        training_capacity_increase_percent: 15.0,
        industry_demand_growth_percent: 12.0,
    };

    pub const PESSIMISTIC: ScenarioAssumptions = ScenarioAssumptions {
        gdp_growth: 5.5,
        it_growth: 6.0,
        kdem_investment: 500.0,
        training_capacity_increase_percent: 5.0,
        industry_demand_growth_percent: 6.0,
    };

    /// Regression drivers for a forecast year under these assumptions
    pub fn drivers(&self, year: i32) -> FutureDrivers {
        FutureDrivers {
            year,
            gdp_growth: self.gdp_growth,
            it_growth: self.it_growth,
            kdem_investment: self.kdem_investment,
        }
    }

    /// Annual supply growth: demand growth plus added training capacity
    pub fn supply_growth_percent(&self) -> f64 {
        self.industry_demand_growth_percent + self.training_capacity_increase_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Scenario::Optimistic, 8.5, 18.0, 1200.0, 25.0, 20.0, 0.08)]
    #[case(Scenario::Baseline, 7.0, 12.0, 850.0, 15.0, 12.0, 0.05)]
    #[case(Scenario::Pessimistic, 5.5, 6.0, 500.0, 5.0, 6.0, 0.02)]
    fn test_presets(
        #[case] scenario: Scenario,
        #[case] gdp: f64,
        #[case] it: f64,
        #[case] kdem: f64,
        #[case] training: f64,
        #[case] demand: f64,
        #[case] decay: f64,
    ) {
        let a = scenario.assumptions();
        assert_eq!(a.gdp_growth, gdp);
        assert_eq!(a.it_growth, it);
        assert_eq!(a.kdem_investment, kdem);
        assert_eq!(a.training_capacity_increase_percent, training);
        assert_eq!(a.industry_demand_growth_percent, demand);
        assert_eq!(scenario.decay_rate(), decay);
    }

    #[test]
    fn test_order_and_names() {
        let names: Vec<String> = Scenario::all().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["optimistic", "baseline", "pessimistic"]);
    }

    #[test]
    fn test_serialized_forms() {
        assert_eq!(serde_json::to_string(&Scenario::Baseline).unwrap(), "\"baseline\"");

        let json = serde_json::to_value(ScenarioAssumptions::BASELINE).unwrap();
        assert_eq!(json["trainingCapacityIncreasePercent"], 15.0);
        assert_eq!(json["kdemInvestment"], 850.0);
    }

    #[test]
    fn test_drivers() {
        let drivers = ScenarioAssumptions::OPTIMISTIC.drivers(2027);
        assert_eq!(drivers.year, 2027);
        assert_eq!(drivers.kdem_investment, 1200.0);
        assert_eq!(ScenarioAssumptions::OPTIMISTIC.supply_growth_percent(), 45.0);
    }
}
