//! Historical skill-gap data and its loaders

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One year of observed skill-gap indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalObservation {
    pub year: i32,
    /// Unfilled share of demand, in percent
    pub gap_percent: f64,
    pub demand: u64,
    pub supply: u64,
}

/// One year of economic drivers, parallel to the observations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicFactor {
    pub year: i32,
    pub gdp_growth: f64,
    pub it_growth: f64,
    pub kdem_investment: f64,
}

/// Validated annual history: observations and economic factors for the same years
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalData {
    observations: Vec<HistoricalObservation>,
    factors: Vec<EconomicFactor>,
}

impl HistoricalData {
    /// Create a history from parallel observation and factor rows.
    ///
    /// Rows must cover the same consecutive years in ascending order.
    pub fn new(
        observations: Vec<HistoricalObservation>,
        factors: Vec<EconomicFactor>,
    ) -> Result<Self> {
        if observations.is_empty() {
            return Err(ForecastError::insufficient_history("historical data", 1, 0));
        }

        if observations.len() != factors.len() {
            return Err(ForecastError::DataError(format!(
                "Observation count ({}) doesn't match economic factor count ({})",
                observations.len(),
                factors.len()
            )));
        }

        for (observation, factor) in observations.iter().zip(factors.iter()) {
            if observation.year != factor.year {
                return Err(ForecastError::DataError(format!(
                    "Economic factor year {} doesn't match observation year {}",
                    factor.year, observation.year
                )));
            }
        }

        for (observation, factor) in observations.iter().zip(factors.iter()) {
            let values = [
                ("gap_percent", observation.gap_percent),
                ("gdp_growth", factor.gdp_growth),
                ("it_growth", factor.it_growth),
                ("kdem_investment", factor.kdem_investment),
            ];
            if let Some((column, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
                return Err(ForecastError::DataError(format!(
                    "Non-finite {} ({}) in year {}",
                    column, value, observation.year
                )));
            }
        }

        for pair in observations.windows(2) {
            if pair[1].year != pair[0].year + 1 {
                return Err(ForecastError::DataError(format!(
                    "Years must be consecutive and ascending, found {} after {}",
                    pair[1].year, pair[0].year
                )));
            }
        }

        Ok(Self {
            observations,
            factors,
        })
    }

    /// The five-year reference dataset (2020-2024) the dashboard ships with
    pub fn reference() -> Self {
        const ROWS: [(i32, f64, u64, u64, f64, f64, f64); 5] = [
            (2020, 35.0, 120_000, 78_000, 4.0, 8.0, 300.0),
            (2021, 33.0, 135_000, 90_450, 6.5, 10.5, 420.0),
            (2022, 30.0, 150_000, 105_000, 7.0, 12.0, 550.0),
            (2023, 32.0, 168_000, 114_240, 6.8, 11.0, 500.0),
            (2024, 28.0, 185_000, 133_200, 7.2, 13.5, 700.0),
        ];

        let observations = ROWS
            .iter()
            .map(|&(year, gap_percent, demand, supply, ..)| HistoricalObservation {
                year,
                gap_percent,
                demand,
                supply,
            })
            .collect();
        let factors = ROWS
            .iter()
            .map(|&(year, _, _, _, gdp_growth, it_growth, kdem_investment)| EconomicFactor {
                year,
                gdp_growth,
                it_growth,
                kdem_investment,
            })
            .collect();

        Self {
            observations,
            factors,
        }
    }

    /// Keep only the first `len` years
    pub fn head(&self, len: usize) -> Result<Self> {
        if len == 0 || len > self.len() {
            return Err(ForecastError::ValidationError(format!(
                "Cannot take {} of {} historical years",
                len,
                self.len()
            )));
        }

        Ok(Self {
            observations: self.observations[..len].to_vec(),
            factors: self.factors[..len].to_vec(),
        })
    }

    pub fn observations(&self) -> &[HistoricalObservation] {
        &self.observations
    }

    pub fn factors(&self) -> &[EconomicFactor] {
        &self.factors
    }

    /// Number of historical years
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the history has no years
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Gap percentages in year order
    pub fn gaps(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.gap_percent).collect()
    }

    pub fn gdp_growth(&self) -> Vec<f64> {
        self.factors.iter().map(|f| f.gdp_growth).collect()
    }

    pub fn it_growth(&self) -> Vec<f64> {
        self.factors.iter().map(|f| f.it_growth).collect()
    }

    pub fn kdem_investment(&self) -> Vec<f64> {
        self.factors.iter().map(|f| f.kdem_investment).collect()
    }

    fn last_observation(&self) -> &HistoricalObservation {
        // Construction guarantees at least one row
        &self.observations[self.observations.len() - 1]
    }

    pub fn first_year(&self) -> i32 {
        self.observations[0].year
    }

    pub fn last_year(&self) -> i32 {
        self.last_observation().year
    }

    pub fn last_demand(&self) -> u64 {
        self.last_observation().demand
    }

    pub fn last_supply(&self) -> u64 {
        self.last_observation().supply
    }
}

/// A flat CSV row holding one year of observation and factor columns
#[derive(Debug, Deserialize)]
struct HistoryRecord {
    year: i32,
    gap_percent: f64,
    demand: u64,
    supply: u64,
    gdp_growth: f64,
    it_growth: f64,
    kdem_investment: f64,
}

/// Data loader for historical skill-gap data
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load history from a CSV file with the header
    /// `year,gap_percent,demand,supply,gdp_growth,it_growth,kdem_investment`
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<HistoricalData> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load history from any CSV source
    pub fn from_reader<R: Read>(reader: R) -> Result<HistoricalData> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut observations = Vec::new();
        let mut factors = Vec::new();

        for record in csv_reader.deserialize() {
            let record: HistoryRecord = record?;
            observations.push(HistoricalObservation {
                year: record.year,
                gap_percent: record.gap_percent,
                demand: record.demand,
                supply: record.supply,
            });
            factors.push(EconomicFactor {
                year: record.year,
                gdp_growth: record.gdp_growth,
                it_growth: record.it_growth,
                kdem_investment: record.kdem_investment,
            });
        }

        tracing::debug!(rows = observations.len(), "loaded historical csv");
        HistoricalData::new(observations, factors)
    }
}
