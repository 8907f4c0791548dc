//! Writes the reference scenario forecasts as the JSON document the dashboard charts.
//!
//! Usage: `cargo run --example scenario_report [config.json]`

use skillgap_workspace::forecast::export::to_json_pretty;
use skillgap_workspace::forecast::{EngineConfig, ForecastCache, HistoricalData, ScenarioEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };

    let engine = ScenarioEngine::with_config(HistoricalData::reference(), config)?;
    let mut cache = ForecastCache::new();
    let forecasts = engine.generate_cached(&mut cache)?;

    for forecast in &forecasts {
        if let Some(last) = forecast.final_year() {
            eprintln!("{:<12} {} gap {:.1}%", forecast.scenario.name(), last.year, last.gap);
        }
    }

    println!("{}", to_json_pretty(&forecasts)?);
    Ok(())
}
