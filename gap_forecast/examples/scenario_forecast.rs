use gap_forecast::{DataLoader, ScenarioEngine};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    // Load data from CSV, or the path given on the command line
    let csv_path = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("examples")
            .join("csv")
            .join("history.csv")
    });

    println!("Loading history from: {}", csv_path.display());
    let history = DataLoader::from_csv(&csv_path)?;
    println!(
        "Loaded {} years ({}-{})\n",
        history.len(),
        history.first_year(),
        history.last_year()
    );

    let engine = ScenarioEngine::new(history);
    for result in engine.generate_scenarios() {
        let forecast = match result {
            Ok(forecast) => forecast,
            Err(err) => {
                eprintln!("Scenario failed: {}", err);
                continue;
            }
        };

        println!("{} scenario", forecast.scenario);
        println!("{:<6} {:>7} {:>10} {:>10} {:>16}", "Year", "Gap %", "Demand", "Supply", "Band");
        for year in &forecast.forecasts {
            println!(
                "{:<6} {:>7.1} {:>10} {:>10} {:>7.1} - {:<7.1}",
                year.year,
                year.gap,
                year.demand,
                year.supply,
                year.confidence_lower,
                year.confidence_upper
            );
        }
        println!("{}", forecast.model_accuracy);
    }

    Ok(())
}
