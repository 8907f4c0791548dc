use gap_forecast::data::{DataLoader, HistoricalData};
use gap_forecast::{ForecastError, ScenarioEngine};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "year,gap_percent,demand,supply,gdp_growth,it_growth,kdem_investment";

fn reference_csv() -> String {
    let mut csv = String::from(HEADER);
    csv.push('\n');
    for (observation, factor) in HistoricalData::reference()
        .observations()
        .iter()
        .zip(HistoricalData::reference().factors())
    {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            observation.year,
            observation.gap_percent,
            observation.demand,
            observation.supply,
            factor.gdp_growth,
            factor.it_growth,
            factor.kdem_investment
        ));
    }
    csv
}

#[test]
fn test_data_loader_from_csv() {
    // Create a temporary CSV file
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", reference_csv()).unwrap();

    let data = DataLoader::from_csv(file.path()).unwrap();

    assert_eq!(data.len(), 5);
    assert!(!data.is_empty());
    assert_eq!(data, HistoricalData::reference());
}

#[test]
fn test_loaded_history_forecasts_like_reference() {
    let data = DataLoader::from_reader(reference_csv().as_bytes()).unwrap();

    let loaded = ScenarioEngine::new(data).generate_all().unwrap();
    let reference = ScenarioEngine::reference().generate_all().unwrap();
    assert_eq!(loaded, reference);
}

#[test]
fn test_csv_fields_are_trimmed() {
    let csv = format!("{}\n2020, 35.0, 120000, 78000, 4.0, 8.0, 300\n", HEADER);
    let data = DataLoader::from_reader(csv.as_bytes()).unwrap();

    assert_eq!(data.gaps(), vec![35.0]);
    assert_eq!(data.last_supply(), 78_000);
}

#[test]
fn test_malformed_csv_row() {
    let csv = format!("{}\n2020,not-a-number,120000,78000,4.0,8.0,300\n", HEADER);
    let result = DataLoader::from_reader(csv.as_bytes());
    assert!(matches!(result, Err(ForecastError::CsvError(_))));
}

#[test]
fn test_non_finite_cell_rejected() {
    let csv = format!(
        "{}\n2020,35.0,120000,78000,4.0,8.0,300\n2021,NaN,135000,90450,6.5,10.5,420\n",
        HEADER
    );
    match DataLoader::from_reader(csv.as_bytes()) {
        Err(ForecastError::DataError(message)) => {
            assert!(message.contains("gap_percent"), "{}", message);
            assert!(message.contains("2021"), "{}", message);
        }
        other => panic!("expected DataError, got {:?}", other),
    }

    let csv = format!("{}\n2020,35.0,120000,78000,inf,8.0,300\n", HEADER);
    assert!(matches!(
        DataLoader::from_reader(csv.as_bytes()),
        Err(ForecastError::DataError(_))
    ));
}

#[test]
fn test_missing_column() {
    let csv = "year,gap_percent,demand,supply\n2020,35.0,120000,78000\n";
    let result = DataLoader::from_reader(csv.as_bytes());
    assert!(matches!(result, Err(ForecastError::CsvError(_))));
}

#[test]
fn test_header_only_csv() {
    let result = DataLoader::from_reader(format!("{}\n", HEADER).as_bytes());
    assert!(matches!(
        result,
        Err(ForecastError::InsufficientHistory { needed: 1, got: 0, .. })
    ));
}

#[test]
fn test_gap_in_years_rejected() {
    let csv = format!(
        "{}\n2020,35.0,120000,78000,4.0,8.0,300\n2022,30.0,150000,105000,7.0,12.0,550\n",
        HEADER
    );
    let result = DataLoader::from_reader(csv.as_bytes());
    assert!(matches!(result, Err(ForecastError::DataError(_))));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = DataLoader::from_csv(dir.path().join("missing.csv"));
    assert!(matches!(result, Err(ForecastError::IoError(_))));
}

#[test]
fn test_history_accessors() {
    let data = HistoricalData::reference();

    assert_eq!(data.first_year(), 2020);
    assert_eq!(data.last_year(), 2024);
    assert_eq!(data.gaps(), vec![35.0, 33.0, 30.0, 32.0, 28.0]);
    assert_eq!(data.kdem_investment(), vec![300.0, 420.0, 550.0, 500.0, 700.0]);
    assert_eq!(data.last_demand(), 185_000);

    let head = data.head(3).unwrap();
    assert_eq!(head.last_year(), 2022);
    assert!(data.head(0).is_err());
    assert!(data.head(6).is_err());
}
