//! Error types for the gap_forecast crate

use thiserror::Error;

/// Custom error types for the gap_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The history is too short for a model's lag structure
    #[error("Insufficient history for {model}: need at least {needed} observations, got {got}")]
    InsufficientHistory {
        model: String,
        needed: usize,
        got: usize,
    },

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// Error related to parameter validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from mathematical operations
    #[error("Math error: {0}")]
    MathError(#[from] gap_math::MathError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(String),

    /// Error from JSON (de)serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ForecastError {
    pub(crate) fn insufficient_history(model: &str, needed: usize, got: usize) -> Self {
        ForecastError::InsufficientHistory {
            model: model.to_string(),
            needed,
            got,
        }
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<csv::Error> for ForecastError {
    fn from(err: csv::Error) -> Self {
        ForecastError::CsvError(err.to_string())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::SerializationError(err.to_string())
    }
}
