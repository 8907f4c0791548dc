//! # Gap Math
//!
//! Numeric building blocks for skill-gap forecasting.
//! This crate provides the small, pure calculations the forecasting models
//! are assembled from: differencing, descriptive statistics, smoothing state
//! and compound growth.

use thiserror::Error;

pub mod differencing;
pub mod growth;
pub mod smoothing;
pub mod statistics;

pub use differencing::difference;
pub use growth::{compound_growth, round_to};
pub use smoothing::DoubleExponentialSmoothing;

/// Errors that can occur in forecasting math
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for forecasting math operations
pub type Result<T> = std::result::Result<T, MathError>;
