use chrono::NaiveDate;
use thiserror::Error;

/// Error type that captures the fallible edges of the forecasting crate.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
