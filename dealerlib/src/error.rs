//! Single error type for the public API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DealerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Corrupt timestamp: {0}")]
    CorruptTimestamp(String),

    #[error("Invalid vehicle: {0}")]
    InvalidVehicle(String),

    #[error("Empty inventory: the lot has no vehicles")]
    EmptyInventory,
}

pub type Result<T> = std::result::Result<T, DealerError>;
