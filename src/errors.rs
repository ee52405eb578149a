use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for store and service layers. Aggregation functions
/// are total over well-formed inputs and never produce errors of their own.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Entity not found: {0}")]
    NotFound(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, TrackerError>;

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        TrackerError::Storage(err.to_string())
    }
}
