use std::io;

use cashflow_domain::{MonthKeyError, UnknownValueError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("cash item not found: {0}")]
    ItemNotFound(Uuid),
    #[error("cash item source failed: {0}")]
    Source(#[from] SourceError),
}

impl From<MonthKeyError> for CoreError {
    fn from(err: MonthKeyError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

impl From<UnknownValueError> for CoreError {
    fn from(err: UnknownValueError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

/// Failures surfaced by a [`crate::CashItemSource`] backend. The core never
/// catches or retries these; they reach the caller unchanged.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("serialization error: {0}")]
    Serde(String),
    #[error("backend error: {0}")]
    Backend(String),
}
