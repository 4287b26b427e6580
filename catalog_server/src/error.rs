//! Store-level error type shared by the services.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Rejected payload or a write the database refused.
    #[error("{0}")]
    Persistence(String),

    /// No connection could be checked out of the pool.
    #[error("database unavailable: {0}")]
    Unavailable(String),
}

impl From<diesel::result::Error> for StoreError {
    fn from(e: diesel::result::Error) -> Self {
        StoreError::Persistence(e.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Persistence(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
