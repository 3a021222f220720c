//! Error types for ledger-store

use thiserror::Error;

/// Result type alias for ledger-store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors returned by repositories and configuration loading
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Mapping error: {0}")]
    Sql(#[from] ledger_sql::Error),

    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StoreError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        StoreError::Validation {
            field,
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for StoreError {
    fn from(err: config::ConfigError) -> Self {
        StoreError::ConfigError(err.to_string())
    }
}
