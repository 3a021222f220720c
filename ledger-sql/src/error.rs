//! Error types for ledger-sql

use thiserror::Error;

/// Result type alias for ledger-sql operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while mapping structs to SQL or reading rows back
#[derive(Error, Debug)]
pub enum Error {
    /// The input cannot be mapped (malformed field descriptors, bad identifiers)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Zero-filtering left no fields to extract
    #[error("No fields left after skipping zero values")]
    NoFields,

    /// Zero-filtering left nothing to insert
    #[error("No columns to insert")]
    NoColumnsToInsert,

    /// Column and value lists of an insert disagree.
    ///
    /// Reserved: the extractor yields columns and values in one pass, so
    /// [`create_insert_query`](crate::create_insert_query) cannot produce it.
    #[error("No values to insert (expected {expected} values)")]
    NoValuesToInsert { expected: usize },

    /// Zero-filtering left nothing to set in an update
    #[error("No fields to update")]
    NoFieldsToUpdate,

    /// Type conversion error
    #[error("Type conversion error: expected {expected}, got {actual}")]
    TypeConversion {
        expected: &'static str,
        actual: String,
    },

    /// Column not found in row
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Row width does not match the number of scan targets
    #[error("Column count mismatch: expected {expected}, got {actual}")]
    ColumnCount { expected: usize, actual: usize },

    /// Query execution error
    #[error("Query error: {0}")]
    Query(String),

    /// Error reported by the pool implementation
    #[error("Pool error: {0}")]
    Pool(String),
}
