//! FromRow trait for mapping result rows to Rust structs

use crate::error::Result;
use crate::value::Value;

/// A result row that can be queried by column name.
///
/// This trait abstracts over row implementations, allowing the same
/// `FromRow` implementations to work with any [`Pool`](crate::Pool).
pub trait Row {
    /// Get a value from the row by column name as a dynamic Value.
    ///
    /// Returns an error if the column doesn't exist.
    fn get_value(&self, column: &str) -> Result<Value>;
}

/// Extension trait for typed access to row values.
pub trait RowExt: Row {
    /// Get a typed value from the row by column name.
    fn get<T: crate::FromValue>(&self, column: &str) -> Result<T> {
        let value = self.get_value(column)?;
        T::from_value(value)
    }
}

impl<R: Row> RowExt for R {}

/// Trait for types that can be constructed from a result row.
///
/// This trait is typically implemented via the `#[derive(FromRow)]` macro,
/// which reads each public field from the column of the same snake_case name.
///
/// # Manual Implementation
///
/// ```ignore
/// use ledger_sql::{FromRow, Row, RowExt, Result};
///
/// pub struct User {
///     pub id: i64,
///     pub email: String,
/// }
///
/// impl FromRow for User {
///     fn from_row<R: Row>(row: &R) -> Result<Self> {
///         Ok(Self {
///             id: row.get("id")?,
///             email: row.get("email")?,
///         })
///     }
///
///     fn column_names() -> Vec<String> {
///         vec!["id".into(), "email".into()]
///     }
/// }
/// ```
pub trait FromRow: Sized {
    /// Construct an instance of this type from a result row.
    fn from_row<R: Row>(row: &R) -> Result<Self>;

    /// Get the column names that this type reads from, in declaration order.
    ///
    /// This is used for building SELECT column lists.
    fn column_names() -> Vec<String>;
}
