//! Query builder for ledger-sql

use crate::error::{Error, Result};
use crate::traits::{ExecuteResult, FromRow, FromValue, Pool, ToValue};
use crate::value::Value;

/// A query builder that supports fluent parameter binding.
///
/// Values are bound in order: the first `bind` fills `$1`.
///
/// # Example
///
/// ```ignore
/// use ledger_sql::{Pool, Query};
///
/// async fn find_user(pool: &impl Pool, id: i64) -> ledger_sql::Result<Option<User>> {
///     Query::new("SELECT id, email FROM app.users WHERE id = $1")
///         .bind(id)
///         .fetch_optional(pool)
///         .await
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Query {
    sql: String,
    params: Vec<Value>,
}

impl Query {
    /// Create a new query with the given SQL.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    /// Bind a single value to the next placeholder.
    pub fn bind<T: ToValue>(mut self, value: T) -> Self {
        self.params.push(value.to_value());
        self
    }

    /// Bind multiple values to the following placeholders.
    pub fn bind_all<T: ToValue>(mut self, values: &[T]) -> Self {
        for value in values {
            self.params.push(value.to_value());
        }
        self
    }

    /// Bind already converted values, e.g. the output of
    /// [`create_update_params`](crate::create_update_params).
    pub fn bind_values(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.params.extend(values);
        self
    }

    /// Get the SQL string.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Get the bound parameters.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Take ownership of the parameters.
    pub fn into_params(self) -> Vec<Value> {
        self.params
    }

    /// Execute the statement and return the result.
    pub async fn execute<P: Pool>(self, pool: &P) -> Result<ExecuteResult> {
        pool.execute(&self.sql, self.params).await
    }

    /// Fetch all matching rows.
    pub async fn fetch_all<T: FromRow + Send, P: Pool>(self, pool: &P) -> Result<Vec<T>> {
        let rows = pool.fetch_rows(&self.sql, self.params).await?;
        rows.iter().map(T::from_row).collect()
    }

    /// Fetch a single optional row.
    pub async fn fetch_optional<T: FromRow + Send, P: Pool>(self, pool: &P) -> Result<Option<T>> {
        let rows = pool.fetch_rows(&self.sql, self.params).await?;
        rows.first().map(T::from_row).transpose()
    }

    /// Fetch exactly one row.
    pub async fn fetch_one<T: FromRow + Send, P: Pool>(self, pool: &P) -> Result<T> {
        self.fetch_optional(pool)
            .await?
            .ok_or_else(|| Error::Query("Expected one row, found none".to_string()))
    }

    /// Fetch a scalar value (first column of first row).
    pub async fn fetch_scalar<T: FromValue + Send, P: Pool>(self, pool: &P) -> Result<T> {
        let row = pool
            .fetch_rows(&self.sql, self.params)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::Query("Expected one row, found none".to_string()))?;
        let value = row
            .into_first()
            .ok_or_else(|| Error::Query("Expected at least one column".to_string()))?;
        T::from_value(value)
    }
}
