//! Pool trait for SQL connection pools

use crate::error::Result;
use crate::record::Record;
use crate::value::Value;
use async_trait::async_trait;

/// Result of a statement execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteResult {
    /// Number of rows affected by the statement
    pub rows_affected: u64,
}

/// Trait for SQL connection pools.
///
/// This is the seam between the mapper and a concrete driver. Statements
/// use positional `$n` placeholders; `params[0]` binds `$1`.
#[async_trait]
pub trait Pool: Send + Sync {
    /// Execute a statement and return the number of affected rows.
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecuteResult>;

    /// Run a query and return every row it produced, columns in select order.
    async fn fetch_rows(&self, sql: &str, params: Vec<Value>) -> Result<Vec<Record>>;
}

#[async_trait]
impl<P: Pool + ?Sized> Pool for &P {
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecuteResult> {
        (**self).execute(sql, params).await
    }

    async fn fetch_rows(&self, sql: &str, params: Vec<Value>) -> Result<Vec<Record>> {
        (**self).fetch_rows(sql, params).await
    }
}

#[async_trait]
impl<P: Pool + ?Sized> Pool for std::sync::Arc<P> {
    async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<ExecuteResult> {
        (**self).execute(sql, params).await
    }

    async fn fetch_rows(&self, sql: &str, params: Vec<Value>) -> Result<Vec<Record>> {
        (**self).fetch_rows(sql, params).await
    }
}
