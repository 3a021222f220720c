//! Repositories over a [`Pool`]
//!
//! Every repository takes the schema from [`StoreConfig`] at construction
//! and builds its statements through the field mapper. Rows owned by a user
//! are always addressed together with the owner's id.

mod account;
mod category;
mod transaction;
mod user;

pub use account::AccountRepository;
pub use category::CategoryRepository;
pub use transaction::TransactionRepository;
pub use user::UserRepository;

use ledger_sql::{create_insert_query, create_update_params, Fields, FromRow, Pool, Query};
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// Table handle shared by the repositories
#[derive(Debug, Clone)]
pub(crate) struct Table<P> {
    pool: P,
    schema: String,
    name: &'static str,
    entity: &'static str,
}

impl<P: Pool> Table<P> {
    pub(crate) fn new(
        config: &StoreConfig,
        pool: P,
        name: &'static str,
        entity: &'static str,
    ) -> Result<Self> {
        // the schema is spliced into every statement
        config.validate()?;
        Ok(Self {
            pool,
            schema: config.schema().to_string(),
            name,
            entity,
        })
    }

    pub(crate) fn pool(&self) -> &P {
        &self.pool
    }

    /// `SELECT <columns of T> FROM schema.table WHERE <filter>`
    pub(crate) fn select<T: FromRow>(&self, filter: &str) -> String {
        format!(
            "SELECT {} FROM {}.{} WHERE {}",
            T::column_names().join(", "),
            self.schema,
            self.name,
            filter
        )
    }

    /// Insert the non-zero fields of `request` and read the stored row back.
    pub(crate) async fn insert<I, O>(&self, request: &I) -> Result<O>
    where
        I: Fields,
        O: Fields + Default,
    {
        let mut row = O::default();
        let query = create_insert_query(request, &mut row, self.name, &self.schema)?;
        debug!(table = self.name, columns = %query.columns, "inserting row");
        query.fetch_into(&self.pool).await?;
        Ok(row)
    }

    /// Update the non-zero fields of `request` on the row with `id`,
    /// optionally requiring it to belong to `owner`.
    pub(crate) async fn update<U: Fields>(
        &self,
        request: &U,
        id: i64,
        owner: Option<i64>,
    ) -> Result<()> {
        let params = create_update_params(request)?;
        let mut sql = format!(
            "UPDATE {}.{} SET {} WHERE id = ${}",
            self.schema, self.name, params.set_clause, params.next_param_index
        );
        let mut query_params = params.values;
        query_params.push(id.into());
        if let Some(owner) = owner {
            sql.push_str(&format!(" AND user_id = ${}", params.next_param_index + 1));
            query_params.push(owner.into());
        }
        debug!(table = self.name, id, set = %params.set_clause, "updating row");

        let result = Query::new(sql)
            .bind_values(query_params)
            .execute(&self.pool)
            .await?;
        self.found(result.rows_affected, id)
    }

    /// Delete the row with `id`, optionally requiring it to belong to `owner`.
    pub(crate) async fn delete(&self, id: i64, owner: Option<i64>) -> Result<()> {
        let mut query = Query::new(match owner {
            Some(_) => format!(
                "DELETE FROM {}.{} WHERE id = $1 AND user_id = $2",
                self.schema, self.name
            ),
            None => format!("DELETE FROM {}.{} WHERE id = $1", self.schema, self.name),
        })
        .bind(id);
        if let Some(owner) = owner {
            query = query.bind(owner);
        }
        debug!(table = self.name, id, "deleting row");

        let result = query.execute(&self.pool).await?;
        self.found(result.rows_affected, id)
    }

    fn found(&self, rows_affected: u64, id: i64) -> Result<()> {
        if rows_affected == 0 {
            return Err(StoreError::NotFound {
                entity: self.entity,
                id,
            });
        }
        Ok(())
    }
}
