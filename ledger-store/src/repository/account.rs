use ledger_sql::{Pool, Query};

use super::Table;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::models::{Account, CreateAccount, UpdateAccount};

/// Access to the `accounts` table
pub struct AccountRepository<P> {
    table: Table<P>,
}

impl<P: Pool> AccountRepository<P> {
    /// Fails when the configured schema is not a plain identifier.
    pub fn new(config: &StoreConfig, pool: P) -> Result<Self> {
        Ok(Self {
            table: Table::new(config, pool, Account::TABLE, "account")?,
        })
    }

    pub async fn create(&self, request: &CreateAccount) -> Result<Account> {
        request.validate()?;
        self.table.insert(request).await
    }

    pub async fn find_by_id(&self, user_id: i64, id: i64) -> Result<Option<Account>> {
        Ok(
            Query::new(self.table.select::<Account>("id = $1 AND user_id = $2"))
                .bind(id)
                .bind(user_id)
                .fetch_optional(self.table.pool())
                .await?,
        )
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Account>> {
        Ok(
            Query::new(self.table.select::<Account>("user_id = $1 ORDER BY name, id"))
                .bind(user_id)
                .fetch_all(self.table.pool())
                .await?,
        )
    }

    pub async fn update(&self, user_id: i64, id: i64, request: &UpdateAccount) -> Result<()> {
        request.validate()?;
        self.table.update(request, id, Some(user_id)).await
    }

    pub async fn delete(&self, user_id: i64, id: i64) -> Result<()> {
        self.table.delete(id, Some(user_id)).await
    }
}
