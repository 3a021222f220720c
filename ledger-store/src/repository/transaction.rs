use chrono::NaiveDate;
use ledger_sql::{Pool, Query};
use tracing::debug;

use super::Table;
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::models::{CreateTransaction, Transaction, UpdateTransaction};

const NEWEST_FIRST: &str = "ORDER BY transaction_date DESC, id DESC";

/// Access to the `transactions` table
pub struct TransactionRepository<P> {
    table: Table<P>,
}

impl<P: Pool> TransactionRepository<P> {
    /// Fails when the configured schema is not a plain identifier.
    pub fn new(config: &StoreConfig, pool: P) -> Result<Self> {
        Ok(Self {
            table: Table::new(config, pool, Transaction::TABLE, "transaction")?,
        })
    }

    pub async fn create(&self, request: &CreateTransaction) -> Result<Transaction> {
        request.validate()?;
        let transaction: Transaction = self.table.insert(request).await?;
        debug!(
            transaction_id = transaction.id,
            account_id = transaction.account_id,
            kind = %transaction.kind,
            "recorded transaction"
        );
        Ok(transaction)
    }

    pub async fn find_by_id(&self, user_id: i64, id: i64) -> Result<Option<Transaction>> {
        Ok(
            Query::new(self.table.select::<Transaction>("id = $1 AND user_id = $2"))
                .bind(id)
                .bind(user_id)
                .fetch_optional(self.table.pool())
                .await?,
        )
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Transaction>> {
        let filter = format!("user_id = $1 {}", NEWEST_FIRST);
        Ok(Query::new(self.table.select::<Transaction>(&filter))
            .bind(user_id)
            .fetch_all(self.table.pool())
            .await?)
    }

    pub async fn list_for_account(&self, user_id: i64, account_id: i64) -> Result<Vec<Transaction>> {
        let filter = format!("user_id = $1 AND account_id = $2 {}", NEWEST_FIRST);
        Ok(Query::new(self.table.select::<Transaction>(&filter))
            .bind(user_id)
            .bind(account_id)
            .fetch_all(self.table.pool())
            .await?)
    }

    /// Transactions dated within `from..=to`
    pub async fn list_between(
        &self,
        user_id: i64,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Transaction>> {
        if from > to {
            return Err(StoreError::validation(
                "date_range",
                format!("{} is after {}", from, to),
            ));
        }
        let filter = format!(
            "user_id = $1 AND transaction_date BETWEEN $2 AND $3 {}",
            NEWEST_FIRST
        );
        Ok(Query::new(self.table.select::<Transaction>(&filter))
            .bind(user_id)
            .bind(from)
            .bind(to)
            .fetch_all(self.table.pool())
            .await?)
    }

    pub async fn update(&self, user_id: i64, id: i64, request: &UpdateTransaction) -> Result<()> {
        request.validate()?;
        self.table.update(request, id, Some(user_id)).await
    }

    pub async fn delete(&self, user_id: i64, id: i64) -> Result<()> {
        self.table.delete(id, Some(user_id)).await
    }
}
