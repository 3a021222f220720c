use ledger_sql::{Pool, Query};

use super::Table;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::models::{Category, CategoryKind, CreateCategory, UpdateCategory};

/// Access to the `categories` table
pub struct CategoryRepository<P> {
    table: Table<P>,
}

impl<P: Pool> CategoryRepository<P> {
    /// Fails when the configured schema is not a plain identifier.
    pub fn new(config: &StoreConfig, pool: P) -> Result<Self> {
        Ok(Self {
            table: Table::new(config, pool, Category::TABLE, "category")?,
        })
    }

    pub async fn create(&self, request: &CreateCategory) -> Result<Category> {
        request.validate()?;
        self.table.insert(request).await
    }

    pub async fn find_by_id(&self, user_id: i64, id: i64) -> Result<Option<Category>> {
        Ok(
            Query::new(self.table.select::<Category>("id = $1 AND user_id = $2"))
                .bind(id)
                .bind(user_id)
                .fetch_optional(self.table.pool())
                .await?,
        )
    }

    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<Category>> {
        Ok(
            Query::new(self.table.select::<Category>("user_id = $1 ORDER BY name, id"))
                .bind(user_id)
                .fetch_all(self.table.pool())
                .await?,
        )
    }

    /// Categories of one kind, e.g. for an expense picker
    pub async fn list_by_kind(&self, user_id: i64, kind: CategoryKind) -> Result<Vec<Category>> {
        Ok(Query::new(
            self.table
                .select::<Category>("user_id = $1 AND kind = $2 ORDER BY name, id"),
        )
        .bind(user_id)
        .bind(kind)
        .fetch_all(self.table.pool())
        .await?)
    }

    pub async fn update(&self, user_id: i64, id: i64, request: &UpdateCategory) -> Result<()> {
        request.validate()?;
        self.table.update(request, id, Some(user_id)).await
    }

    pub async fn delete(&self, user_id: i64, id: i64) -> Result<()> {
        self.table.delete(id, Some(user_id)).await
    }
}
