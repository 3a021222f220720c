use ledger_sql::{Pool, Query};
use tracing::info;

use super::Table;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::models::{CreateUser, UpdateUser, User};

/// Access to the `users` table
pub struct UserRepository<P> {
    table: Table<P>,
}

impl<P: Pool> UserRepository<P> {
    /// Fails when the configured schema is not a plain identifier.
    pub fn new(config: &StoreConfig, pool: P) -> Result<Self> {
        Ok(Self {
            table: Table::new(config, pool, User::TABLE, "user")?,
        })
    }

    /// Register a user; `id` and timestamps come from the database.
    pub async fn create(&self, request: &CreateUser) -> Result<User> {
        request.validate()?;
        let user: User = self.table.insert(request).await?;
        info!(user_id = user.id, "created user");
        Ok(user)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(Query::new(self.table.select::<User>("id = $1"))
            .bind(id)
            .fetch_optional(self.table.pool())
            .await?)
    }

    /// Look up a user by login email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(Query::new(self.table.select::<User>("email = $1"))
            .bind(email)
            .fetch_optional(self.table.pool())
            .await?)
    }

    pub async fn update(&self, id: i64, request: &UpdateUser) -> Result<()> {
        request.validate()?;
        self.table.update(request, id, None).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.table.delete(id, None).await?;
        info!(user_id = id, "deleted user");
        Ok(())
    }
}
