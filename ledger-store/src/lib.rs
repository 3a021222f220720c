//! ledger-store: users, accounts, categories and transactions on top of
//! the ledger-sql field mapper
//!
//! Each repository is built from a [`StoreConfig`] and any
//! [`Pool`](ledger_sql::Pool). Create requests are validated, then inserted
//! with their non-zero fields only; the stored row (with database-assigned
//! `id` and timestamps) is read back through `RETURNING`. Updates are
//! partial in the same way.
//!
//! # Example
//!
//! ```rust,ignore
//! use ledger_store::{CreateUser, StoreConfig, UserRepository};
//!
//! let config = StoreConfig::load(None)?;
//! let users = UserRepository::new(&config, pool)?;
//! let user = users
//!     .create(&CreateUser {
//!         email: "ada@example.com".into(),
//!         first_name: "Ada".into(),
//!         last_name: "Lovelace".into(),
//!         password_hash,
//!     })
//!     .await?;
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! ledger-store snake FirstName HTTPRequest
//! ledger-store --config ledger-store.toml inspect
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;

pub use crate::config::StoreConfig;
pub use error::{Result, StoreError};
pub use models::*;
pub use repository::{
    AccountRepository, CategoryRepository, TransactionRepository, UserRepository,
};
