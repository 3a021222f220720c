//! ledger-sql - struct-to-SQL field mapping
//!
//! Maps plain data structs to SQL column lists, parameter values and scan
//! targets, and assembles parameterized INSERT / UPDATE statements with
//! positional `$n` placeholders.
//!
//! # Features
//!
//! - **Derive Macros**: `#[derive(Fields, FromRow)]` describe a struct's
//!   public fields in declaration order
//! - **Field Extraction**: parallel column / value / scan-target lists, with
//!   optional zero-value skipping
//! - **Statements**: `INSERT ... RETURNING` and partial `UPDATE ... SET`
//!   fragments built from the extracted lists
//! - **Naming**: deterministic snake_case column names via [`to_snake_case`]
//!
//! # Example
//!
//! ```ignore
//! use ledger_sql::{create_insert_query, Fields, FromRow, Pool};
//!
//! #[derive(Default, Fields)]
//! pub struct NewUser {
//!     pub first_name: String,
//!     pub last_name: String,
//! }
//!
//! #[derive(Default, Fields, FromRow)]
//! pub struct User {
//!     pub id: i64,
//!     pub first_name: String,
//!     pub last_name: String,
//! }
//!
//! async fn insert_user(pool: &impl Pool, new: &NewUser) -> ledger_sql::Result<User> {
//!     let mut user = User::default();
//!     create_insert_query(new, &mut user, "users", "app")?
//!         .fetch_into(pool)
//!         .await?;
//!     Ok(user)
//! }
//! ```

pub mod error;
pub mod mapper;
pub mod naming;
pub mod query;
pub mod record;
pub mod statement;
pub mod traits;
pub mod value;

// Re-export the derive macros
pub use ledger_sql_derive::{Fields, FromRow};

// Re-export main types
pub use error::{Error, Result};
pub use mapper::{extract_fields, extract_values, ExtractedFields, ExtractedValues};
pub use naming::to_snake_case;
pub use query::Query;
pub use record::Record;
pub use statement::{create_insert_query, create_update_params, InsertQuery, UpdateParams};
pub use traits::{
    ExecuteResult, Field, FieldMut, Fields, FromRow, FromValue, IsZero, Pool, Row, RowExt, Slot,
    ToValue,
};
pub use value::Value;
