use chrono::NaiveDateTime;
use ledger_sql::{Fields, FromRow};
use serde::{Deserialize, Serialize};

use super::{email, max_len, require};
use crate::error::Result;

/// A registered user, as stored in the `users` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Fields, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl User {
    pub const TABLE: &'static str = "users";
}

/// Registration request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Fields)]
pub struct CreateUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Already hashed by the caller
    pub password_hash: String,
}

impl CreateUser {
    pub fn validate(&self) -> Result<()> {
        require("email", &self.email)?;
        email("email", &self.email)?;
        max_len("email", &self.email, 255)?;
        require("first_name", &self.first_name)?;
        max_len("first_name", &self.first_name, 100)?;
        require("last_name", &self.last_name)?;
        max_len("last_name", &self.last_name, 100)?;
        require("password_hash", &self.password_hash)?;
        Ok(())
    }
}

/// Profile update; `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Fields)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateUser {
    pub fn validate(&self) -> Result<()> {
        if let Some(value) = &self.email {
            email("email", value)?;
            max_len("email", value, 255)?;
        }
        if let Some(value) = &self.first_name {
            require("first_name", value)?;
            max_len("first_name", value, 100)?;
        }
        if let Some(value) = &self.last_name {
            require("last_name", value)?;
            max_len("last_name", value, 100)?;
        }
        Ok(())
    }
}
