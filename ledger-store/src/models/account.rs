use chrono::NaiveDateTime;
use ledger_sql::{Fields, FromRow};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{max_len, positive_id, require};
use crate::error::{Result, StoreError};

/// A money account owned by a user, as stored in the `accounts` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Fields, FromRow)]
pub struct Account {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub account_type: String,
    pub currency: String,
    pub balance: Decimal,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Account {
    pub const TABLE: &'static str = "accounts";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Fields)]
pub struct CreateAccount {
    pub user_id: i64,
    pub name: String,
    /// e.g. `checking`, `savings`, `credit_card`, `cash`
    pub account_type: String,
    /// ISO 4217 code
    pub currency: String,
    /// Opening balance; zero falls back to the column default
    pub balance: Decimal,
}

impl CreateAccount {
    pub fn validate(&self) -> Result<()> {
        positive_id("user_id", self.user_id)?;
        require("name", &self.name)?;
        max_len("name", &self.name, 100)?;
        require("account_type", &self.account_type)?;
        max_len("account_type", &self.account_type, 50)?;
        currency_code(&self.currency)?;
        Ok(())
    }
}

/// Partial account update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Fields)]
pub struct UpdateAccount {
    pub name: Option<String>,
    pub account_type: Option<String>,
    pub currency: Option<String>,
    pub balance: Option<Decimal>,
}

impl UpdateAccount {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require("name", name)?;
            max_len("name", name, 100)?;
        }
        if let Some(account_type) = &self.account_type {
            require("account_type", account_type)?;
            max_len("account_type", account_type, 50)?;
        }
        if let Some(currency) = &self.currency {
            currency_code(currency)?;
        }
        Ok(())
    }
}

fn currency_code(code: &str) -> Result<()> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(StoreError::validation(
            "currency",
            format!("expected a three-letter ISO code, got {:?}", code),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        assert!(currency_code("EUR").is_ok());
        assert!(currency_code("eur").is_err());
        assert!(currency_code("EURO").is_err());
        assert!(currency_code("").is_err());
    }

    #[test]
    fn test_create_account_requires_owner() {
        let request = CreateAccount {
            name: "Checking".into(),
            account_type: "checking".into(),
            currency: "USD".into(),
            ..Default::default()
        };
        assert!(matches!(
            request.validate(),
            Err(StoreError::Validation {
                field: "user_id",
                ..
            })
        ));
        assert!(CreateAccount {
            user_id: 3,
            ..request
        }
        .validate()
        .is_ok());
    }
}
