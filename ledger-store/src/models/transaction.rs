use chrono::{NaiveDate, NaiveDateTime};
use ledger_sql::{Fields, FromRow};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{max_len, positive_id, text_enum};
use crate::error::{Result, StoreError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    #[default]
    Expense,
    Transfer,
}

text_enum!(TransactionKind {
    Income => "income",
    Expense => "expense",
    Transfer => "transfer",
});

/// A single money movement, as stored in the `transactions` table
///
/// `amount` is always positive; `kind` carries the direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Fields, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub account_id: i64,
    pub category_id: Option<i64>,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    #[ledger(rename = "transaction_date")]
    pub occurred_on: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl Transaction {
    pub const TABLE: &'static str = "transactions";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Fields)]
pub struct CreateTransaction {
    pub user_id: i64,
    pub account_id: i64,
    pub category_id: Option<i64>,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    #[ledger(rename = "transaction_date")]
    pub occurred_on: NaiveDate,
}

impl CreateTransaction {
    pub fn validate(&self) -> Result<()> {
        positive_id("user_id", self.user_id)?;
        positive_id("account_id", self.account_id)?;
        if let Some(category_id) = self.category_id {
            positive_id("category_id", category_id)?;
        }
        positive_amount(self.amount)?;
        max_len("description", &self.description, 255)?;
        if self.occurred_on == NaiveDate::default() {
            return Err(StoreError::validation("occurred_on", "is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Fields)]
pub struct UpdateTransaction {
    pub account_id: Option<i64>,
    pub category_id: Option<i64>,
    pub kind: Option<TransactionKind>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    #[ledger(rename = "transaction_date")]
    pub occurred_on: Option<NaiveDate>,
}

impl UpdateTransaction {
    pub fn validate(&self) -> Result<()> {
        if let Some(account_id) = self.account_id {
            positive_id("account_id", account_id)?;
        }
        if let Some(category_id) = self.category_id {
            positive_id("category_id", category_id)?;
        }
        if let Some(amount) = self.amount {
            positive_amount(amount)?;
        }
        if let Some(description) = &self.description {
            max_len("description", description, 255)?;
        }
        Ok(())
    }
}

fn positive_amount(amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(StoreError::validation(
            "amount",
            format!("must be greater than zero, got {}", amount),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_sql::extract_values;

    fn valid() -> CreateTransaction {
        CreateTransaction {
            user_id: 1,
            account_id: 2,
            category_id: None,
            kind: TransactionKind::Expense,
            amount: Decimal::new(1250, 2),
            description: "Groceries".into(),
            occurred_on: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        }
    }

    #[test]
    fn test_create_transaction_validation() {
        assert!(valid().validate().is_ok());
        for amount in [Decimal::ZERO, Decimal::new(-5, 0)] {
            let err = CreateTransaction { amount, ..valid() }
                .validate()
                .unwrap_err();
            assert!(matches!(err, StoreError::Validation { field: "amount", .. }));
        }
        let err = CreateTransaction {
            occurred_on: NaiveDate::default(),
            ..valid()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation {
                field: "occurred_on",
                ..
            }
        ));
    }

    #[test]
    fn test_renamed_date_column() {
        let extracted = extract_values(&valid(), true).unwrap();
        assert_eq!(
            extracted.names,
            vec![
                "user_id",
                "account_id",
                "kind",
                "amount",
                "description",
                "transaction_date"
            ]
        );
    }

    #[test]
    fn test_kind_text_round_trip() {
        for kind in [
            TransactionKind::Income,
            TransactionKind::Expense,
            TransactionKind::Transfer,
        ] {
            assert_eq!(kind.as_str().parse::<TransactionKind>().unwrap(), kind);
        }
    }
}
