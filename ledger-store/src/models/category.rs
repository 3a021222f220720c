use chrono::NaiveDateTime;
use ledger_sql::{Fields, FromRow};
use serde::{Deserialize, Serialize};

use super::{max_len, positive_id, require, text_enum};
use crate::error::{Result, StoreError};

/// Whether a category groups money coming in or going out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    #[default]
    Expense,
}

text_enum!(CategoryKind {
    Income => "income",
    Expense => "expense",
});

/// A user-defined category, as stored in the `categories` table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Fields, FromRow)]
pub struct Category {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub kind: CategoryKind,
    /// `#rrggbb`
    pub color: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Category {
    pub const TABLE: &'static str = "categories";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Fields)]
pub struct CreateCategory {
    pub user_id: i64,
    pub name: String,
    pub kind: CategoryKind,
    pub color: Option<String>,
}

impl CreateCategory {
    pub fn validate(&self) -> Result<()> {
        positive_id("user_id", self.user_id)?;
        require("name", &self.name)?;
        max_len("name", &self.name, 100)?;
        if let Some(color) = &self.color {
            hex_color(color)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Fields)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub kind: Option<CategoryKind>,
    pub color: Option<String>,
}

impl UpdateCategory {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            require("name", name)?;
            max_len("name", name, 100)?;
        }
        if let Some(color) = &self.color {
            hex_color(color)?;
        }
        Ok(())
    }
}

fn hex_color(color: &str) -> Result<()> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(StoreError::validation(
            "color",
            format!("expected #rrggbb, got {:?}", color),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_sql::{FromValue, ToValue, Value};

    #[test]
    fn test_kind_column_text() {
        assert_eq!(
            CategoryKind::Income.to_value(),
            Value::String("income".into())
        );
        assert_eq!(
            CategoryKind::from_value(Value::String("expense".into())).unwrap(),
            CategoryKind::Expense
        );
        assert!(CategoryKind::from_value(Value::String("gift".into())).is_err());
        assert!(CategoryKind::from_value(Value::I32(1)).is_err());
    }

    #[test]
    fn test_hex_color() {
        assert!(hex_color("#a1B2c3").is_ok());
        assert!(hex_color("a1b2c3").is_err());
        assert!(hex_color("#a1b2c").is_err());
        assert!(hex_color("#gggggg").is_err());
    }
}
