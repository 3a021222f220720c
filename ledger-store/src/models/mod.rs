//! Request and response types for the ledger tables
//!
//! Response types (`User`, `Account`, ...) mirror a full table row and are
//! used both as `RETURNING` scan targets and as `SELECT` results. Create
//! requests carry the columns a client may set; zero-valued fields are left
//! to the column defaults. Update requests are partial: only non-zero fields
//! end up in the `SET` clause.

mod account;
mod category;
mod transaction;
mod user;

pub use account::{Account, CreateAccount, UpdateAccount};
pub use category::{Category, CategoryKind, CreateCategory, UpdateCategory};
pub use transaction::{CreateTransaction, Transaction, TransactionKind, UpdateTransaction};
pub use user::{CreateUser, UpdateUser, User};

use crate::error::{Result, StoreError};

/// Implements the column traits for a fieldless enum stored as text.
macro_rules! text_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// The text stored in the column
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::ledger_sql::Error;

            fn from_str(s: &str) -> ::ledger_sql::Result<Self> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(::ledger_sql::Error::TypeConversion {
                        expected: stringify!($name),
                        actual: format!("{:?}", other),
                    }),
                }
            }
        }

        impl ::ledger_sql::ToValue for $name {
            fn to_value(&self) -> ::ledger_sql::Value {
                ::ledger_sql::Value::String(self.as_str().to_string())
            }
        }

        impl ::ledger_sql::FromValue for $name {
            fn from_value(value: ::ledger_sql::Value) -> ::ledger_sql::Result<Self> {
                match value {
                    ::ledger_sql::Value::String(s) => s.parse(),
                    other => Err(::ledger_sql::Error::TypeConversion {
                        expected: stringify!($name),
                        actual: other.type_name().to_string(),
                    }),
                }
            }
        }

        // Every variant is a real value; absence is modelled with Option.
        impl ::ledger_sql::IsZero for $name {
            fn is_zero(&self) -> bool {
                false
            }
        }
    };
}

pub(crate) use text_enum;

pub(crate) fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::validation(field, "is required"));
    }
    Ok(())
}

pub(crate) fn max_len(field: &'static str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(StoreError::validation(
            field,
            format!("must be at most {} characters, got {}", max, len),
        ));
    }
    Ok(())
}

pub(crate) fn positive_id(field: &'static str, id: i64) -> Result<()> {
    if id <= 0 {
        return Err(StoreError::validation(field, "must reference an existing row"));
    }
    Ok(())
}

/// Loose shape check: one `@`, a non-empty local part and a dotted domain.
pub(crate) fn email(field: &'static str, value: &str) -> Result<()> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split('.')
                    .filter(|label| !label.is_empty())
                    .count()
                    >= 2
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.contains(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err(StoreError::validation(field, "is not a valid email address"));
    }
    Ok(())
}
