//! Core traits for ledger-sql

mod fields;
mod from_row;
mod from_value;
mod is_zero;
mod pool;
mod to_value;

pub use fields::{Field, FieldMut, Fields, Slot};
pub use from_row::{FromRow, Row, RowExt};
pub use from_value::FromValue;
pub use is_zero::IsZero;
pub use pool::{ExecuteResult, Pool};
pub use to_value::ToValue;
