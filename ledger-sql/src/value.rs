//! Dynamic Value type for SQL parameters and row columns

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

use crate::traits::ToValue;

/// A dynamic SQL value.
///
/// Values are what the mapper hands out for parameter binding and what a
/// [`Pool`](crate::Pool) hands back in a [`Record`](crate::Record).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL value
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed 16-bit integer (`smallint`)
    I16(i16),
    /// Signed 32-bit integer (`integer`)
    I32(i32),
    /// Signed 64-bit integer (`bigint`)
    I64(i64),
    /// 32-bit floating point (`real`)
    F32(f32),
    /// 64-bit floating point (`double precision`)
    F64(f64),
    /// String/text value
    String(String),
    /// Binary data (`bytea`)
    Bytes(Vec<u8>),
    /// Date value
    Date(NaiveDate),
    /// Timestamp value
    DateTime(NaiveDateTime),
    /// Time value
    Time(NaiveTime),
    /// Numeric value
    Decimal(Decimal),
    /// JSON value
    Json(serde_json::Value),
}

impl Value {
    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::I16(_) => "i16",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::F32(_) => "f32",
            Value::F64(_) => "f64",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Time(_) => "time",
            Value::Decimal(_) => "decimal",
            Value::Json(_) => "json",
        }
    }
}

/// Column types with a dedicated variant: `From<T>` moves into the variant,
/// `ToValue` copies the field into it.
macro_rules! column_types {
    ($($t:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v)
                }
            }

            impl ToValue for $t {
                fn to_value(&self) -> Value {
                    Value::$variant(<$t as Clone>::clone(self))
                }
            }
        )+
    };
}

column_types!(
    bool => Bool,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
    NaiveDate => Date,
    NaiveDateTime => DateTime,
    NaiveTime => Time,
    Decimal => Decimal,
    serde_json::Value => Json,
);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
