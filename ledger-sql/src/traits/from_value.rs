//! FromValue trait for converting SQL values to Rust types

use crate::error::{Error, Result};
use crate::value::Value;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// Trait for types that can be constructed from a SQL value.
///
/// This is implemented for the column types the mapper supports and can
/// be implemented for custom types (e.g., enums stored as text).
pub trait FromValue: Sized {
    /// Convert a SQL value to this type.
    fn from_value(value: Value) -> Result<Self>;
}

fn mismatch<T>(expected: &'static str, value: &Value) -> Result<T> {
    Err(Error::TypeConversion {
        expected,
        actual: value.type_name().to_string(),
    })
}

fn narrow<S, T>(expected: &'static str, source: &'static str, v: S) -> Result<T>
where
    S: Copy + std::fmt::Display + TryInto<T>,
{
    v.try_into().map_err(|_| Error::TypeConversion {
        expected,
        actual: format!("{}({}) out of range", source, v),
    })
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::I16(v) => Ok(v != 0),
            Value::I32(v) => Ok(v != 0),
            Value::I64(v) => Ok(v != 0),
            other => mismatch("bool", &other),
        }
    }
}

impl FromValue for i16 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::I16(v) => Ok(v),
            Value::I32(v) => narrow("i16", "i32", v),
            Value::I64(v) => narrow("i16", "i64", v),
            other => mismatch("i16", &other),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::I16(v) => Ok(v.into()),
            Value::I32(v) => Ok(v),
            Value::I64(v) => narrow("i32", "i64", v),
            other => mismatch("i32", &other),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::I16(v) => Ok(v.into()),
            Value::I32(v) => Ok(v.into()),
            Value::I64(v) => Ok(v),
            other => mismatch("i64", &other),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::F32(v) => Ok(v),
            Value::F64(v) => Ok(v as f32),
            other => mismatch("f32", &other),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::F32(v) => Ok(v.into()),
            Value::F64(v) => Ok(v),
            other => mismatch("f64", &other),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Bytes(v) => String::from_utf8(v).map_err(|e| Error::TypeConversion {
                expected: "utf8 string",
                actual: format!("invalid utf8: {}", e),
            }),
            other => mismatch("string", &other),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            other => mismatch("bytes", &other),
        }
    }
}

impl FromValue for NaiveDate {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Date(v) => Ok(v),
            Value::DateTime(v) => Ok(v.date()),
            other => mismatch("date", &other),
        }
    }
}

// A bare date reads as midnight
impl FromValue for NaiveDateTime {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::DateTime(v) => Ok(v),
            Value::Date(v) => Ok(v.and_time(NaiveTime::default())),
            other => mismatch("datetime", &other),
        }
    }
}

impl FromValue for NaiveTime {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Time(v) => Ok(v),
            Value::DateTime(v) => Ok(v.time()),
            other => mismatch("time", &other),
        }
    }
}

impl FromValue for Decimal {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(v) => Ok(v),
            Value::I16(v) => Ok(v.into()),
            Value::I32(v) => Ok(v.into()),
            Value::I64(v) => Ok(v.into()),
            // numeric columns often arrive as text
            Value::String(v) => v.parse().map_err(|_| Error::TypeConversion {
                expected: "decimal",
                actual: format!("invalid decimal string: {}", v),
            }),
            other => mismatch("decimal", &other),
        }
    }
}

impl FromValue for serde_json::Value {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Json(v) => Ok(v),
            Value::String(v) => serde_json::from_str(&v).map_err(|e| Error::TypeConversion {
                expected: "json",
                actual: format!("invalid json: {}", e),
            }),
            other => mismatch("json", &other),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_widening_and_narrowing() {
        assert_eq!(i64::from_value(Value::I32(7)).unwrap(), 7);
        assert_eq!(i16::from_value(Value::I64(12)).unwrap(), 12);
        assert!(i16::from_value(Value::I64(i64::MAX)).is_err());
    }

    #[test]
    fn test_option_null() {
        assert_eq!(Option::<String>::from_value(Value::Null).unwrap(), None);
        assert_eq!(
            Option::<String>::from_value(Value::String("x".into())).unwrap(),
            Some("x".to_string())
        );
    }

    #[test]
    fn test_decimal_from_string() {
        let d = Decimal::from_value(Value::String("12.50".into())).unwrap();
        assert_eq!(d, Decimal::new(1250, 2));
        assert!(Decimal::from_value(Value::String("abc".into())).is_err());
    }

    #[test]
    fn test_mismatch_reports_type_name() {
        let err = bool::from_value(Value::String("yes".into())).unwrap_err();
        assert!(err.to_string().contains("string"));
    }
}
