//! ToValue trait for binding struct fields as SQL parameters

use crate::value::Value;

/// Trait for types that can be converted to a SQL value.
///
/// Every column type with its own [`Value`] variant implements this
/// alongside `From<T> for Value` (see `value.rs`). Implement it by hand for
/// domain types stored in an existing variant, such as enums kept as text.
pub trait ToValue {
    /// Convert this value to a SQL value.
    fn to_value(&self) -> Value;
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::from(self)
    }
}

impl ToValue for &str {
    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

/// `None` binds as NULL.
impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: ToValue> ToValue for &T {
    fn to_value(&self) -> Value {
        T::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_to_value_matches_from() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        assert_eq!(day.to_value(), Value::from(day));
        assert_eq!(Decimal::new(995, 2).to_value(), Value::from(Decimal::new(995, 2)));
        assert_eq!(String::from("rent").to_value(), Value::from("rent"));
        assert_eq!(vec![1u8, 2].to_value(), Value::Bytes(vec![1, 2]));
    }

    #[test]
    fn test_option_and_references() {
        assert_eq!(None::<i32>.to_value(), Value::Null);
        assert_eq!(Some(7i64).to_value(), Value::I64(7));
        assert_eq!((&&3i16).to_value(), Value::I16(3));
        assert_eq!("cash".to_value(), Value::String("cash".into()));
    }
}
