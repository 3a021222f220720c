//! IsZero trait for detecting zero-valued fields

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;

/// Trait for types that have a distinguished zero value.
///
/// Zero-valued fields are left out of inserts and partial updates, so a
/// caller cannot tell "set to zero" apart from "not provided". Use an
/// `Option` field when that distinction matters: an `Option` is zero only
/// when it is `None`, whatever it holds.
pub trait IsZero {
    /// Whether this value equals the zero value of its type.
    fn is_zero(&self) -> bool;
}

impl IsZero for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

macro_rules! zero_int {
    ($($t:ty),+ $(,)?) => {
        $(impl IsZero for $t {
            fn is_zero(&self) -> bool {
                *self == 0
            }
        })+
    };
}

zero_int!(i16, i32, i64);

// -0.0 has a sign bit set and is not the zero value
impl IsZero for f32 {
    fn is_zero(&self) -> bool {
        self.to_bits() == 0
    }
}

impl IsZero for f64 {
    fn is_zero(&self) -> bool {
        self.to_bits() == 0
    }
}

impl IsZero for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for Vec<u8> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl IsZero for NaiveDate {
    fn is_zero(&self) -> bool {
        *self == NaiveDate::default()
    }
}

impl IsZero for NaiveDateTime {
    fn is_zero(&self) -> bool {
        *self == NaiveDateTime::default()
    }
}

impl IsZero for NaiveTime {
    fn is_zero(&self) -> bool {
        *self == NaiveTime::default()
    }
}

impl IsZero for Decimal {
    fn is_zero(&self) -> bool {
        Decimal::is_zero(self)
    }
}

impl IsZero for serde_json::Value {
    fn is_zero(&self) -> bool {
        self.is_null()
    }
}

impl<T> IsZero for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}
