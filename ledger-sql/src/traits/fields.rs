//! Fields trait: ordered field descriptors for plain data structs

use std::borrow::Cow;

use crate::error::Result;
use crate::naming::to_snake_case;
use crate::traits::{FromValue, IsZero, ToValue};
use crate::value::Value;

/// An object-safe view of a single struct field.
///
/// Blanket-implemented for every `ToValue + FromValue + IsZero` type, so a
/// `&mut dyn Slot` works as a scan target that a row column is written into.
/// Shared descriptors hold `dyn Slot + Sync`, mutable ones `dyn Slot + Send`.
pub trait Slot {
    /// Current value of the field.
    fn value(&self) -> Value;

    /// Whether the field currently holds its type's zero value.
    fn is_zero(&self) -> bool;

    /// Overwrite the field from a SQL value.
    fn assign(&mut self, value: Value) -> Result<()>;
}

impl<T: ToValue + FromValue + IsZero> Slot for T {
    fn value(&self) -> Value {
        self.to_value()
    }

    fn is_zero(&self) -> bool {
        IsZero::is_zero(self)
    }

    fn assign(&mut self, value: Value) -> Result<()> {
        *self = T::from_value(value)?;
        Ok(())
    }
}

/// Read-only descriptor of one field.
pub struct Field<'a> {
    /// Rust field name
    pub name: &'static str,
    /// Explicit column name from `#[ledger(rename = "...")]`
    pub rename: Option<&'static str>,
    /// Position among the participating fields, in declaration order
    pub index: usize,
    /// The field itself
    pub slot: &'a (dyn Slot + Sync),
}

impl Field<'_> {
    /// Column name: the explicit rename, else the snake_case field name.
    pub fn column(&self) -> Cow<'static, str> {
        column_name(self.name, self.rename)
    }
}

/// Mutable descriptor of one field, usable as a scan target.
pub struct FieldMut<'a> {
    /// Rust field name
    pub name: &'static str,
    /// Explicit column name from `#[ledger(rename = "...")]`
    pub rename: Option<&'static str>,
    /// Position among the participating fields, in declaration order
    pub index: usize,
    /// The field itself
    pub slot: &'a mut (dyn Slot + Send),
}

impl FieldMut<'_> {
    /// Column name: the explicit rename, else the snake_case field name.
    pub fn column(&self) -> Cow<'static, str> {
        column_name(self.name, self.rename)
    }
}

impl std::fmt::Debug for FieldMut<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldMut")
            .field("name", &self.name)
            .field("index", &self.index)
            .field("value", &self.slot.value())
            .finish()
    }
}

fn column_name(name: &'static str, rename: Option<&'static str>) -> Cow<'static, str> {
    match rename {
        Some(column) => Cow::Borrowed(column),
        None => Cow::Owned(to_snake_case(name)),
    }
}

/// Trait for plain data structs whose public fields map to SQL columns.
///
/// This trait is typically implemented via the `#[derive(Fields)]` macro.
/// Only `pub` fields participate, in declaration order; fields marked
/// `#[ledger(skip)]` are left out as well.
///
/// # Manual Implementation
///
/// ```ignore
/// use ledger_sql::{Field, FieldMut, Fields};
///
/// pub struct Category {
///     pub id: i64,
///     pub name: String,
/// }
///
/// impl Fields for Category {
///     fn fields(&self) -> Vec<Field<'_>> {
///         vec![
///             Field { name: "id", rename: None, index: 0, slot: &self.id },
///             Field { name: "name", rename: None, index: 1, slot: &self.name },
///         ]
///     }
///
///     fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
///         vec![
///             FieldMut { name: "id", rename: None, index: 0, slot: &mut self.id },
///             FieldMut { name: "name", rename: None, index: 1, slot: &mut self.name },
///         ]
///     }
/// }
/// ```
pub trait Fields {
    /// Shared descriptors of every participating field, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    /// Mutable descriptors of every participating field, in declaration order.
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}
