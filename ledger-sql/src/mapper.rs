//! Field extraction: parallel column / value / scan-target lists

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::traits::{Field, FieldMut, Fields};
use crate::value::Value;

/// Output of [`extract_fields`]: three sequences where position `i` in
/// each refers to the same struct field.
#[derive(Debug)]
pub struct ExtractedFields<'a> {
    /// Scan targets, one per kept field
    pub pointers: Vec<FieldMut<'a>>,
    /// Current values, aligned with `pointers`
    pub values: Vec<Value>,
    /// Column names, aligned with `pointers`
    pub names: Vec<String>,
}

impl ExtractedFields<'_> {
    /// Number of kept fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no field was kept.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Output of [`extract_values`]: columns and values without scan targets.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedValues {
    /// Current values
    pub values: Vec<Value>,
    /// Column names, aligned with `values`
    pub names: Vec<String>,
}

/// Extract scan targets, values and column names from `obj`.
///
/// Fields come out in declaration order. With `skip_zero`, fields holding
/// their type's zero value are left out of all three lists.
///
/// Fails with [`Error::NoFields`] when nothing is left, and with
/// [`Error::InvalidArgument`] when two fields map to the same column or a
/// column name is empty.
pub fn extract_fields<T: Fields + ?Sized>(
    obj: &mut T,
    skip_zero: bool,
) -> Result<ExtractedFields<'_>> {
    let fields = obj.fields_mut();
    check_columns(fields.iter().map(|f| f.column().into_owned()))?;

    let mut pointers = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());
    let mut names = Vec::with_capacity(fields.len());

    for field in fields {
        if skip_zero && field.slot.is_zero() {
            continue;
        }
        values.push(field.slot.value());
        names.push(field.column().into_owned());
        pointers.push(field);
    }

    if names.is_empty() {
        return Err(Error::NoFields);
    }

    Ok(ExtractedFields {
        pointers,
        values,
        names,
    })
}

/// Extract values and column names from `obj` without borrowing it mutably.
///
/// Same ordering, filtering and errors as [`extract_fields`].
pub fn extract_values<T: Fields + ?Sized>(obj: &T, skip_zero: bool) -> Result<ExtractedValues> {
    let fields = obj.fields();
    check_columns(fields.iter().map(|f| f.column().into_owned()))?;

    let (values, names): (Vec<Value>, Vec<String>) = fields
        .iter()
        .filter(|f| !(skip_zero && f.slot.is_zero()))
        .map(|f: &Field<'_>| (f.slot.value(), f.column().into_owned()))
        .unzip();

    if names.is_empty() {
        return Err(Error::NoFields);
    }

    Ok(ExtractedValues { values, names })
}

fn check_columns(columns: impl Iterator<Item = String>) -> Result<()> {
    let mut seen = HashSet::new();
    for column in columns {
        if column.is_empty() {
            return Err(Error::InvalidArgument(
                "field maps to an empty column name".into(),
            ));
        }
        if !seen.insert(column.clone()) {
            return Err(Error::InvalidArgument(format!(
                "more than one field maps to column `{}`",
                column
            )));
        }
    }
    Ok(())
}
