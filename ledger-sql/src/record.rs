//! Owned result row

use crate::error::{Error, Result};
use crate::traits::{FieldMut, Row};
use crate::value::Value;

/// A result row returned by a [`Pool`](crate::Pool).
///
/// Columns keep their select order, so a row can be read by name through
/// [`Row`] or positionally into scan targets with [`Record::scan_into`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Record {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, builder style.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    /// Append a column.
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push(column.into());
        self.values.push(value.into());
    }

    /// Column names in select order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Column values in select order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the row, returning the first column's value.
    pub fn into_first(self) -> Option<Value> {
        self.values.into_iter().next()
    }

    /// Write each column into the scan target at the same position.
    ///
    /// The row must be exactly as wide as `targets`. If a column cannot be
    /// converted, the targets already written are put back to their
    /// previous values before the error is returned.
    pub fn scan_into(self, targets: &mut [FieldMut<'_>]) -> Result<()> {
        if self.values.len() != targets.len() {
            return Err(Error::ColumnCount {
                expected: targets.len(),
                actual: self.values.len(),
            });
        }

        let previous: Vec<Value> = targets.iter().map(|t| t.slot.value()).collect();
        for (i, value) in self.values.into_iter().enumerate() {
            if let Err(e) = targets[i].slot.assign(value) {
                for (target, old) in targets[..i].iter_mut().zip(previous) {
                    target.slot.assign(old)?;
                }
                return Err(e);
            }
        }
        Ok(())
    }
}

impl Row for Record {
    fn get_value(&self, column: &str) -> Result<Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i].clone())
            .ok_or_else(|| Error::ColumnNotFound(column.to_string()))
    }
}

impl Row for &Record {
    fn get_value(&self, column: &str) -> Result<Value> {
        (*self).get_value(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::RowExt;

    #[test]
    fn test_get_by_name() {
        let row = Record::new().with("id", 4i64).with("name", "Groceries");
        assert_eq!(row.get::<i64>("id").unwrap(), 4);
        assert_eq!(row.get::<String>("name").unwrap(), "Groceries");
        assert!(matches!(
            row.get::<i64>("missing"),
            Err(Error::ColumnNotFound(c)) if c == "missing"
        ));
    }

    #[test]
    fn test_scan_into_positional() {
        let mut id = 0i64;
        let mut name = String::new();
        let mut targets = vec![
            FieldMut {
                name: "id",
                rename: None,
                index: 0,
                slot: &mut id,
            },
            FieldMut {
                name: "name",
                rename: None,
                index: 1,
                slot: &mut name,
            },
        ];
        Record::new()
            .with("id", 9i64)
            .with("name", "Rent")
            .scan_into(&mut targets)
            .unwrap();
        drop(targets);
        assert_eq!(id, 9);
        assert_eq!(name, "Rent");
    }

    #[test]
    fn test_scan_into_width_mismatch() {
        let mut id = 0i64;
        let mut targets = vec![FieldMut {
            name: "id",
            rename: None,
            index: 0,
            slot: &mut id,
        }];
        let err = Record::new()
            .with("id", 1i64)
            .with("extra", true)
            .scan_into(&mut targets)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ColumnCount {
                expected: 1,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_scan_into_failure_keeps_previous_values() {
        let mut id = 3i64;
        let mut name = String::from("Groceries");
        let mut amount = 0i32;
        let mut targets = vec![
            FieldMut {
                name: "id",
                rename: None,
                index: 0,
                slot: &mut id,
            },
            FieldMut {
                name: "name",
                rename: None,
                index: 1,
                slot: &mut name,
            },
            FieldMut {
                name: "amount",
                rename: None,
                index: 2,
                slot: &mut amount,
            },
        ];
        let err = Record::new()
            .with("id", 10i64)
            .with("name", "Rent")
            .with("amount", "not a number")
            .scan_into(&mut targets)
            .unwrap_err();
        drop(targets);

        assert!(matches!(err, Error::TypeConversion { expected: "i32", .. }));
        assert_eq!(id, 3);
        assert_eq!(name, "Groceries");
        assert_eq!(amount, 0);
    }
}
