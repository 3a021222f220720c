//! INSERT / UPDATE statement assembly with positional `$n` placeholders
//!
//! `schema` and `table` are spliced into the SQL text verbatim. They must
//! come from static configuration, never from request data.

use crate::error::{Error, Result};
use crate::mapper::{extract_fields, extract_values};
use crate::traits::{FieldMut, Fields, Pool};
use crate::value::Value;

/// Render `$start, $start+1, ...` for `count` parameters.
pub fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A parameterized `INSERT ... RETURNING` statement together with the
/// scan targets that receive the returned row.
#[derive(Debug)]
pub struct InsertQuery<'o> {
    /// Full SQL text
    pub sql: String,
    /// Comma-joined insert column names
    pub columns: String,
    /// Comma-joined `$n` placeholders, aligned with `values`
    pub placeholders: String,
    /// Values bound to `$1..$n`
    pub values: Vec<Value>,
    /// Scan targets for every field of the output struct
    pub scan_targets: Vec<FieldMut<'o>>,
}

impl<'o> InsertQuery<'o> {
    /// Run the insert and write the returned row into the output struct.
    pub async fn fetch_into<P: Pool>(mut self, pool: &P) -> Result<()> {
        let row = pool
            .fetch_rows(&self.sql, self.values)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::Query("INSERT returned no row".to_string()))?;
        row.scan_into(&mut self.scan_targets)
    }
}

/// Build an `INSERT INTO schema.table (...) VALUES (...) RETURNING ...;`
/// statement.
///
/// Zero-valued fields of `insert` are left out so column defaults apply.
/// Every field of `output` is returned, and `output` is borrowed for the
/// returned scan targets.
///
/// Fails with [`Error::NoColumnsToInsert`] when every field of `insert` is
/// zero.
pub fn create_insert_query<'o, I, O>(
    insert: &I,
    output: &'o mut O,
    table: &str,
    schema: &str,
) -> Result<InsertQuery<'o>>
where
    I: Fields + ?Sized,
    O: Fields + ?Sized,
{
    let insert_fields = match extract_values(insert, true) {
        Ok(fields) => fields,
        Err(Error::NoFields) => return Err(Error::NoColumnsToInsert),
        Err(e) => return Err(e),
    };
    let output_fields = extract_fields(output, false)?;

    let columns = insert_fields.names.join(", ");
    let placeholders = placeholders(1, insert_fields.values.len());
    let returning = output_fields.names.join(", ");

    let sql = format!(
        "INSERT INTO {}.{} ({}) VALUES ({}) RETURNING {};",
        schema, table, columns, placeholders, returning
    );

    Ok(InsertQuery {
        sql,
        columns,
        placeholders,
        values: insert_fields.values,
        scan_targets: output_fields.pointers,
    })
}

/// The `SET` fragment of a partial update.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateParams {
    /// `col1 = $1, col2 = $2, ...`
    pub set_clause: String,
    /// Values bound to `$1..$n`
    pub values: Vec<Value>,
    /// First placeholder index free for the caller's WHERE clause
    pub next_param_index: usize,
}

/// Build the `SET` fragment of a partial update from the non-zero fields
/// of `obj`.
///
/// A field set to its zero value cannot be told apart from one that was
/// not provided; both are left out. Fails with
/// [`Error::NoFieldsToUpdate`] when nothing is left to set.
pub fn create_update_params<T: Fields + ?Sized>(obj: &T) -> Result<UpdateParams> {
    let fields = match extract_values(obj, true) {
        Ok(fields) => fields,
        Err(Error::NoFields) => return Err(Error::NoFieldsToUpdate),
        Err(e) => return Err(e),
    };

    let set_clause = fields
        .names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{} = ${}", name, i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let next_param_index = fields.values.len() + 1;

    Ok(UpdateParams {
        set_clause,
        values: fields.values,
        next_param_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::traits::{ExecuteResult, Field};
    use async_trait::async_trait;

    #[derive(Default)]
    struct NewPerson {
        first_name: String,
        last_name: String,
        age: i32,
        score: f64,
    }

    #[derive(Default)]
    struct PersonRow {
        id: i64,
        first_name: String,
        last_name: String,
        age: i32,
        score: f64,
    }

    macro_rules! impl_fields {
        ($ty:ty { $($field:ident),* }) => {
            impl Fields for $ty {
                fn fields(&self) -> Vec<Field<'_>> {
                    let mut out: Vec<Field<'_>> = Vec::new();
                    $(out.push(Field {
                        name: stringify!($field),
                        rename: None,
                        index: out.len(),
                        slot: &self.$field,
                    });)*
                    out
                }

                fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
                    let mut out: Vec<FieldMut<'_>> = Vec::new();
                    $(out.push(FieldMut {
                        name: stringify!($field),
                        rename: None,
                        index: out.len(),
                        slot: &mut self.$field,
                    });)*
                    out
                }
            }
        };
    }

    impl_fields!(NewPerson { first_name, last_name, age, score });
    impl_fields!(PersonRow { id, first_name, last_name, age, score });

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders(1, 3), "$1, $2, $3");
        assert_eq!(placeholders(4, 1), "$4");
        assert_eq!(placeholders(1, 0), "");
    }

    #[test]
    fn test_insert_query_structure() {
        let insert = NewPerson {
            first_name: "John".into(),
            last_name: "Doe".into(),
            ..Default::default()
        };
        let mut output = PersonRow::default();
        let query = create_insert_query(&insert, &mut output, "people", "app").unwrap();

        assert!(query.sql.contains(
            "INSERT INTO app.people (first_name, last_name) VALUES ($1, $2) \
             RETURNING id, first_name, last_name, age, score;"
        ));
        assert_eq!(query.columns, "first_name, last_name");
        assert_eq!(query.placeholders, "$1, $2");
        assert_eq!(query.values.len(), 2);
        assert_eq!(query.scan_targets.len(), 5);
    }

    #[test]
    fn test_insert_values_align_with_placeholders() {
        let insert = NewPerson {
            last_name: "Doe".into(),
            score: 1.25,
            ..Default::default()
        };
        let mut output = PersonRow::default();
        let query = create_insert_query(&insert, &mut output, "people", "app").unwrap();

        assert_eq!(query.columns, "last_name, score");
        assert_eq!(query.placeholders, "$1, $2");
        assert_eq!(
            query.values,
            vec![Value::String("Doe".into()), Value::F64(1.25)]
        );
    }

    #[test]
    fn test_empty_insert_rejected() {
        let insert = NewPerson::default();
        let mut output = PersonRow::default();
        let err = create_insert_query(&insert, &mut output, "people", "app").unwrap_err();
        assert!(matches!(err, Error::NoColumnsToInsert));
    }

    #[test]
    fn test_update_placeholder_continuity() {
        let update = NewPerson {
            first_name: "Jane".into(),
            last_name: "Roe".into(),
            age: 30,
            score: 0.0,
        };
        let params = create_update_params(&update).unwrap();
        assert_eq!(
            params.set_clause,
            "first_name = $1, last_name = $2, age = $3"
        );
        assert_eq!(params.values.len(), 3);
        assert_eq!(params.next_param_index, 4);
    }

    #[test]
    fn test_update_with_nothing_to_set() {
        let err = create_update_params(&NewPerson::default()).unwrap_err();
        assert!(matches!(err, Error::NoFieldsToUpdate));
    }

    struct OneRowPool(Record);

    #[async_trait]
    impl Pool for OneRowPool {
        async fn execute(&self, _sql: &str, _params: Vec<Value>) -> Result<ExecuteResult> {
            Ok(ExecuteResult::default())
        }

        async fn fetch_rows(&self, _sql: &str, _params: Vec<Value>) -> Result<Vec<Record>> {
            Ok(vec![self.0.clone()])
        }
    }

    #[tokio::test]
    async fn test_fetch_into_scans_returned_row() {
        let pool = OneRowPool(
            Record::new()
                .with("id", 17i64)
                .with("first_name", "John")
                .with("last_name", "Doe")
                .with("age", 0i32)
                .with("score", 0.5f64),
        );
        let insert = NewPerson {
            first_name: "John".into(),
            last_name: "Doe".into(),
            ..Default::default()
        };
        let mut output = PersonRow::default();
        create_insert_query(&insert, &mut output, "people", "app")
            .unwrap()
            .fetch_into(&pool)
            .await
            .unwrap();

        assert_eq!(output.id, 17);
        assert_eq!(output.first_name, "John");
        assert_eq!(output.score, 0.5);
    }
}
