//! Static description of the ledger tables, as the mapper sees them

use ledger_sql::statement::placeholders;
use ledger_sql::{Fields, FromRow};

use crate::models::{
    Account, Category, CreateAccount, CreateCategory, CreateTransaction, CreateUser, Transaction,
    UpdateAccount, UpdateCategory, UpdateTransaction, UpdateUser, User,
};

/// Column layout of one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub table: &'static str,
    /// Columns a create request can set, in declaration order
    pub insert_columns: Vec<String>,
    /// Columns an update request can set
    pub update_columns: Vec<String>,
    /// Columns read back after an insert and by every SELECT
    pub returning: Vec<String>,
}

impl TableInfo {
    fn of<C, U, R>(table: &'static str) -> Self
    where
        C: Fields + Default,
        U: Fields + Default,
        R: FromRow,
    {
        Self {
            table,
            insert_columns: columns(&C::default()),
            update_columns: columns(&U::default()),
            returning: R::column_names(),
        }
    }

    /// INSERT statement with every insertable column present
    pub fn insert_template(&self, schema: &str) -> String {
        format!(
            "INSERT INTO {}.{} ({}) VALUES ({}) RETURNING {};",
            schema,
            self.table,
            self.insert_columns.join(", "),
            placeholders(1, self.insert_columns.len()),
            self.returning.join(", ")
        )
    }
}

fn columns<T: Fields>(value: &T) -> Vec<String> {
    value
        .fields()
        .iter()
        .map(|field| field.column().into_owned())
        .collect()
}

/// Every table the store writes to
pub fn tables() -> Vec<TableInfo> {
    vec![
        TableInfo::of::<CreateUser, UpdateUser, User>(User::TABLE),
        TableInfo::of::<CreateAccount, UpdateAccount, Account>(Account::TABLE),
        TableInfo::of::<CreateCategory, UpdateCategory, Category>(Category::TABLE),
        TableInfo::of::<CreateTransaction, UpdateTransaction, Transaction>(Transaction::TABLE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_table() {
        let users = &tables()[0];
        assert_eq!(users.table, "users");
        assert_eq!(
            users.insert_columns,
            vec!["email", "first_name", "last_name", "password_hash"]
        );
        assert_eq!(
            users.insert_template("public"),
            "INSERT INTO public.users (email, first_name, last_name, password_hash) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, email, first_name, last_name, password_hash, created_at, updated_at;"
        );
    }

    #[test]
    fn test_returning_matches_output_fields() {
        let mut transaction = Transaction::default();
        let scan_columns: Vec<String> = transaction
            .fields_mut()
            .iter()
            .map(|f| f.column().into_owned())
            .collect();
        let info = tables()
            .into_iter()
            .find(|t| t.table == "transactions")
            .unwrap();
        assert_eq!(info.returning, scan_columns);
        assert!(info.returning.contains(&"transaction_date".to_string()));
    }

    #[test]
    fn test_update_columns_are_subset_of_returning() {
        for info in tables() {
            for column in &info.update_columns {
                assert!(
                    info.returning.contains(column),
                    "{}.{} is not readable",
                    info.table,
                    column
                );
            }
        }
    }
}
