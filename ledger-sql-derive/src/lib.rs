//! Derive macros for the ledger-sql field mapper
//!
//! This crate provides the following derive macros:
//! - `Fields` - Describes a struct's public fields as ordered column slots
//! - `FromRow` - Maps result rows to Rust structs
//!
//! These macros are re-exported from the `ledger-sql` crate, so users
//! typically don't need to depend on this crate directly.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod fields;
mod from_row;

/// Derive macro for describing a struct's fields to the mapper.
///
/// Only `pub` fields take part, in declaration order. Each field type must
/// implement `ToValue`, `FromValue` and `IsZero`.
///
/// # Attributes
///
/// - `#[ledger(rename = "column_name")]` - Use this column name instead of
///   the snake_case field name
/// - `#[ledger(skip)]` - Leave a public field out
///
/// # Example
///
/// ```ignore
/// use ledger_sql::Fields;
///
/// #[derive(Fields)]
/// pub struct UpdateAccount {
///     pub name: String,
///     #[ledger(rename = "currency_code")]
///     pub currency: String,
///     internal_note: String, // not public, never mapped
/// }
/// ```
#[proc_macro_derive(Fields, attributes(ledger))]
pub fn derive_fields(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    fields::derive_fields_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derive macro for mapping result rows to Rust structs.
///
/// Public fields are read from the column of the same snake_case name (or
/// the `rename`d one); other fields start from `Default`.
///
/// # Attributes
///
/// - `#[ledger(rename = "column_name")]` - Use a different column name for this field
/// - `#[ledger(skip)]` - Don't read this field; it starts from `Default`
///
/// # Example
///
/// ```ignore
/// use ledger_sql::FromRow;
///
/// #[derive(FromRow)]
/// pub struct User {
///     pub id: i64,
///     pub email: String,
/// }
/// ```
#[proc_macro_derive(FromRow, attributes(ledger))]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    from_row::derive_from_row_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
