//! FromRow derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

use crate::attrs::{parse_struct_fields, FieldConfig};

fn column_tokens(config: &FieldConfig) -> TokenStream {
    match &config.rename {
        Some(column) => quote! { ::std::string::String::from(#column) },
        None => {
            let name = &config.name;
            quote! { ledger_sql::to_snake_case(#name) }
        }
    }
}

pub fn derive_from_row_impl(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_configs = parse_struct_fields(&input)?;

    // Generate field extraction code
    let field_extractions: Vec<TokenStream> = field_configs
        .iter()
        .map(|config| {
            let field_ident = &config.ident;
            let ty = &config.ty;

            if config.mapped {
                let column = column_tokens(config);
                quote! {
                    #field_ident: ledger_sql::RowExt::get::<#ty>(row, &#column)?
                }
            } else {
                // Fields without a column start from Default
                quote! {
                    #field_ident: <#ty as ::std::default::Default>::default()
                }
            }
        })
        .collect();

    let column_names: Vec<TokenStream> = field_configs
        .iter()
        .filter(|c| c.mapped)
        .map(column_tokens)
        .collect();

    let expanded = quote! {
        impl #impl_generics ledger_sql::FromRow for #name #ty_generics #where_clause {
            fn from_row<R: ledger_sql::Row>(row: &R) -> ledger_sql::Result<Self> {
                Ok(Self {
                    #(#field_extractions),*
                })
            }

            fn column_names() -> ::std::vec::Vec<::std::string::String> {
                vec![#(#column_names),*]
            }
        }
    };

    Ok(expanded)
}
