//! Fields derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Result};

use crate::attrs::{parse_struct_fields, FieldConfig};

pub fn derive_fields_impl(input: DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_configs = parse_struct_fields(&input)?;
    let mapped: Vec<&FieldConfig> = field_configs.iter().filter(|c| c.mapped).collect();

    let shared: Vec<TokenStream> = mapped
        .iter()
        .enumerate()
        .map(|(index, config)| {
            let field_ident = &config.ident;
            let field_name = &config.name;
            let rename = rename_tokens(config);
            quote! {
                ledger_sql::Field {
                    name: #field_name,
                    rename: #rename,
                    index: #index,
                    slot: &self.#field_ident,
                }
            }
        })
        .collect();

    let exclusive: Vec<TokenStream> = mapped
        .iter()
        .enumerate()
        .map(|(index, config)| {
            let field_ident = &config.ident;
            let field_name = &config.name;
            let rename = rename_tokens(config);
            quote! {
                ledger_sql::FieldMut {
                    name: #field_name,
                    rename: #rename,
                    index: #index,
                    slot: &mut self.#field_ident,
                }
            }
        })
        .collect();

    let expanded = quote! {
        impl #impl_generics ledger_sql::Fields for #name #ty_generics #where_clause {
            fn fields(&self) -> Vec<ledger_sql::Field<'_>> {
                vec![#(#shared),*]
            }

            fn fields_mut(&mut self) -> Vec<ledger_sql::FieldMut<'_>> {
                vec![#(#exclusive),*]
            }
        }
    };

    Ok(expanded)
}

fn rename_tokens(config: &FieldConfig) -> TokenStream {
    match &config.rename {
        Some(column) => quote! { Some(#column) },
        None => quote! { None },
    }
}
