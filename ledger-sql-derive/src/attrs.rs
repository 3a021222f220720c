//! Parsing of `#[ledger(...)]` field attributes

use syn::{
    ext::IdentExt, spanned::Spanned, Data, DeriveInput, Error, Field, Fields, Ident, Result,
    Visibility,
};

/// Per-field configuration shared by both derives
pub struct FieldConfig {
    /// The field identifier
    pub ident: Ident,
    /// Field name with any `r#` prefix removed
    pub name: String,
    /// Explicit column name from `#[ledger(rename = "...")]`
    pub rename: Option<String>,
    /// Whether the field maps to a column: `pub` and not `#[ledger(skip)]`
    pub mapped: bool,
    /// The field type
    pub ty: syn::Type,
}

fn parse_field_config(field: &Field) -> Result<FieldConfig> {
    let ident = field
        .ident
        .clone()
        .ok_or_else(|| Error::new(field.span(), "tuple structs are not supported"))?;

    let mut rename = None;
    let mut skip = false;

    for attr in &field.attrs {
        if attr.path().is_ident("ledger") {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let value = meta.value()?;
                    let lit: syn::LitStr = value.parse()?;
                    if lit.value().trim().is_empty() {
                        return Err(Error::new(lit.span(), "column name must not be empty"));
                    }
                    rename = Some(lit.value());
                } else if meta.path.is_ident("skip") {
                    skip = true;
                } else {
                    return Err(meta.error(format!(
                        "unknown ledger attribute `{}`",
                        meta.path
                            .get_ident()
                            .map(|i| i.to_string())
                            .unwrap_or_default()
                    )));
                }
                Ok(())
            })?;
        }
    }

    let public = matches!(field.vis, Visibility::Public(_));

    Ok(FieldConfig {
        name: ident.unraw().to_string(),
        ident,
        rename,
        mapped: public && !skip,
        ty: field.ty.clone(),
    })
}

/// Parse every named field of a struct, rejecting enums, unions and tuple structs.
pub fn parse_struct_fields(input: &DeriveInput) -> Result<Vec<FieldConfig>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(Error::new(input.span(), "only named fields are supported")),
        },
        _ => return Err(Error::new(input.span(), "only structs are supported")),
    };

    fields.iter().map(parse_field_config).collect()
}
