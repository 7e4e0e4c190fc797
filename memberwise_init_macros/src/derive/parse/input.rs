//! Derive-input validation for the `MemberwiseInit` derive.
//!
//! Gathers the record identifier, generics, and field descriptors in one
//! pass so expansion can fail fast with a spanned diagnostic on unsupported
//! declaration shapes.

use syn::{Data, DeriveInput, Fields};

use super::descriptor_from_field;
use crate::derive::synthesize::FieldDescriptor;

/// The validated record: identifier, generics, and its ordered fields.
pub(crate) struct RecordInput {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub fields: Vec<FieldDescriptor>,
}

/// Validates the annotated declaration and extracts its field descriptors.
///
/// Anything other than a struct with named fields is rejected here, so the
/// synthesizer is never reached with an unsupported shape. Computed items
/// (methods, consts, nested types) cannot appear in a `DeriveInput` field
/// list, so no further filtering is needed.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<RecordInput> {
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "MemberwiseInit requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "MemberwiseInit can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        fields.push(descriptor_from_field(field)?);
    }
    Ok(RecordInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        fields,
    })
}
