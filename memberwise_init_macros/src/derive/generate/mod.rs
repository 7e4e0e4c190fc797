//! Token emission for the synthesized constructor.
//!
//! Renders an [`InitializerSpec`] as one `impl` block adding `pub fn new`.
//! Parameters and struct-literal entries are built as token lists and
//! interpolated by `quote`; nothing here is assembled as text, so separator
//! placement cannot go wrong.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

use super::parse::RecordInput;
use super::synthesize::{DeclaredDefault, FieldDescriptor, InitializerSpec, ParameterSpec};

/// Renders the constructor `impl` block for a record.
///
/// Rust has no default argument values, so a defaulted parameter (always an
/// `Option<..>` field) is rendered as `impl Into<Option<T>>`: call sites pass
/// either a `T` or `None`. Excluded fields are initialized from their own
/// declared default expression, the counterpart of a field declaration
/// keeping its `= value` clause.
pub(crate) fn constructor(record: &RecordInput, spec: &InitializerSpec) -> TokenStream {
    let by_name: HashMap<&Ident, &ParameterSpec> = spec
        .parameters
        .iter()
        .map(|param| (&param.name, param))
        .collect();

    let params: Vec<TokenStream> = spec.parameters.iter().map(parameter_tokens).collect();
    let inits: Vec<TokenStream> = record
        .fields
        .iter()
        .map(|field| field_init_tokens(field, &by_name))
        .collect();

    let ident = &record.ident;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();
    let doc = constructor_doc(ident);
    quote! {
        #[automatically_derived]
        impl #impl_generics #ident #ty_generics #where_clause {
            #[doc = #doc]
            #[must_use]
            pub fn new(#(#params),*) -> Self {
                Self { #(#inits,)* }
            }
        }
    }
}

pub(crate) fn constructor_doc(ident: &Ident) -> String {
    format!(
        "Memberwise constructor for `{ident}`; parameters follow field declaration order. \
         Defaulted parameters accept either a value or `None`."
    )
}

fn parameter_tokens(param: &ParameterSpec) -> TokenStream {
    let ParameterSpec {
        name,
        ty,
        has_default,
    } = param;
    if *has_default {
        quote! { #name: impl ::core::convert::Into<#ty> }
    } else {
        quote! { #name: #ty }
    }
}

/// One entry of the `Self { ... }` literal. Fields in the parameter list take
/// their parameter; excluded fields take their declared default.
fn field_init_tokens(
    field: &FieldDescriptor,
    params: &HashMap<&Ident, &ParameterSpec>,
) -> TokenStream {
    let name = &field.name;
    match params.get(name) {
        Some(param) if param.has_default => quote! { #name: #name.into() },
        Some(_) => quote! { #name },
        None => match &field.default {
            DeclaredDefault::Expr(expr) => quote! { #name: #expr },
            // Exclusion implies a declared value; for the frozen optional row
            // that value is the None literal itself.
            DeclaredDefault::NoneLiteral | DeclaredDefault::Absent => {
                quote! { #name: ::core::option::Option::None }
            }
        },
    }
}
