//! Expansion pipeline for the `MemberwiseInit` derive.
//!
//! Strictly linear, single pass: extract the record's field descriptors,
//! run the pure synthesis step, then render the constructor tokens. Only the
//! extractor can fail; synthesis is total over well-formed descriptors.

pub(crate) mod generate;
pub(crate) mod parse;
pub(crate) mod synthesize;

use proc_macro2::TokenStream;

pub(crate) fn expand(input: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let record = parse::parse_input(input)?;
    let spec = synthesize::synthesize(&record.fields);
    Ok(generate::constructor(&record, &spec))
}
