//! Procedural macros for `memberwise_init`.
//!
//! The [`MemberwiseInit`] derive synthesizes a public memberwise constructor
//! for a named-field struct. Classification of each field follows the same
//! rules an IDE's autocomplete applies: fields that already carry a fixed
//! value are left out, optional mutable fields become omittable, and the rest
//! are required in declaration order.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derives a `pub fn new(...)` memberwise constructor.
///
/// Two field attributes steer classification:
///
/// - `#[memberwise(frozen)]` marks a field as assignable only at
///   construction. A frozen field with a declared `default` is excluded from
///   the constructor entirely; without one it becomes a required parameter.
/// - `#[memberwise(default = <expr>)]` supplies the field's own value.
///   Excluded fields are initialized from it. On an optional mutable field
///   the declared default is subsumed: the parameter always defaults to
///   `None` regardless of the expression.
///
/// Optional mutable fields are rendered as `impl Into<Option<T>>` parameters,
/// so call sites may pass either a `T` or `None`.
#[proc_macro_derive(MemberwiseInit, attributes(memberwise))]
pub fn derive_memberwise_init(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
