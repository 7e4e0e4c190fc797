//! Input extraction for the `MemberwiseInit` derive.
//!
//! Converts the derive input into ordered [`FieldDescriptor`]s and validates
//! the `#[memberwise(...)]` attribute surface. Shape and attribute problems
//! are rejected here with spanned errors so the synthesis step stays total.

mod input;
mod type_utils;

pub(crate) use input::{RecordInput, parse_input};

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, ExprPath, Token};

use crate::derive::synthesize::{DeclaredDefault, FieldDescriptor};
use type_utils::is_option;

/// Raw attribute state for one field.
#[derive(Default)]
struct FieldAttrs {
    frozen: bool,
    default: Option<Expr>,
}

/// Iterate all `#[memberwise(...)]` attributes once and apply a callback.
fn parse_memberwise<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("memberwise")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Extracts `#[memberwise(...)]` metadata applied to a field.
///
/// The surface is two keys; anything else is a hard error rather than a
/// silently discarded typo.
fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_memberwise(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("frozen") => {
                out.frozen = true;
                Ok(())
            }
            Some("default") => {
                if !meta.input.peek(Token![=]) {
                    return Err(meta.error("`default` requires a value, e.g. `default = None`"));
                }
                if out.default.is_some() {
                    return Err(meta.error("duplicate `default` attribute"));
                }
                out.default = Some(meta.value()?.parse::<Expr>()?);
                Ok(())
            }
            _ => Err(meta.error(
                "unknown `memberwise` attribute; expected `frozen` or `default = <expr>`",
            )),
        }
    })?;
    Ok(out)
}

/// Builds the descriptor for one named field.
fn descriptor_from_field(field: &syn::Field) -> syn::Result<FieldDescriptor> {
    let attrs = parse_field_attrs(&field.attrs)?;
    let name = field
        .ident
        .clone()
        .ok_or_else(|| syn::Error::new_spanned(field, "MemberwiseInit requires named fields"))?;
    let default = match attrs.default {
        None => DeclaredDefault::Absent,
        Some(expr) if is_none_literal(&expr) => DeclaredDefault::NoneLiteral,
        Some(expr) => DeclaredDefault::Expr(expr),
    };
    Ok(FieldDescriptor {
        is_optional: is_option(&field.ty),
        ty: field.ty.clone(),
        is_frozen: attrs.frozen,
        name,
        default,
    })
}

/// Recognises the `None` path literal, plain or qualified
/// (`core::option::Option::None` and friends).
///
/// Shallow by design, like the `Option` type check: only the final path
/// segment is inspected.
fn is_none_literal(expr: &Expr) -> bool {
    let Expr::Path(ExprPath {
        qself: None, path, ..
    }) = expr
    else {
        return false;
    };
    path.segments
        .last()
        .is_some_and(|segment| segment.ident == "None" && segment.arguments.is_none())
}
