//! Unit tests for constructor token emission, run through the full pipeline.

use anyhow::{Result, anyhow, ensure};
use quote::quote;
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use super::constructor_doc;
use crate::derive::expand;

fn expansion(input: &DeriveInput) -> Result<String> {
    Ok(expand(input).map_err(|err| anyhow!(err))?.to_string())
}

#[rstest]
fn required_fields_render_as_plain_parameters() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Pair {
            a: i64,
            b: bool,
        }
    };
    let doc = constructor_doc(&parse_quote!(Pair));
    let expected = quote! {
        #[automatically_derived]
        impl Pair {
            #[doc = #doc]
            #[must_use]
            pub fn new(a: i64, b: bool) -> Self {
                Self { a, b, }
            }
        }
    }
    .to_string();
    let tokens = expansion(&input)?;
    ensure!(
        tokens == expected,
        "generated tokens differ: {tokens} != {expected}"
    );
    Ok(())
}

#[rstest]
fn excluded_fields_fall_back_to_their_declared_defaults() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Config {
            #[memberwise(frozen)]
            a: Option<String>,
            #[memberwise(frozen, default = None)]
            b: Option<u32>,
            c: Option<u32>,
            #[memberwise(frozen, default = 7)]
            d: u32,
        }
    };
    let doc = constructor_doc(&parse_quote!(Config));
    let expected = quote! {
        #[automatically_derived]
        impl Config {
            #[doc = #doc]
            #[must_use]
            pub fn new(a: Option<String>, c: impl ::core::convert::Into<Option<u32> >) -> Self {
                Self {
                    a,
                    b: ::core::option::Option::None,
                    c: c.into(),
                    d: 7,
                }
            }
        }
    }
    .to_string();
    let tokens = expansion(&input)?;
    ensure!(
        tokens == expected,
        "generated tokens differ: {tokens} != {expected}"
    );
    Ok(())
}

#[rstest]
fn empty_records_get_a_no_argument_constructor() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Empty {}
    };
    let doc = constructor_doc(&parse_quote!(Empty));
    let expected = quote! {
        #[automatically_derived]
        impl Empty {
            #[doc = #doc]
            #[must_use]
            pub fn new() -> Self {
                Self {}
            }
        }
    }
    .to_string();
    let tokens = expansion(&input)?;
    ensure!(
        tokens == expected,
        "generated tokens differ: {tokens} != {expected}"
    );
    Ok(())
}

#[rstest]
fn generics_carry_over_to_the_impl_block() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Tagged<T: Clone> {
            value: T,
            label: Option<String>,
        }
    };
    let doc = constructor_doc(&parse_quote!(Tagged));
    let expected = quote! {
        #[automatically_derived]
        impl<T: Clone> Tagged<T> {
            #[doc = #doc]
            #[must_use]
            pub fn new(value: T, label: impl ::core::convert::Into<Option<String> >) -> Self {
                Self {
                    value,
                    label: label.into(),
                }
            }
        }
    }
    .to_string();
    let tokens = expansion(&input)?;
    ensure!(
        tokens == expected,
        "generated tokens differ: {tokens} != {expected}"
    );
    Ok(())
}
