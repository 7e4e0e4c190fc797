//! Memberwise constructor synthesis for named-field structs.
//!
//! `#[derive(MemberwiseInit)]` adds a public `new` constructor whose
//! parameter list matches what an IDE's autocomplete would offer. Each field
//! is classified on two axes: whether its written type is `Option<..>`, and
//! whether it is marked `#[memberwise(frozen)]` (assignable only at
//! construction, the moral equivalent of a `let` stored property):
//!
//! - frozen fields with a declared `#[memberwise(default = ...)]` already
//!   carry their value and are left out of the constructor entirely;
//! - frozen fields without one become required parameters;
//! - optional mutable fields are always parameters and default to `None`,
//!   rendered as `impl Into<Option<T>>` so call sites pass a value or `None`;
//! - everything else is a required parameter.
//!
//! Parameters keep field declaration order. Excluded fields are initialized
//! from their own default expression.
//!
//! One quirk is deliberate: an optional mutable field's declared default is
//! discarded in favour of the synthesized `None` default, because a caller
//! who omits the argument expects the "no value" state, not the field's
//! fallback.
//!
//! ```rust
//! use memberwise_init::MemberwiseInit;
//!
//! #[derive(MemberwiseInit)]
//! struct Profile {
//!     name: String,
//!     #[memberwise(frozen, default = 1u32)]
//!     schema: u32,
//!     nickname: Option<String>,
//! }
//!
//! let p = Profile::new("Ada".to_owned(), "grace".to_owned());
//! assert_eq!(p.schema, 1);
//! assert_eq!(p.nickname.as_deref(), Some("grace"));
//!
//! let q = Profile::new("Ada".to_owned(), None);
//! assert!(q.nickname.is_none());
//! ```
//!
//! The implementation of the derive lives in the companion
//! `memberwise_init_macros` crate.

pub use memberwise_init_macros::MemberwiseInit;
