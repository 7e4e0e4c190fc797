//! Memberwise-constructor synthesis.
//!
//! This is the only stage with decision logic: given the ordered field
//! descriptors of a record, decide which fields become constructor
//! parameters, which of those carry a `None` default, and which fields the
//! constructor body assigns. The parser and the emitter stay mechanical.
//!
//! [`synthesize`] is pure and deterministic. It keeps no state across
//! invocations, so processing many records concurrently needs no
//! coordination.


use syn::{Expr, Ident, Type};

/// Metadata for one stored field, in declaration order.
#[derive(Clone)]
pub(crate) struct FieldDescriptor {
    pub name: Ident,
    pub ty: Type,
    /// The written type is `Option<..>`.
    pub is_optional: bool,
    /// `#[memberwise(frozen)]`: assignable only at construction.
    pub is_frozen: bool,
    pub default: DeclaredDefault,
}

/// A field's own `#[memberwise(default = ...)]` expression, if any.
///
/// The `None` literal is kept distinct from other expressions because the
/// classification table treats a frozen optional field declared `= None` as
/// already initialized. Modelling the three states as one enum makes the
/// invariant "a null default implies a default is present" unrepresentable
/// rather than checked.
#[derive(Clone)]
pub(crate) enum DeclaredDefault {
    /// No `default` attribute on the field.
    Absent,
    /// A default expression other than the `None` literal.
    Expr(Expr),
    /// The default expression is literally `None` (plain or path-qualified).
    NoneLiteral,
}

impl DeclaredDefault {
    fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    fn is_none_literal(&self) -> bool {
        matches!(self, Self::NoneLiteral)
    }
}

/// One constructor parameter.
pub(crate) struct ParameterSpec {
    pub name: Ident,
    pub ty: Type,
    /// When set, the parameter defaults to the null literal. Synthesis never
    /// produces any other default value, including for fields whose own
    /// declared default is non-null.
    pub has_default: bool,
}

/// The synthesized constructor: parameters in declaration order, plus the
/// names of the fields the body assigns from them (also declaration order).
pub(crate) struct InitializerSpec {
    pub parameters: Vec<ParameterSpec>,
    pub assignments: Vec<Ident>,
}

/// How one field participates in the constructor.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum FieldRole {
    /// Parameter without a default; assigned in the body.
    Required,
    /// Parameter defaulting to `None`; assigned in the body.
    DefaultedToNone,
    /// No parameter and no assignment; the field keeps its declared value.
    Excluded,
}

/// Classifies a field on the two axes (optionality, mutability).
///
/// | optional | frozen | role |
/// |---|---|---|
/// | yes | yes | excluded iff the declared default is the `None` literal |
/// | yes | no  | parameter defaulting to `None` |
/// | no  | yes | excluded iff any default is declared |
/// | no  | no  | required parameter |
///
/// A frozen field that already carries a value can never be reassigned, so
/// it stays out of the constructor; a frozen field without one has no value
/// yet and must be required. Mutable fields always accept constructor input,
/// and an optional mutable field's own default is subsumed by the
/// synthesized `None` default.
pub(crate) fn classify(field: &FieldDescriptor) -> FieldRole {
    match (field.is_optional, field.is_frozen) {
        (true, true) => {
            if field.default.is_none_literal() {
                FieldRole::Excluded
            } else {
                FieldRole::Required
            }
        }
        (true, false) => FieldRole::DefaultedToNone,
        (false, true) => {
            if field.default.is_absent() {
                FieldRole::Required
            } else {
                FieldRole::Excluded
            }
        }
        (false, false) => FieldRole::Required,
    }
}

/// Synthesizes the constructor specification for an ordered field list.
///
/// Total over any well-formed input: both output sequences preserve the
/// relative order of the input, and a field is assigned iff it is a
/// parameter. An empty field list, or one where every field is excluded,
/// yields a no-argument constructor with an empty body.
pub(crate) fn synthesize(fields: &[FieldDescriptor]) -> InitializerSpec {
    let mut parameters = Vec::new();
    let mut assignments = Vec::new();
    for field in fields {
        let role = classify(field);
        if role == FieldRole::Excluded {
            continue;
        }
        parameters.push(ParameterSpec {
            name: field.name.clone(),
            ty: field.ty.clone(),
            has_default: role == FieldRole::DefaultedToNone,
        });
        assignments.push(field.name.clone());
    }
    InitializerSpec {
        parameters,
        assignments,
    }
}
