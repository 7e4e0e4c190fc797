//! Shallow `Option` detection.

use syn::{PathArguments, Type};

/// Returns `true` if `ty` is written as `Option<..>`.
///
/// The check inspects only the outermost path segment and accepts
/// fully-qualified forms such as `std::option::Option<T>`. It is not
/// recursive: `Vec<Option<T>>` is not an optional field.
pub(crate) fn is_option(ty: &Type) -> bool {
    let Type::Path(path) = ty else {
        return false;
    };
    if path.qself.is_some() {
        return false;
    }
    path.path.segments.last().is_some_and(|segment| {
        segment.ident == "Option"
            && matches!(segment.arguments, PathArguments::AngleBracketed(_))
    })
}
