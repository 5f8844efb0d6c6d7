//! Cross-cutting codec policy: which element types qualify for the array
//! fast path, plus small macros for declaring descriptor tables tersely.

use crate::descriptor::{Kind, TypeDescriptor};

/// The integer-family kind behind a type, unwrapping through aliases.
/// `None` for types that must go through the slow, per-element path
/// (message, array, bool).
pub(crate) fn integer_family_kind(ty: &TypeDescriptor) -> Option<Kind> {
    match ty {
        TypeDescriptor::Byte => Some(Kind::Byte),
        TypeDescriptor::Uint { .. } => Some(Kind::Uint),
        TypeDescriptor::Int { .. } => Some(Kind::Int),
        TypeDescriptor::Enum(_) => Some(Kind::Enum),
        TypeDescriptor::Alias(to) => integer_family_kind(to),
        TypeDescriptor::Bool | TypeDescriptor::Array(_) | TypeDescriptor::Message(_) => None,
    }
}

/// Array fast-path eligibility: standard wire width and an integer-family
/// element, possibly through an alias chain.
pub(crate) fn is_fast_path(element: &TypeDescriptor) -> bool {
    crate::constants::is_standard_width(element.nbits()) && integer_family_kind(element).is_some()
}

/// Declares a `FieldDescriptor` with less ceremony than the struct literal.
macro_rules! field {
    ($name:expr, $offset:expr, $ty:expr) => {
        $crate::descriptor::FieldDescriptor {
            name: $name,
            offset: $offset,
            ty: $ty,
        }
    };
}
pub(crate) use field;
