//! Derivation rules shared by the typifiers.
//!
//! These rules type declarations that have no type syntax of their own
//! and must be derived from their surroundings: the `self` parameter from
//! the enclosing `impl`, a binding from the construct that introduces it,
//! a function from its signature, a variant from its enum.

mod binding;
mod function;
mod self_ty;
mod struct_literal;
mod variant;

pub(crate) use binding::binding_type;
pub(crate) use function::function_type;
pub(crate) use self_ty::self_type;
pub(crate) use struct_literal::struct_literal_type;
pub(crate) use variant::{variant_enum, variant_enum_type};
