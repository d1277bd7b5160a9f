//! Struct literal expressions.

use rsty_ir::{DeclKind, ItemKind, NodeId, NodeKind};
use rsty_types::Ty;

use crate::derive::variant_enum_type;
use crate::TypifyEngine;

/// `S { .. }` is the struct `S`; `E::V { .. }` is the enum `E`.
pub(crate) fn struct_literal_type(engine: &TypifyEngine<'_>, literal: NodeId) -> Ty {
    let Some(decl) = engine.resolve_reference(literal) else {
        return Ty::Unknown;
    };
    match engine.tree().kind(decl) {
        NodeKind::Item(ItemKind::Struct { .. }) => engine.typify_item(decl),
        NodeKind::Decl(DeclKind::Variant { .. }) => variant_enum_type(engine, decl),
        _ => Ty::Unknown,
    }
}
