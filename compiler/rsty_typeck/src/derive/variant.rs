//! Enum variants.

use rsty_ir::{ItemKind, NodeId, NodeKind};
use rsty_types::Ty;

use crate::TypifyEngine;

/// Enum declaration owning a variant: variant → enum body → enum.
pub(crate) fn variant_enum(engine: &TypifyEngine<'_>, variant: NodeId) -> Option<NodeId> {
    let tree = engine.tree();
    let body = tree.parent(variant)?;
    if !matches!(tree.kind(body), NodeKind::EnumBody { .. }) {
        return None;
    }
    let owner = tree.parent(body)?;
    matches!(tree.kind(owner), NodeKind::Item(ItemKind::Enum { .. })).then_some(owner)
}

/// A variant has the type of its enum.
pub(crate) fn variant_enum_type(engine: &TypifyEngine<'_>, variant: NodeId) -> Ty {
    variant_enum(engine, variant).map_or(Ty::Unknown, |owner| engine.typify_item(owner))
}
