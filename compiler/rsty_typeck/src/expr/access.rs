//! Path expressions and field accesses.

use rsty_ir::{DeclKind, NodeId, NodeKind};
use rsty_types::Ty;

use crate::TypifyEngine;

/// `x`, `E::V`, `self`: the type of whatever the path names.
pub(super) fn typify_path(engine: &TypifyEngine<'_>, node: NodeId) -> Ty {
    engine
        .resolve_reference(node)
        .map_or(Ty::Unknown, |decl| engine.typify(decl))
}

/// `s.name` / `t.0`: the declared type of the resolved field.
///
/// The receiver is not typed here; picking the field is the resolver's
/// job.
pub(super) fn typify_field(engine: &TypifyEngine<'_>, node: NodeId) -> Ty {
    let Some(field) = engine.resolve_reference(node) else {
        return Ty::Unknown;
    };
    match engine.tree().kind(field) {
        NodeKind::Decl(DeclKind::Field { ty, .. }) => {
            ty.map_or(Ty::Unknown, |ty| engine.resolve_annotation(ty))
        }
        NodeKind::Decl(DeclKind::TupleField { ty }) => engine.resolve_annotation(*ty),
        _ => Ty::Unknown,
    }
}
