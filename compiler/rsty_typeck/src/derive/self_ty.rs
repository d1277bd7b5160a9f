//! Type of the `self` parameter.

use rsty_ir::{DeclKind, ItemKind, NodeId, NodeKind};
use rsty_types::Ty;

use crate::TypifyEngine;

/// `self` is the target type of the nearest enclosing `impl`; `&self` and
/// `&mut self` borrow it.
///
/// Outside an `impl` (trait default methods included) the underlying type
/// is `Unknown`, but a `&` receiver still yields a reference.
pub(crate) fn self_type(engine: &TypifyEngine<'_>, self_param: NodeId) -> Ty {
    let tree = engine.tree();
    let NodeKind::Decl(DeclKind::SelfParam { is_ref, mutable }) = *tree.kind(self_param) else {
        return Ty::Unknown;
    };

    let target = tree
        .enclosing(self_param, |kind| {
            matches!(kind, NodeKind::Item(ItemKind::Impl { .. }))
        })
        .and_then(|imp| match tree.kind(imp) {
            NodeKind::Item(ItemKind::Impl { target, .. }) => *target,
            _ => None,
        });
    let ty = target.map_or(Ty::Unknown, |target| engine.resolve_annotation(target));

    if is_ref {
        Ty::reference(ty, mutable)
    } else {
        ty
    }
}
