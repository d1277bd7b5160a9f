//! Position-based queries for editor features.

use rsty_ir::{DeclKind, NodeId, NodeKind, PatKind};
use rsty_types::Ty;

use crate::TypifyEngine;

/// Type of the innermost typeable node covering `offset` (hover).
///
/// Candidates are expressions and the named entities
/// [`TypifyEngine::typify`] understands (items, bindings, `self`,
/// variants, methods, type parameters). `None` if nothing covers
/// `offset`.
pub fn type_at_offset(engine: &TypifyEngine<'_>, offset: u32) -> Option<(NodeId, Ty)> {
    let node = engine.tree().node_at_offset(offset, is_typeable)?;
    let ty = if engine.tree().kind(node).is_expr() {
        engine.typify_expr(node)
    } else {
        engine.typify(node)
    };
    Some((node, ty))
}

fn is_typeable(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::Expr(_)
            | NodeKind::Item(_)
            | NodeKind::Pat(PatKind::Binding { .. })
            | NodeKind::Decl(
                DeclKind::SelfParam { .. }
                    | DeclKind::Variant { .. }
                    | DeclKind::Method { .. }
                    | DeclKind::TypeParam { .. }
            )
    )
}
