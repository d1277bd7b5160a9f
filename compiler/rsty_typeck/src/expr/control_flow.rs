//! Blocks, `if` and loops.

use rsty_ir::{NodeId, NodeKind};
use rsty_types::Ty;

use crate::TypifyEngine;

/// Block expression: its tail expression, `()` without one.
///
/// A missing block (incomplete source) is `Unknown`.
pub(super) fn typify_block(engine: &TypifyEngine<'_>, block: Option<NodeId>) -> Ty {
    let Some(block) = block else {
        return Ty::Unknown;
    };
    match engine.tree().kind(block) {
        NodeKind::Block { tail: Some(tail), .. } => engine.typify_expr(*tail),
        NodeKind::Block { tail: None, .. } => Ty::Unit,
        _ => Ty::Unknown,
    }
}

/// `if`: `()` without an else branch, otherwise the then-block's type.
///
/// Branch types are not unified; the then-block speaks for both.
pub(super) fn typify_if(
    engine: &TypifyEngine<'_>,
    then_block: Option<NodeId>,
    else_branch: Option<NodeId>,
) -> Ty {
    if else_branch.is_none() {
        return Ty::Unit;
    }
    then_block.map_or(Ty::Unknown, |block| engine.typify_expr(block))
}
