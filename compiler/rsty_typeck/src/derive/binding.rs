//! Type of a pattern binding.
//!
//! A binding has no annotation of its own. Its type comes from the
//! construct that introduces the whole pattern (a `let`, a parameter, an
//! `if let` / `while let` condition or a `match` arm) and is then narrowed
//! to the binding's position by the engine's [`BindingInference`].
//!
//! [`BindingInference`]: crate::BindingInference

use rsty_ir::{DeclKind, ExprKind, NodeId, NodeKind, StmtKind};
use rsty_types::Ty;

use crate::TypifyEngine;

pub(crate) fn binding_type(engine: &TypifyEngine<'_>, binding: NodeId) -> Ty {
    let top = top_pattern(engine, binding);
    match contributing_type(engine, top) {
        Some(ty) => engine
            .binding_inference()
            .infer_binding_type(engine, binding, top, ty),
        None => {
            tracing::debug!(?binding, ?top, "binding has no contributing type");
            Ty::Unknown
        }
    }
}

/// Outermost pattern containing `pat`: walk parents while they are
/// patterns.
fn top_pattern(engine: &TypifyEngine<'_>, pat: NodeId) -> NodeId {
    let tree = engine.tree();
    let mut top = pat;
    while let Some(parent) = tree.parent(top).filter(|&p| tree.kind(p).is_pat()) {
        top = parent;
    }
    top
}

/// Type the introducing construct gives the whole pattern.
///
/// `None` when the construct is not one that types its pattern, or when
/// it carries neither an annotation nor an expression.
fn contributing_type(engine: &TypifyEngine<'_>, top: NodeId) -> Option<Ty> {
    let tree = engine.tree();
    let owner = tree.parent(top)?;
    match tree.kind(owner) {
        // `let pat: ty = init;` prefers the annotation
        NodeKind::Stmt(StmtKind::Let { pat, ty, init }) if *pat == Some(top) => {
            match (ty, init) {
                (Some(ty), _) => Some(engine.resolve_annotation(*ty)),
                (None, Some(init)) => Some(engine.typify_expr(*init)),
                (None, None) => None,
            }
        }
        NodeKind::Decl(DeclKind::Param { pat, ty }) if *pat == Some(top) => {
            Some(ty.map_or(Ty::Unknown, |ty| engine.resolve_annotation(ty)))
        }
        NodeKind::ScopedLet { pat, scrutinee } if *pat == Some(top) => {
            scrutinee.map(|scrutinee| engine.typify_expr(scrutinee))
        }
        NodeKind::MatchArm { pat, .. } if *pat == Some(top) => {
            let matched = tree.parent(owner)?;
            match tree.kind(matched) {
                NodeKind::Expr(ExprKind::Match {
                    scrutinee: Some(scrutinee),
                    ..
                }) => Some(engine.typify_expr(*scrutinee)),
                _ => None,
            }
        }
        _ => None,
    }
}
