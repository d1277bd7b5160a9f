//! Calls and method calls.

use rsty_ir::{DeclKind, ExprKind, NodeId, NodeKind};
use rsty_types::Ty;

use crate::{derive, TypifyEngine};

/// `f(args)`.
///
/// A path callee naming an enum variant constructs the enum. Any other
/// callee is typed as an expression and must be a function type.
pub(super) fn typify_call(engine: &TypifyEngine<'_>, callee: NodeId) -> Ty {
    if let NodeKind::Expr(ExprKind::Path(_)) = engine.tree().kind(callee) {
        if let Some(decl) = engine.resolve_reference(callee) {
            if let NodeKind::Decl(DeclKind::Variant { .. }) = engine.tree().kind(decl) {
                return derive::variant_enum_type(engine, decl);
            }
        }
    }
    match engine.typify_expr(callee) {
        Ty::Function { ret, .. } => *ret,
        _ => Ty::Unknown,
    }
}

/// `recv.method(args)`: the return type of the resolved method.
pub(super) fn typify_method_call(engine: &TypifyEngine<'_>, node: NodeId) -> Ty {
    let Some(decl) = engine.resolve_reference(node) else {
        return Ty::Unknown;
    };
    if engine.tree().kind(decl).fn_sig().is_none() {
        return Ty::Unknown;
    }
    match derive::function_type(engine, decl) {
        Ty::Function { ret, .. } => *ret,
        _ => Ty::Unknown,
    }
}
