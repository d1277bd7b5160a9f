//! Function type assembly.

use rsty_ir::{DeclKind, NodeId, NodeKind};
use rsty_types::Ty;

use crate::derive::self_type;
use crate::TypifyEngine;

/// `fn(self?, params..) -> ret` for a free function or method.
///
/// The receiver comes first when there is one. Unannotated parameters are
/// `Unknown`; a missing return annotation is `()`.
pub(crate) fn function_type(engine: &TypifyEngine<'_>, function: NodeId) -> Ty {
    let tree = engine.tree();
    let Some(sig) = tree.kind(function).fn_sig() else {
        return Ty::Unknown;
    };

    let receiver = sig.self_param.map(|param| self_type(engine, param));
    let params = sig.params.iter().map(|&param| match tree.kind(param) {
        NodeKind::Decl(DeclKind::Param { ty: Some(ty), .. }) => engine.resolve_annotation(*ty),
        _ => Ty::Unknown,
    });
    let params = receiver.into_iter().chain(params).collect();

    let ret = sig
        .ret_ty
        .map_or(Ty::Unit, |ret| engine.resolve_annotation(ret));

    Ty::function(params, ret)
}
