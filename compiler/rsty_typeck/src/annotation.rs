//! Type-annotation typifier: syntax → unresolved shape.

use rsty_ir::{NodeId, NodeKind, TypeKind};
use rsty_types::UnresolvedTy;

use crate::TypifyEngine;

/// Shape of a type annotation node.
///
/// Only tuples, references and paths have a shape. Arrays, slices, raw
/// pointers, fn pointers, `!` and `_` are outside the type model and give
/// `Unknown`, as does a node that is not an annotation at all.
pub(crate) fn typify_type_annotation(engine: &TypifyEngine<'_>, node: NodeId) -> UnresolvedTy {
    let NodeKind::Type(kind) = engine.tree().kind(node) else {
        return UnresolvedTy::Unknown;
    };
    match kind {
        TypeKind::Tuple(elems) if elems.is_empty() => UnresolvedTy::Unit,
        TypeKind::Tuple(elems) => UnresolvedTy::Tuple(elems.clone()),
        TypeKind::Path(path) => {
            let primitive = path
                .as_single_name()
                .and_then(|name| engine.config().primitives.lookup(engine.tree().text(name)));
            match primitive {
                Some(prim) => UnresolvedTy::Primitive(prim),
                None => UnresolvedTy::Path(path.clone()),
            }
        }
        TypeKind::Ref {
            inner: Some(inner),
            mutable,
        } => UnresolvedTy::Reference {
            inner: *inner,
            mutable: *mutable,
        },
        TypeKind::Ref { inner: None, .. }
        | TypeKind::Array { .. }
        | TypeKind::Slice(_)
        | TypeKind::Ptr { .. }
        | TypeKind::FnPtr { .. }
        | TypeKind::Never
        | TypeKind::Infer => UnresolvedTy::Unknown,
    }
}
