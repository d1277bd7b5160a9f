//! Pattern and type-annotation nodes.

use super::Literal;
use crate::{Name, NodeId, SymbolPath};

/// Field sub-pattern in a struct pattern: `name: pat`.
///
/// The shorthand `Point { x }` is `name: x, pat: <binding x>`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldPat {
    pub name: Name,
    pub pat: NodeId,
}

/// Pattern kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatKind {
    /// `x`, `mut x`, `ref x`, `ref mut x`, `x @ sub`.
    ///
    /// `mutable` is the `mut` marker; with `by_ref` it makes `ref mut`.
    Binding {
        name: Name,
        by_ref: bool,
        mutable: bool,
        sub: Option<NodeId>,
    },
    /// `_`
    Wild,
    /// `(a, b)`
    Tuple(Vec<NodeId>),
    /// `&p` / `&mut p`
    Ref { pat: NodeId, mutable: bool },
    /// `Path { field: pat, .. }`
    Struct { path: SymbolPath, fields: Vec<FieldPat> },
    /// `Path(a, b)`
    TupleStruct { path: SymbolPath, elems: Vec<NodeId> },
    /// Unit struct, unit variant or constant: `E::A`
    Path(SymbolPath),
    Lit(Literal),
}

impl PatKind {
    pub(crate) fn push_children(&self, out: &mut Vec<NodeId>) {
        match self {
            PatKind::Binding { sub, .. } => out.extend(*sub),
            PatKind::Wild | PatKind::Path(_) | PatKind::Lit(_) => {}
            PatKind::Tuple(elems) | PatKind::TupleStruct { elems, .. } => out.extend(elems),
            PatKind::Ref { pat, .. } => out.push(*pat),
            PatKind::Struct { fields, .. } => out.extend(fields.iter().map(|f| f.pat)),
        }
    }
}

/// Syntactic type annotation kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    /// `i32`, `Point`, `crate::m::T`, `Self`
    Path(SymbolPath),
    /// `()` or `(A, B)`
    Tuple(Vec<NodeId>),
    /// `&T` / `&mut T`
    Ref { inner: Option<NodeId>, mutable: bool },
    /// `[T; N]`
    Array {
        elem: Option<NodeId>,
        len: Option<NodeId>,
    },
    /// `[T]`
    Slice(Option<NodeId>),
    /// `*const T` / `*mut T`
    Ptr { inner: Option<NodeId>, mutable: bool },
    /// `fn(A) -> R`
    FnPtr {
        params: Vec<NodeId>,
        ret: Option<NodeId>,
    },
    /// `!`
    Never,
    /// `_`
    Infer,
}

impl TypeKind {
    pub(crate) fn push_children(&self, out: &mut Vec<NodeId>) {
        match self {
            TypeKind::Path(_) | TypeKind::Never | TypeKind::Infer => {}
            TypeKind::Tuple(elems) => out.extend(elems),
            TypeKind::Ref { inner, .. } | TypeKind::Ptr { inner, .. } => out.extend(*inner),
            TypeKind::Array { elem, len } => out.extend([*elem, *len].into_iter().flatten()),
            TypeKind::Slice(elem) => out.extend(*elem),
            TypeKind::FnPtr { params, ret } => {
                out.extend(params);
                out.extend(*ret);
            }
        }
    }
}
