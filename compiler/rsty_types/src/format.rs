//! Type formatting for hover text and debugging output.
//!
//! Types render in Rust spelling. Nominal types and type parameters print
//! the name of their declaring node, which is why formatting needs the
//! tree.

use std::fmt;

use rsty_ir::{NodeId, NodeKind, SyntaxTree, TypeKind};

use crate::{Ty, UnresolvedTy};

/// Placeholder for [`Ty::Unknown`] and unrenderable parts.
const UNKNOWN: &str = "<unknown>";

impl Ty {
    /// Format a type as a human-readable string.
    pub fn format(&self, tree: &SyntaxTree) -> String {
        let mut buf = String::new();
        self.format_into(tree, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_into(&self, tree: &SyntaxTree, buf: &mut String) {
        match self {
            Ty::Unknown => buf.push_str(UNKNOWN),
            Ty::Unit => buf.push_str("()"),
            Ty::Bool => buf.push_str("bool"),
            Ty::Char => buf.push_str("char"),
            Ty::Str => buf.push_str("str"),
            Ty::Int(kind) => buf.push_str(kind.as_str()),
            Ty::Float(kind) => buf.push_str(kind.as_str()),
            Ty::Tuple(elems) => {
                buf.push('(');
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    elem.format_into(tree, buf);
                }
                if elems.len() == 1 {
                    buf.push(',');
                }
                buf.push(')');
            }
            Ty::Ref { inner, mutable } => {
                buf.push_str(if *mutable { "&mut " } else { "&" });
                inner.format_into(tree, buf);
            }
            Ty::Struct(id) | Ty::Enum(id) | Ty::Trait(id) | Ty::TypeParam(id) => {
                push_decl_name(tree, *id, buf);
            }
            Ty::Function { params, ret } => {
                buf.push_str("fn(");
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    param.format_into(tree, buf);
                }
                buf.push(')');
                if **ret != Ty::Unit {
                    buf.push_str(" -> ");
                    ret.format_into(tree, buf);
                }
            }
        }
    }

    /// Display adapter: `format!("{}", ty.display(&tree))`.
    pub fn display<'a>(&'a self, tree: &'a SyntaxTree) -> TyDisplay<'a> {
        TyDisplay { ty: self, tree }
    }
}

/// Display adapter returned by [`Ty::display`].
pub struct TyDisplay<'a> {
    ty: &'a Ty,
    tree: &'a SyntaxTree,
}

impl fmt::Display for TyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ty.format(self.tree))
    }
}

impl UnresolvedTy {
    /// Format the shape, rendering component annotations as written.
    pub fn format(&self, tree: &SyntaxTree) -> String {
        let mut buf = String::new();
        match self {
            UnresolvedTy::Unknown => buf.push_str(UNKNOWN),
            UnresolvedTy::Unit => buf.push_str("()"),
            UnresolvedTy::Primitive(prim) => buf.push_str(prim.as_str()),
            UnresolvedTy::Tuple(elems) => push_annotation_list(tree, elems, true, &mut buf),
            UnresolvedTy::Reference { inner, mutable } => {
                buf.push_str(if *mutable { "&mut " } else { "&" });
                push_annotation(tree, *inner, &mut buf);
            }
            UnresolvedTy::Path(path) => {
                buf.push_str(&path.display(tree.interner()).to_string());
            }
        }
        buf
    }
}

fn push_decl_name(tree: &SyntaxTree, id: NodeId, buf: &mut String) {
    match tree.name_of(id) {
        Some(name) => buf.push_str(tree.text(name)),
        None => buf.push_str(UNKNOWN),
    }
}

/// Render a type annotation node the way it was written.
fn push_annotation(tree: &SyntaxTree, id: NodeId, buf: &mut String) {
    let Some(NodeKind::Type(kind)) = tree.get(id).map(|node| &node.kind) else {
        buf.push_str(UNKNOWN);
        return;
    };
    match kind {
        TypeKind::Path(path) => buf.push_str(&path.display(tree.interner()).to_string()),
        TypeKind::Tuple(elems) => push_annotation_list(tree, elems, true, buf),
        TypeKind::Ref { inner, mutable } => {
            buf.push_str(if *mutable { "&mut " } else { "&" });
            push_optional_annotation(tree, *inner, buf);
        }
        TypeKind::Ptr { inner, mutable } => {
            buf.push_str(if *mutable { "*mut " } else { "*const " });
            push_optional_annotation(tree, *inner, buf);
        }
        TypeKind::Array { elem, .. } => {
            buf.push('[');
            push_optional_annotation(tree, *elem, buf);
            buf.push_str("; _]");
        }
        TypeKind::Slice(elem) => {
            buf.push('[');
            push_optional_annotation(tree, *elem, buf);
            buf.push(']');
        }
        TypeKind::FnPtr { params, ret } => {
            buf.push_str("fn");
            push_annotation_list(tree, params, false, buf);
            if let Some(ret) = ret {
                buf.push_str(" -> ");
                push_annotation(tree, *ret, buf);
            }
        }
        TypeKind::Never => buf.push('!'),
        TypeKind::Infer => buf.push('_'),
    }
}

fn push_optional_annotation(tree: &SyntaxTree, id: Option<NodeId>, buf: &mut String) {
    match id {
        Some(id) => push_annotation(tree, id, buf),
        None => buf.push_str(UNKNOWN),
    }
}

/// `(a, b)`; with `tuple` set a single element gets a trailing comma.
fn push_annotation_list(tree: &SyntaxTree, elems: &[NodeId], tuple: bool, buf: &mut String) {
    buf.push('(');
    for (i, elem) in elems.iter().enumerate() {
        if i > 0 {
            buf.push_str(", ");
        }
        push_annotation(tree, *elem, buf);
    }
    if tuple && elems.len() == 1 {
        buf.push(',');
    }
    buf.push(')');
}
