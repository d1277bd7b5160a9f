//! AST node kinds.
//!
//! Every node in a [`SyntaxTree`](crate::SyntaxTree) carries one
//! [`NodeKind`]. The kind is split by category so the type engine can
//! dispatch with a single `match` per category, while the structural nodes
//! (blocks, enum bodies, match arms, `if let` conditions) sit between the
//! categories and give the derivation rules something to navigate through.

mod expr;
mod item;
mod operators;
mod pat;

pub use expr::{ExprKind, FieldInit, FieldName, LitKind, Literal};
pub use item::{DeclKind, FnSig, ItemKind, StmtKind};
pub use operators::{BinaryOp, UnaryOp};
pub use pat::{FieldPat, PatKind, TypeKind};

use crate::{Name, NodeId};

/// The kind of a syntax tree node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeKind {
    /// Root of a file.
    SourceFile { items: Vec<NodeId> },
    Item(ItemKind),
    Decl(DeclKind),
    Stmt(StmtKind),
    Expr(ExprKind),
    Pat(PatKind),
    /// Syntactic type annotation.
    Type(TypeKind),
    /// `{ stmts; tail }`
    Block {
        stmts: Vec<NodeId>,
        tail: Option<NodeId>,
    },
    /// Variant list of an enum; variants are `DeclKind::Variant` nodes.
    EnumBody { variants: Vec<NodeId> },
    /// `pat if guard => body`
    MatchArm {
        pat: Option<NodeId>,
        guard: Option<NodeId>,
        body: Option<NodeId>,
    },
    /// `let pat = scrutinee` in the condition of `if let` / `while let`.
    ScopedLet {
        pat: Option<NodeId>,
        scrutinee: Option<NodeId>,
    },
}

impl NodeKind {
    #[inline]
    pub fn is_item(&self) -> bool {
        matches!(self, NodeKind::Item(_))
    }

    #[inline]
    pub fn is_expr(&self) -> bool {
        matches!(self, NodeKind::Expr(_))
    }

    #[inline]
    pub fn is_pat(&self) -> bool {
        matches!(self, NodeKind::Pat(_))
    }

    #[inline]
    pub fn is_type(&self) -> bool {
        matches!(self, NodeKind::Type(_))
    }

    /// Short category label for logs and error messages.
    pub fn category(&self) -> &'static str {
        match self {
            NodeKind::SourceFile { .. } => "source file",
            NodeKind::Item(_) => "item",
            NodeKind::Decl(_) => "declaration",
            NodeKind::Stmt(_) => "statement",
            NodeKind::Expr(_) => "expression",
            NodeKind::Pat(_) => "pattern",
            NodeKind::Type(_) => "type annotation",
            NodeKind::Block { .. } => "block",
            NodeKind::EnumBody { .. } => "enum body",
            NodeKind::MatchArm { .. } => "match arm",
            NodeKind::ScopedLet { .. } => "scoped let",
        }
    }

    /// Declared name of items, named declarations and binding patterns.
    pub fn name(&self) -> Option<Name> {
        match self {
            NodeKind::Item(item) => item.name(),
            NodeKind::Decl(decl) => decl.name(),
            NodeKind::Pat(PatKind::Binding { name, .. }) => Some(*name),
            _ => None,
        }
    }

    /// Signature of a free function or method.
    pub fn fn_sig(&self) -> Option<&FnSig> {
        match self {
            NodeKind::Item(ItemKind::Fn { sig, .. }) | NodeKind::Decl(DeclKind::Method { sig, .. }) => {
                Some(sig)
            }
            _ => None,
        }
    }

    /// Direct children in source order.
    pub fn children(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        match self {
            NodeKind::SourceFile { items } => out.extend(items),
            NodeKind::Item(item) => item.push_children(&mut out),
            NodeKind::Decl(decl) => decl.push_children(&mut out),
            NodeKind::Stmt(stmt) => stmt.push_children(&mut out),
            NodeKind::Expr(expr) => expr.push_children(&mut out),
            NodeKind::Pat(pat) => pat.push_children(&mut out),
            NodeKind::Type(ty) => ty.push_children(&mut out),
            NodeKind::Block { stmts, tail } => {
                out.extend(stmts);
                out.extend(*tail);
            }
            NodeKind::EnumBody { variants } => out.extend(variants),
            NodeKind::MatchArm { pat, guard, body } => {
                out.extend([*pat, *guard, *body].into_iter().flatten());
            }
            NodeKind::ScopedLet { pat, scrutinee } => {
                out.extend([*pat, *scrutinee].into_iter().flatten());
            }
        }
        out
    }
}
