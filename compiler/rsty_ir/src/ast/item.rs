//! Item and declaration nodes.
//!
//! Items are the top-level declarations of a module. Declarations are the
//! named constructs that live inside items (fields, variants, methods,
//! parameters, generic parameters).

use crate::{Name, NodeId, SymbolPath};

/// Function signature, shared by free functions and methods.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FnSig {
    /// `DeclKind::TypeParam` nodes.
    pub generics: Vec<NodeId>,
    /// `DeclKind::SelfParam` node, for methods with a receiver.
    pub self_param: Option<NodeId>,
    /// `DeclKind::Param` nodes, in declaration order.
    pub params: Vec<NodeId>,
    /// Return type annotation.
    pub ret_ty: Option<NodeId>,
    /// Body block expression.
    pub body: Option<NodeId>,
}

impl FnSig {
    fn push_children(&self, out: &mut Vec<NodeId>) {
        out.extend(&self.generics);
        out.extend(self.self_param);
        out.extend(&self.params);
        out.extend(self.ret_ty);
        out.extend(self.body);
    }
}

/// Item kinds.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ItemKind {
    /// Fields are `DeclKind::Field` or `DeclKind::TupleField` nodes.
    Struct {
        name: Name,
        generics: Vec<NodeId>,
        fields: Vec<NodeId>,
    },
    /// `body` is a `NodeKind::EnumBody`.
    Enum {
        name: Name,
        generics: Vec<NodeId>,
        body: Option<NodeId>,
    },
    TypeAlias {
        name: Name,
        generics: Vec<NodeId>,
        ty: Option<NodeId>,
    },
    Fn {
        name: Name,
        sig: FnSig,
    },
    /// Members are `DeclKind::Method` nodes.
    Trait {
        name: Name,
        generics: Vec<NodeId>,
        members: Vec<NodeId>,
    },
    /// `target` is the implementing type annotation (`impl Target`).
    Impl {
        generics: Vec<NodeId>,
        trait_ref: Option<NodeId>,
        target: Option<NodeId>,
        members: Vec<NodeId>,
    },
    Const {
        name: Name,
        ty: Option<NodeId>,
        value: Option<NodeId>,
    },
    Static {
        name: Name,
        mutable: bool,
        ty: Option<NodeId>,
        value: Option<NodeId>,
    },
    Mod {
        name: Name,
        items: Vec<NodeId>,
    },
    Use {
        path: SymbolPath,
    },
}

impl ItemKind {
    /// Declared name. `impl` and `use` items have none.
    pub fn name(&self) -> Option<Name> {
        match self {
            ItemKind::Struct { name, .. }
            | ItemKind::Enum { name, .. }
            | ItemKind::TypeAlias { name, .. }
            | ItemKind::Fn { name, .. }
            | ItemKind::Trait { name, .. }
            | ItemKind::Const { name, .. }
            | ItemKind::Static { name, .. }
            | ItemKind::Mod { name, .. } => Some(*name),
            ItemKind::Impl { .. } | ItemKind::Use { .. } => None,
        }
    }

    pub(crate) fn push_children(&self, out: &mut Vec<NodeId>) {
        match self {
            ItemKind::Struct {
                generics, fields, ..
            } => {
                out.extend(generics);
                out.extend(fields);
            }
            ItemKind::Enum { generics, body, .. } => {
                out.extend(generics);
                out.extend(*body);
            }
            ItemKind::TypeAlias { generics, ty, .. } => {
                out.extend(generics);
                out.extend(*ty);
            }
            ItemKind::Fn { sig, .. } => sig.push_children(out),
            ItemKind::Trait {
                generics, members, ..
            } => {
                out.extend(generics);
                out.extend(members);
            }
            ItemKind::Impl {
                generics,
                trait_ref,
                target,
                members,
            } => {
                out.extend(generics);
                out.extend([*trait_ref, *target].into_iter().flatten());
                out.extend(members);
            }
            ItemKind::Const { ty, value, .. } | ItemKind::Static { ty, value, .. } => {
                out.extend([*ty, *value].into_iter().flatten());
            }
            ItemKind::Mod { items, .. } => out.extend(items),
            ItemKind::Use { .. } => {}
        }
    }
}

/// Named declarations that are not items.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DeclKind {
    /// `self`, `mut self`, `&self`, `&mut self`.
    ///
    /// `mutable` is the `mut` marker; with `is_ref` it makes the receiver
    /// `&mut self`.
    SelfParam { is_ref: bool, mutable: bool },
    /// Function or closure parameter; `pat` is the bound pattern.
    Param {
        pat: Option<NodeId>,
        ty: Option<NodeId>,
    },
    /// Named struct or variant field.
    Field { name: Name, ty: Option<NodeId> },
    /// Positional struct or variant field.
    TupleField { ty: NodeId },
    /// Enum variant; fields are `Field` or `TupleField` nodes.
    Variant { name: Name, fields: Vec<NodeId> },
    /// Method inside an `impl` or `trait`.
    Method { name: Name, sig: FnSig },
    /// Generic parameter.
    TypeParam { name: Name },
}

impl DeclKind {
    /// Declared name. Parameters, tuple fields and `self` have none.
    pub fn name(&self) -> Option<Name> {
        match self {
            DeclKind::Field { name, .. }
            | DeclKind::Variant { name, .. }
            | DeclKind::Method { name, .. }
            | DeclKind::TypeParam { name } => Some(*name),
            DeclKind::SelfParam { .. } | DeclKind::Param { .. } | DeclKind::TupleField { .. } => {
                None
            }
        }
    }

    pub(crate) fn push_children(&self, out: &mut Vec<NodeId>) {
        match self {
            DeclKind::SelfParam { .. } | DeclKind::TypeParam { .. } => {}
            DeclKind::Param { pat, ty } => out.extend([*pat, *ty].into_iter().flatten()),
            DeclKind::Field { ty, .. } => out.extend(*ty),
            DeclKind::TupleField { ty } => out.push(*ty),
            DeclKind::Variant { fields, .. } => out.extend(fields),
            DeclKind::Method { sig, .. } => sig.push_children(out),
        }
    }
}

/// Statement kinds. Expression statements without `;` are just expression
/// nodes listed in the block.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `let pat: ty = init;`
    Let {
        pat: Option<NodeId>,
        ty: Option<NodeId>,
        init: Option<NodeId>,
    },
    /// `expr;`
    Semi(NodeId),
}

impl StmtKind {
    pub(crate) fn push_children(&self, out: &mut Vec<NodeId>) {
        match self {
            StmtKind::Let { pat, ty, init } => {
                out.extend([*pat, *ty, *init].into_iter().flatten());
            }
            StmtKind::Semi(expr) => out.push(*expr),
        }
    }
}
