//! Resolved types.

use rsty_ir::NodeId;

use crate::{FloatKind, IntKind};

/// A resolved type.
///
/// Nominal types (`Struct`, `Enum`, `Trait`, `TypeParam`) are keyed on the
/// id of their declaring node, so equality is declaration identity.
///
/// Build tuples through [`Ty::tuple`]; it keeps the empty tuple as `Unit`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Ty {
    /// Not enough information. Never an error.
    Unknown,
    /// `()`
    Unit,
    Bool,
    Char,
    /// `str`
    Str,
    Int(IntKind),
    Float(FloatKind),
    /// Tuple with at least one element.
    Tuple(Vec<Ty>),
    /// `&T` / `&mut T`
    Ref { inner: Box<Ty>, mutable: bool },
    Struct(NodeId),
    Enum(NodeId),
    Trait(NodeId),
    /// `fn(params) -> ret`
    Function { params: Vec<Ty>, ret: Box<Ty> },
    /// Generic parameter, opaque.
    TypeParam(NodeId),
}

impl Ty {
    /// Tuple of `elems`; no elements gives `Unit`.
    pub fn tuple(elems: Vec<Ty>) -> Ty {
        if elems.is_empty() {
            Ty::Unit
        } else {
            Ty::Tuple(elems)
        }
    }

    pub fn reference(inner: Ty, mutable: bool) -> Ty {
        Ty::Ref {
            inner: Box::new(inner),
            mutable,
        }
    }

    pub fn function(params: Vec<Ty>, ret: Ty) -> Ty {
        Ty::Function {
            params,
            ret: Box::new(ret),
        }
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Ty::Unknown)
    }

    /// Return type of a function type.
    pub fn fn_return(&self) -> Option<&Ty> {
        match self {
            Ty::Function { ret, .. } => Some(ret),
            _ => None,
        }
    }

    /// Declaring node of a nominal type.
    pub fn nominal_decl(&self) -> Option<NodeId> {
        match self {
            Ty::Struct(id) | Ty::Enum(id) | Ty::Trait(id) | Ty::TypeParam(id) => Some(*id),
            _ => None,
        }
    }

    /// Strip every layer of reference.
    pub fn peel_refs(&self) -> &Ty {
        let mut ty = self;
        while let Ty::Ref { inner, .. } = ty {
            ty = inner;
        }
        ty
    }
}
