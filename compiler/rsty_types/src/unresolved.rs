//! Unresolved type shapes.

use rsty_ir::{NodeId, SymbolPath};

use crate::PrimitiveTy;

/// What a type annotation says, before any names are followed.
///
/// Tuple and reference shapes point at their component annotation nodes
/// instead of carrying resolved components; resolution happens lazily, one
/// level at a time. `Primitive` is the only shape whose meaning is already
/// final.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum UnresolvedTy {
    /// Annotation kind the type model does not cover, or a missing part.
    Unknown,
    /// `()`
    Unit,
    Primitive(PrimitiveTy),
    /// `(A, B)`, at least one element annotation.
    Tuple(Vec<NodeId>),
    /// `&A` / `&mut A`
    Reference { inner: NodeId, mutable: bool },
    /// A name still to be resolved: `Point`, `crate::m::T`, `Self`.
    Path(SymbolPath),
}

impl UnresolvedTy {
    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, UnresolvedTy::Unknown)
    }
}
