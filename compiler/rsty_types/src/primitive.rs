//! Primitive types and the table of their spellings.

use rustc_hash::FxHashMap;

use crate::{FloatKind, IntKind, Ty};

/// A primitive type: one that a bare name denotes without resolution.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveTy {
    Bool,
    Char,
    /// `str`
    Str,
    Int(IntKind),
    Float(FloatKind),
}

impl PrimitiveTy {
    pub fn to_ty(self) -> Ty {
        match self {
            PrimitiveTy::Bool => Ty::Bool,
            PrimitiveTy::Char => Ty::Char,
            PrimitiveTy::Str => Ty::Str,
            PrimitiveTy::Int(kind) => Ty::Int(kind),
            PrimitiveTy::Float(kind) => Ty::Float(kind),
        }
    }

    /// Canonical Rust spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            PrimitiveTy::Bool => "bool",
            PrimitiveTy::Char => "char",
            PrimitiveTy::Str => "str",
            PrimitiveTy::Int(kind) => kind.as_str(),
            PrimitiveTy::Float(kind) => kind.as_str(),
        }
    }
}

impl From<PrimitiveTy> for Ty {
    fn from(prim: PrimitiveTy) -> Ty {
        prim.to_ty()
    }
}

/// Mapping from spelling to primitive type.
///
/// A single-name path in a type annotation is looked up here before any
/// nominal resolution happens, so these names shadow user declarations.
/// Hosts that support a different surface syntax can add or remove
/// spellings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimitiveTable {
    by_name: FxHashMap<Box<str>, PrimitiveTy>,
}

impl PrimitiveTable {
    /// A table without any spellings.
    pub fn empty() -> Self {
        PrimitiveTable {
            by_name: FxHashMap::default(),
        }
    }

    /// The Rust primitive set: `bool`, `char`, `str`, the twelve integer
    /// types and the two float types.
    pub fn rust() -> Self {
        let mut table = Self::empty();
        for prim in [PrimitiveTy::Bool, PrimitiveTy::Char, PrimitiveTy::Str]
            .into_iter()
            .chain(IntKind::ALL.into_iter().map(PrimitiveTy::Int))
            .chain(FloatKind::ALL.into_iter().map(PrimitiveTy::Float))
        {
            table.insert(prim.as_str(), prim);
        }
        table
    }

    pub fn lookup(&self, name: &str) -> Option<PrimitiveTy> {
        self.by_name.get(name).copied()
    }

    /// Add or replace a spelling. Returns the previous mapping.
    pub fn insert(&mut self, name: &str, prim: PrimitiveTy) -> Option<PrimitiveTy> {
        self.by_name.insert(name.into(), prim)
    }

    pub fn remove(&mut self, name: &str) -> Option<PrimitiveTy> {
        self.by_name.remove(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for PrimitiveTable {
    fn default() -> Self {
        Self::rust()
    }
}
