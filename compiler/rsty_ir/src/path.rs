//! Symbolic paths as written in source (`a::b::C`, `Self`, `super::x`).
//!
//! A path is split into its head and the segments that follow it. Paths
//! are purely syntactic; following one to a declaration is the resolver's
//! job.

use std::fmt;

use crate::{Name, StringInterner, StringLookup};

/// First component of a path.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum PathHead {
    /// An ordinary identifier.
    Named(Name),
    /// `self` (the value or the current module).
    SelfValue,
    /// `Self` (the implementing type).
    SelfType,
    /// `super`
    Super,
    /// `crate`
    Crate,
}

/// A symbolic path: a head plus the segments after it.
///
/// `foo` has head `Named(foo)` and no segments; `a::b::c` has head
/// `Named(a)` and segments `[b, c]`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolPath {
    pub head: PathHead,
    pub segments: Vec<Name>,
}

impl SymbolPath {
    /// A single-identifier path.
    pub fn single(name: Name) -> Self {
        SymbolPath {
            head: PathHead::Named(name),
            segments: Vec::new(),
        }
    }

    /// Create a path from a head and trailing segments.
    pub fn new(head: PathHead, segments: Vec<Name>) -> Self {
        SymbolPath { head, segments }
    }

    /// Parse `a::b::c` text, interning each segment.
    ///
    /// A leading `self`, `Self`, `super` or `crate` becomes the matching
    /// head. Empty segments (from `::a` or `a::::b`) are skipped.
    pub fn parse(text: &str, interner: &StringInterner) -> Self {
        let mut parts = text.split("::").map(str::trim).filter(|s| !s.is_empty());
        let head = match parts.next() {
            Some("self") => PathHead::SelfValue,
            Some("Self") => PathHead::SelfType,
            Some("super") => PathHead::Super,
            Some("crate") => PathHead::Crate,
            Some(ident) => PathHead::Named(interner.intern(ident)),
            None => PathHead::Named(Name::EMPTY),
        };
        let segments = parts.map(|s| interner.intern(s)).collect();
        SymbolPath { head, segments }
    }

    /// True when the path is one plain identifier with no qualifier.
    ///
    /// Only such paths may name a primitive type.
    pub fn is_single_name(&self) -> bool {
        matches!(self.head, PathHead::Named(_)) && self.segments.is_empty()
    }

    /// The identifier of a single-name path.
    pub fn as_single_name(&self) -> Option<Name> {
        match self.head {
            PathHead::Named(name) if self.segments.is_empty() => Some(name),
            _ => None,
        }
    }

    /// The last component's name, if it is an identifier.
    pub fn last_name(&self) -> Option<Name> {
        match (self.segments.last(), self.head) {
            (Some(&last), _) => Some(last),
            (None, PathHead::Named(name)) => Some(name),
            (None, _) => None,
        }
    }

    /// Render the path with `::` separators.
    pub fn display<'a, L: StringLookup>(&'a self, lookup: &'a L) -> PathDisplay<'a, L> {
        PathDisplay { path: self, lookup }
    }
}

/// Display adapter returned by [`SymbolPath::display`].
pub struct PathDisplay<'a, L> {
    path: &'a SymbolPath,
    lookup: &'a L,
}

impl<L: StringLookup> fmt::Display for PathDisplay<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path.head {
            PathHead::Named(name) => f.write_str(self.lookup.lookup(name))?,
            PathHead::SelfValue => f.write_str("self")?,
            PathHead::SelfType => f.write_str("Self")?,
            PathHead::Super => f.write_str("super")?,
            PathHead::Crate => f.write_str("crate")?,
        }
        for &segment in &self.path.segments {
            write!(f, "::{}", self.lookup.lookup(segment))?;
        }
        Ok(())
    }
}
