//! rsty IR - syntax tree types for the rsty type engine
//!
//! This crate is the AST access layer the type engine consumes:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Node ids and the node arena (`SyntaxTree`)
//! - AST node kinds split by category (items, declarations, statements,
//!   expressions, patterns, type annotations)
//! - Symbolic paths and literal payload helpers
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and literal text → `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`, children are `NodeId(u32)` indices
//! - **Parent Links**: every node knows its parent, so derivation rules can
//!   navigate outward (enclosing `impl`, top-most pattern, enum of a variant)
//!
//! Trees are built bottom-up through [`TreeBuilder`] and are immutable once
//! finished. Node identity (`NodeId`) is what nominal types are keyed on.

/// Compile-time size assertion for types that are stored in bulk.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod builder;
mod error;
mod interner;
pub mod literal;
mod name;
mod node_id;
mod path;
mod span;
mod tree;

pub use ast::{
    BinaryOp, DeclKind, ExprKind, FieldInit, FieldName, FieldPat, FnSig, ItemKind, LitKind,
    Literal, NodeKind, PatKind, StmtKind, TypeKind, UnaryOp,
};
pub use builder::TreeBuilder;
pub use error::TreeError;
pub use interner::{InternError, StringInterner, StringLookup};
pub use name::Name;
pub use node_id::NodeId;
pub use path::{PathDisplay, PathHead, SymbolPath};
pub use span::Span;
pub use tree::{Ancestors, Node, SyntaxTree};

// Ids and spans are copied into every node and type; keep them small.
mod size_asserts {
    use super::{Name, NodeId, Span};
    static_assert_size!(Name, 4);
    static_assert_size!(NodeId, 4);
    static_assert_size!(Span, 8);
}
