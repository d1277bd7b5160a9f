//! Type model for the rsty type engine.
//!
//! Two value spaces that must not be confused:
//! - [`Ty`]: a resolved type, the engine's answer for a node
//! - [`UnresolvedTy`]: the shape a type annotation describes, with names
//!   and component annotations not yet followed
//!
//! Both are plain values. Nominal types refer to their declaring node by
//! [`NodeId`](rsty_ir::NodeId), so they are only meaningful together with
//! the [`SyntaxTree`](rsty_ir::SyntaxTree) they came from.

mod format;
mod numeric;
mod primitive;
mod ty;
mod unresolved;

pub use format::TyDisplay;
pub use numeric::{FloatKind, IntKind};
pub use primitive::{PrimitiveTable, PrimitiveTy};
pub use ty::Ty;
pub use unresolved::UnresolvedTy;

mod size_asserts {
    use super::{FloatKind, IntKind};
    rsty_ir::static_assert_size!(IntKind, 1);
    rsty_ir::static_assert_size!(FloatKind, 1);
}
