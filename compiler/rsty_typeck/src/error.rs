//! Engine errors.
//!
//! Typing itself never fails: missing information is [`Ty::Unknown`]. The
//! only error is calling a category-specific entry point on a node of the
//! wrong category, which is a bug in the caller.
//!
//! [`Ty::Unknown`]: rsty_types::Ty::Unknown

use rsty_ir::NodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypifyError {
    /// The item typifier was asked about a node that is not an item.
    #[error("cannot typify {node} as an item: it is a {kind}")]
    NotAnItem { node: NodeId, kind: &'static str },
}
