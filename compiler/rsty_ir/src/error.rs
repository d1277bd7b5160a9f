//! Tree-building errors.

use crate::NodeId;

/// Misuse of [`TreeBuilder`](crate::TreeBuilder).
///
/// All variants indicate a bug in the code converting a parse tree, not a
/// property of the source program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A child id that has not been allocated yet.
    #[error("child {child:?} is not allocated (tree has {len} nodes)")]
    UnknownNode { child: NodeId, len: usize },

    /// A node listed as the child of two parents.
    #[error("{child:?} already belongs to {parent:?}")]
    AlreadyParented { child: NodeId, parent: NodeId },

    /// The arena exceeded `u32::MAX` nodes.
    #[error("syntax tree exceeded capacity: {count} nodes")]
    Overflow { count: usize },
}
