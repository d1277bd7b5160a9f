//! The node arena.
//!
//! A `SyntaxTree` stores all nodes of one source file in a flat `Vec`,
//! together with the interner for their names. It is immutable once built
//! and is `Send + Sync`, so several type queries may read one snapshot
//! concurrently.

use std::fmt;

use crate::{Name, NodeId, NodeKind, Span, StringInterner};

/// A node: its kind, source span and parent link.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// The parent node, `None` for roots.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Flat storage for every node of a file.
#[derive(Default)]
pub struct SyntaxTree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) interner: StringInterner,
}

impl SyntaxTree {
    /// Get node by ID.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    #[inline]
    #[track_caller]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get node by ID, `None` if it does not belong to this tree.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Kind of a node.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this tree.
    #[inline]
    #[track_caller]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    #[inline]
    pub fn span(&self, id: NodeId) -> Span {
        self.get(id).map_or(Span::DUMMY, |node| node.span)
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Proper ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Nearest proper ancestor whose kind satisfies `pred`.
    pub fn enclosing(&self, id: NodeId, pred: impl Fn(&NodeKind) -> bool) -> Option<NodeId> {
        self.ancestors(id).find(|&ancestor| pred(self.kind(ancestor)))
    }

    /// True if `ancestor` is `node` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        node == ancestor || self.ancestors(node).any(|a| a == ancestor)
    }

    /// Direct children of a node in source order.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.get(id).map(|node| node.kind.children()).unwrap_or_default()
    }

    /// Declared name of a node, if it has one.
    pub fn name_of(&self, id: NodeId) -> Option<Name> {
        self.get(id).and_then(|node| node.kind.name())
    }

    /// Text of an interned name.
    #[inline]
    pub fn text(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    /// The interner owning every name in this tree.
    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Innermost node covering `offset` whose kind satisfies `pred`.
    ///
    /// "Innermost" is the shortest covering span; ties go to the node
    /// allocated first, which is the deeper one since children are
    /// allocated before parents.
    pub fn node_at_offset(&self, offset: u32, pred: impl Fn(&NodeKind) -> bool) -> Option<NodeId> {
        self.ids()
            .filter(|&id| {
                let node = self.node(id);
                node.span.contains(offset) && pred(&node.kind)
            })
            .min_by_key(|&id| self.node(id).span.len())
    }

    /// Nodes without a parent.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids().filter(|&id| self.node(id).parent.is_none())
    }

    /// All node ids in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(|index| {
            // Allocation caps the arena at u32::MAX nodes
            #[expect(
                clippy::cast_possible_truncation,
                reason = "node count is bounded by u32 at allocation"
            )]
            let index = index as u32;
            NodeId::new(index)
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Debug for SyntaxTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SyntaxTree {{ {} nodes, {} names }}",
            self.nodes.len(),
            self.interner.len()
        )
    }
}

/// Iterator returned by [`SyntaxTree::ancestors`].
pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
