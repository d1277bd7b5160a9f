//! Name resolution capability.
//!
//! The engine never resolves names itself. It asks a [`Resolver`], which
//! the host implements on top of its own scope analysis. [`ResolvedNames`]
//! is a table-backed implementation for hosts that already ran resolution
//! and for tests.

use rsty_ir::{
    ExprKind, ItemKind, NodeId, NodeKind, PatKind, PathHead, SymbolPath, SyntaxTree, TypeKind,
};
use rustc_hash::FxHashMap;

/// Maps name references to the declarations they denote.
///
/// Both methods return `None` when the name does not resolve; the engine
/// then types the reference as `Unknown`.
pub trait Resolver: Sync {
    /// Declaration named by a reference node.
    ///
    /// Asked for path expressions, struct literals, method calls, field
    /// accesses, and struct or tuple-struct patterns.
    fn resolve_reference(&self, tree: &SyntaxTree, node: NodeId) -> Option<NodeId>;

    /// Declaration named by `path` as seen from `scope`.
    ///
    /// Asked for path type annotations; `scope` is the annotation node.
    fn resolve_path(&self, tree: &SyntaxTree, path: &SymbolPath, scope: NodeId)
        -> Option<NodeId>;
}

/// A resolver that resolves nothing.
///
/// Everything that depends on a name types as `Unknown`; literals and
/// primitive annotations still type normally.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullResolver;

impl Resolver for NullResolver {
    fn resolve_reference(&self, _tree: &SyntaxTree, _node: NodeId) -> Option<NodeId> {
        None
    }

    fn resolve_path(
        &self,
        _tree: &SyntaxTree,
        _path: &SymbolPath,
        _scope: NodeId,
    ) -> Option<NodeId> {
        None
    }
}

/// Precomputed resolution results.
///
/// Two tables:
/// - references: reference node → declaration, for nodes resolved one by one
/// - paths: rendered path (`"geo::Point"`) → declaration, ignoring scope
///
/// A reference node without an entry of its own falls back to the path
/// table when it carries a path (path expressions, struct literals, struct
/// and tuple-struct patterns). Two paths resolve structurally instead of
/// through the table: a bare `Self` names the target of the enclosing
/// `impl` (or the enclosing `trait`), and a bare `self` names the receiver
/// of the enclosing function.
#[derive(Clone, Debug, Default)]
pub struct ResolvedNames {
    references: FxHashMap<NodeId, NodeId>,
    paths: FxHashMap<String, NodeId>,
}

impl ResolvedNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `reference` names `decl`.
    pub fn bind_reference(&mut self, reference: NodeId, decl: NodeId) {
        self.references.insert(reference, decl);
    }

    /// Record that the path spelled `path` names `decl`.
    pub fn bind_path(&mut self, path: &str, decl: NodeId) {
        self.paths.insert(path.to_owned(), decl);
    }

    #[must_use]
    pub fn with_reference(mut self, reference: NodeId, decl: NodeId) -> Self {
        self.bind_reference(reference, decl);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: &str, decl: NodeId) -> Self {
        self.bind_path(path, decl);
        self
    }

    /// Number of recorded references and paths.
    pub fn len(&self) -> usize {
        self.references.len() + self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty() && self.paths.is_empty()
    }

    fn lookup_path(&self, tree: &SyntaxTree, path: &SymbolPath, scope: NodeId) -> Option<NodeId> {
        if path.segments.is_empty() {
            match path.head {
                PathHead::SelfType => return self.resolve_self_type(tree, scope),
                PathHead::SelfValue => return resolve_self_value(tree, scope),
                _ => {}
            }
        }
        let rendered = path.display(tree.interner()).to_string();
        self.paths.get(&rendered).copied()
    }

    fn resolve_self_type(&self, tree: &SyntaxTree, scope: NodeId) -> Option<NodeId> {
        let owner = tree.enclosing(scope, |kind| {
            matches!(
                kind,
                NodeKind::Item(ItemKind::Impl { .. } | ItemKind::Trait { .. })
            )
        })?;
        match tree.kind(owner) {
            NodeKind::Item(ItemKind::Trait { .. }) => Some(owner),
            NodeKind::Item(ItemKind::Impl {
                target: Some(target),
                ..
            }) => match tree.kind(*target) {
                // `impl Self` names nothing
                NodeKind::Type(TypeKind::Path(path)) if path.head != PathHead::SelfType => {
                    self.lookup_path(tree, path, *target)
                }
                _ => None,
            },
            _ => None,
        }
    }
}

fn resolve_self_value(tree: &SyntaxTree, scope: NodeId) -> Option<NodeId> {
    let function = tree.enclosing(scope, |kind| kind.fn_sig().is_some())?;
    tree.kind(function).fn_sig()?.self_param
}

impl Resolver for ResolvedNames {
    fn resolve_reference(&self, tree: &SyntaxTree, node: NodeId) -> Option<NodeId> {
        if let Some(&decl) = self.references.get(&node) {
            return Some(decl);
        }
        let path = match &tree.get(node)?.kind {
            NodeKind::Expr(ExprKind::Path(path) | ExprKind::Struct { path, .. })
            | NodeKind::Pat(
                PatKind::Path(path) | PatKind::Struct { path, .. } | PatKind::TupleStruct { path, .. },
            ) => path,
            _ => return None,
        };
        self.lookup_path(tree, path, node)
    }

    fn resolve_path(
        &self,
        tree: &SyntaxTree,
        path: &SymbolPath,
        scope: NodeId,
    ) -> Option<NodeId> {
        self.lookup_path(tree, path, scope)
    }
}
