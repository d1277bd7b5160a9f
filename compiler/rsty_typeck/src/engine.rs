//! The typing facade.
//!
//! `TypifyEngine` is the single entry point for type queries. It routes a
//! node to the rule set of its category; the rules call back into the
//! engine for the types of children and of resolved declarations, so all
//! recursion passes through here and is guarded in one place.
//!
//! Two guards apply. A named entity (alias, binding, variant...) that is
//! asked for again while its own derivation is still running is part of a
//! cycle and types as `Unknown`. The optional depth limit from
//! [`TypifyConfig::max_depth`] caps nesting regardless of cycles.

use std::cell::{Cell, RefCell};

use rsty_ir::{DeclKind, NodeId, NodeKind, PatKind, SyntaxTree};
use rsty_types::{Ty, UnresolvedTy};
use rustc_hash::FxHashSet;

use crate::binding_inference::{BindingInference, StructuralBindingInference};
use crate::{
    annotation, derive, ensure_sufficient_stack, expr, item, Resolver, TypifyConfig, TypifyError,
};

/// Type derivation engine over one syntax tree snapshot.
///
/// Cheap to construct: it holds references plus the guard state (a depth
/// counter and the set of entities being derived). That state makes the
/// engine `!Sync`; build one per thread, sharing the tree and resolver.
pub struct TypifyEngine<'a> {
    tree: &'a SyntaxTree,
    resolver: &'a dyn Resolver,
    binding_inference: &'a dyn BindingInference,
    config: &'a TypifyConfig,
    depth: Cell<u32>,
    in_progress: RefCell<FxHashSet<NodeId>>,
}

impl<'a> TypifyEngine<'a> {
    /// Engine with the default configuration and binding inference.
    pub fn new(tree: &'a SyntaxTree, resolver: &'a dyn Resolver) -> Self {
        TypifyEngineBuilder::new(tree, resolver).build()
    }

    /// Start configuring an engine.
    pub fn builder(tree: &'a SyntaxTree, resolver: &'a dyn Resolver) -> TypifyEngineBuilder<'a> {
        TypifyEngineBuilder::new(tree, resolver)
    }

    #[inline]
    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    #[inline]
    pub fn config(&self) -> &'a TypifyConfig {
        self.config
    }

    #[inline]
    pub fn resolver(&self) -> &'a dyn Resolver {
        self.resolver
    }

    /// Shape of a type annotation node, without following any names.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn typify_type_annotation(&self, node: NodeId) -> UnresolvedTy {
        annotation::typify_type_annotation(self, node)
    }

    /// Type of an expression node.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn typify_expr(&self, node: NodeId) -> Ty {
        self.guarded(node, || expr::typify_expr(self, node))
    }

    /// Type of an item node.
    ///
    /// # Panics
    /// Panics if `node` is not an item. Use
    /// [`try_typify_item`](Self::try_typify_item) when that is not known.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn typify_item(&self, node: NodeId) -> Ty {
        self.try_typify_item(node).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Type of an item node, or an error if `node` is not an item.
    pub fn try_typify_item(&self, node: NodeId) -> Result<Ty, TypifyError> {
        let kind = self.tree.kind(node);
        if !kind.is_item() {
            return Err(TypifyError::NotAnItem {
                node,
                kind: kind.category(),
            });
        }
        Ok(self.guarded_named(node, || item::typify_item(self, node)))
    }

    /// Type of a named entity: an item, a binding, the `self` parameter,
    /// an enum variant, a method or a type parameter.
    ///
    /// Anything else is `Unknown`.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn typify(&self, named: NodeId) -> Ty {
        self.guarded_named(named, || match self.tree.kind(named) {
            NodeKind::Item(_) => item::typify_item(self, named),
            NodeKind::Decl(DeclKind::SelfParam { .. }) => derive::self_type(self, named),
            NodeKind::Pat(PatKind::Binding { .. }) => derive::binding_type(self, named),
            NodeKind::Decl(DeclKind::Variant { .. }) => derive::variant_enum_type(self, named),
            NodeKind::Decl(DeclKind::Method { .. }) => derive::function_type(self, named),
            NodeKind::Decl(DeclKind::TypeParam { .. }) => Ty::TypeParam(named),
            _ => Ty::Unknown,
        })
    }

    /// Resolved type of a type annotation node.
    pub fn resolve_annotation(&self, node: NodeId) -> Ty {
        self.guarded(node, || {
            let shape = self.typify_type_annotation(node);
            self.resolve_unresolved(&shape, node)
        })
    }

    /// Resolve an annotation shape one level, recursing into components.
    ///
    /// `scope` is the annotation node that produced `shape`; path
    /// resolution is asked relative to it.
    pub fn resolve_unresolved(&self, shape: &UnresolvedTy, scope: NodeId) -> Ty {
        match shape {
            UnresolvedTy::Unknown => Ty::Unknown,
            UnresolvedTy::Unit => Ty::Unit,
            UnresolvedTy::Primitive(prim) => prim.to_ty(),
            UnresolvedTy::Tuple(elems) => {
                Ty::tuple(elems.iter().map(|&e| self.resolve_annotation(e)).collect())
            }
            UnresolvedTy::Reference { inner, mutable } => {
                Ty::reference(self.resolve_annotation(*inner), *mutable)
            }
            UnresolvedTy::Path(path) => {
                match self.resolver.resolve_path(self.tree, path, scope) {
                    Some(decl) => self.typify(decl),
                    None => {
                        tracing::debug!(
                            path = %path.display(self.tree.interner()),
                            ?scope,
                            "unresolved type path"
                        );
                        Ty::Unknown
                    }
                }
            }
        }
    }

    /// Ask the resolver about a reference node, logging misses.
    pub(crate) fn resolve_reference(&self, node: NodeId) -> Option<NodeId> {
        let decl = self.resolver.resolve_reference(self.tree, node);
        if decl.is_none() {
            tracing::debug!(?node, kind = self.tree.kind(node).category(), "unresolved reference");
        }
        decl
    }

    pub(crate) fn binding_inference(&self) -> &'a dyn BindingInference {
        self.binding_inference
    }

    /// Run one level of typing under the depth limit.
    fn guarded(&self, node: NodeId, f: impl FnOnce() -> Ty) -> Ty {
        let Some(_guard) = DepthGuard::enter(&self.depth, self.config.max_depth) else {
            tracing::warn!(
                ?node,
                limit = ?self.config.max_depth,
                "typing depth limit reached; giving up with unknown"
            );
            return Ty::Unknown;
        };
        ensure_sufficient_stack(f)
    }

    /// [`guarded`](Self::guarded), and `Unknown` if `named` is already
    /// being derived further up the stack.
    fn guarded_named(&self, named: NodeId, f: impl FnOnce() -> Ty) -> Ty {
        self.guarded(named, || {
            let Some(_derivation) = Derivation::enter(&self.in_progress, named) else {
                tracing::debug!(?named, "cyclic derivation; giving up with unknown");
                return Ty::Unknown;
            };
            f()
        })
    }
}

/// Marks a named entity as being derived until dropped.
struct Derivation<'c> {
    in_progress: &'c RefCell<FxHashSet<NodeId>>,
    node: NodeId,
}

impl<'c> Derivation<'c> {
    /// Mark `node`, or `None` if it is already marked.
    fn enter(in_progress: &'c RefCell<FxHashSet<NodeId>>, node: NodeId) -> Option<Self> {
        if !in_progress.borrow_mut().insert(node) {
            return None;
        }
        Some(Derivation { in_progress, node })
    }
}

impl Drop for Derivation<'_> {
    fn drop(&mut self) {
        self.in_progress.borrow_mut().remove(&self.node);
    }
}

/// Scope guard for the engine's depth counter.
struct DepthGuard<'c> {
    depth: &'c Cell<u32>,
}

impl<'c> DepthGuard<'c> {
    /// Count one more level, or `None` if the limit is already reached.
    fn enter(depth: &'c Cell<u32>, limit: Option<u32>) -> Option<Self> {
        let current = depth.get();
        if limit.is_some_and(|limit| current >= limit) {
            return None;
        }
        depth.set(current.saturating_add(1));
        Some(DepthGuard { depth })
    }
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}

/// Builder for [`TypifyEngine`].
pub struct TypifyEngineBuilder<'a> {
    tree: &'a SyntaxTree,
    resolver: &'a dyn Resolver,
    binding_inference: Option<&'a dyn BindingInference>,
    config: Option<&'a TypifyConfig>,
}

impl<'a> TypifyEngineBuilder<'a> {
    /// Create a new builder with the required references.
    pub fn new(tree: &'a SyntaxTree, resolver: &'a dyn Resolver) -> Self {
        TypifyEngineBuilder {
            tree,
            resolver,
            binding_inference: None,
            config: None,
        }
    }

    /// Use a custom configuration instead of the shared default.
    #[must_use]
    pub fn with_config(mut self, config: &'a TypifyConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Replace the structural binding inference.
    #[must_use]
    pub fn with_binding_inference(mut self, inference: &'a dyn BindingInference) -> Self {
        self.binding_inference = Some(inference);
        self
    }

    /// Build the engine with the configured options.
    pub fn build(self) -> TypifyEngine<'a> {
        TypifyEngine {
            tree: self.tree,
            resolver: self.resolver,
            binding_inference: self
                .binding_inference
                .unwrap_or(&StructuralBindingInference),
            config: self.config.unwrap_or(TypifyConfig::shared_default()),
            depth: Cell::new(0),
            in_progress: RefCell::new(FxHashSet::default()),
        }
    }
}
