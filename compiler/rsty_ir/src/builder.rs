//! Bottom-up construction of a [`SyntaxTree`].
//!
//! Children are allocated before their parent. Allocating a node records
//! it as the parent of every child its kind lists, so a finished tree has
//! complete parent links without a separate pass.

use crate::{
    DeclKind, ExprKind, FnSig, ItemKind, LitKind, Literal, Name, Node, NodeId, NodeKind, PatKind,
    Span, StmtKind, StringInterner, SymbolPath, SyntaxTree, TreeError, TypeKind,
};

/// Builder for a [`SyntaxTree`].
#[derive(Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    interner: StringInterner,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node with an explicit span.
    ///
    /// Fails if a listed child is not allocated yet or already has a
    /// parent. On failure the builder is left unchanged.
    pub fn try_alloc_at(&mut self, kind: NodeKind, span: Span) -> Result<NodeId, TreeError> {
        let id = u32::try_from(self.nodes.len())
            .map(NodeId::new)
            .map_err(|_| TreeError::Overflow {
                count: self.nodes.len(),
            })?;
        let children = kind.children();
        for &child in &children {
            let node = self.nodes.get(child.index()).ok_or(TreeError::UnknownNode {
                child,
                len: self.nodes.len(),
            })?;
            if let Some(parent) = node.parent {
                return Err(TreeError::AlreadyParented { child, parent });
            }
        }
        for child in children {
            self.nodes[child.index()].parent = Some(id);
        }
        self.nodes.push(Node {
            kind,
            span,
            parent: None,
        });
        Ok(id)
    }

    /// Allocate a node whose span covers its children.
    ///
    /// Leaves without an explicit span get [`Span::DUMMY`].
    pub fn try_alloc(&mut self, kind: NodeKind) -> Result<NodeId, TreeError> {
        let span = kind
            .children()
            .iter()
            .filter_map(|child| self.nodes.get(child.index()))
            .map(|node| node.span)
            .filter(|span| !span.is_empty())
            .reduce(Span::merge)
            .unwrap_or(Span::DUMMY);
        self.try_alloc_at(kind, span)
    }

    /// Allocate a node with an explicit span.
    ///
    /// # Panics
    /// Panics on the errors [`try_alloc_at`](Self::try_alloc_at) reports.
    #[track_caller]
    pub fn alloc_at(&mut self, kind: NodeKind, span: Span) -> NodeId {
        self.try_alloc_at(kind, span).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Allocate a node whose span covers its children.
    ///
    /// # Panics
    /// Panics on the errors [`try_alloc_at`](Self::try_alloc_at) reports.
    #[track_caller]
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        self.try_alloc(kind).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Override the span of an allocated node.
    #[track_caller]
    pub fn set_span(&mut self, id: NodeId, span: Span) {
        self.nodes[id.index()].span = span;
    }

    pub fn intern(&self, text: &str) -> Name {
        self.interner.intern(text)
    }

    /// Parse and intern `a::b::c`.
    pub fn path(&self, text: &str) -> SymbolPath {
        SymbolPath::parse(text, &self.interner)
    }

    pub fn item(&mut self, kind: ItemKind) -> NodeId {
        self.alloc(NodeKind::Item(kind))
    }

    pub fn decl(&mut self, kind: DeclKind) -> NodeId {
        self.alloc(NodeKind::Decl(kind))
    }

    pub fn stmt(&mut self, kind: StmtKind) -> NodeId {
        self.alloc(NodeKind::Stmt(kind))
    }

    pub fn expr(&mut self, kind: ExprKind) -> NodeId {
        self.alloc(NodeKind::Expr(kind))
    }

    pub fn pat(&mut self, kind: PatKind) -> NodeId {
        self.alloc(NodeKind::Pat(kind))
    }

    pub fn ty(&mut self, kind: TypeKind) -> NodeId {
        self.alloc(NodeKind::Type(kind))
    }

    // Leaf shorthands

    pub fn lit(&mut self, kind: LitKind, text: &str) -> NodeId {
        let text = self.intern(text);
        self.expr(ExprKind::Lit(Literal { kind, text }))
    }

    pub fn int_lit(&mut self, text: &str) -> NodeId {
        self.lit(LitKind::Int, text)
    }

    pub fn float_lit(&mut self, text: &str) -> NodeId {
        self.lit(LitKind::Float, text)
    }

    /// String literal; `text` is the source form including quotes.
    pub fn str_lit(&mut self, text: &str) -> NodeId {
        self.lit(LitKind::Str, text)
    }

    pub fn char_lit(&mut self, text: &str) -> NodeId {
        self.lit(LitKind::Char, text)
    }

    pub fn bool_lit(&mut self, value: bool) -> NodeId {
        self.lit(LitKind::Bool(value), if value { "true" } else { "false" })
    }

    pub fn path_expr(&mut self, text: &str) -> NodeId {
        let path = self.path(text);
        self.expr(ExprKind::Path(path))
    }

    pub fn path_ty(&mut self, text: &str) -> NodeId {
        let path = self.path(text);
        self.ty(TypeKind::Path(path))
    }

    /// `&T` / `&mut T`
    pub fn ref_ty(&mut self, inner: NodeId, mutable: bool) -> NodeId {
        self.ty(TypeKind::Ref {
            inner: Some(inner),
            mutable,
        })
    }

    /// Plain `name` binding pattern.
    pub fn binding(&mut self, name: &str) -> NodeId {
        let name = self.intern(name);
        self.pat(PatKind::Binding {
            name,
            by_ref: false,
            mutable: false,
            sub: None,
        })
    }

    /// Block expression `{ stmts; tail }`.
    pub fn block(&mut self, stmts: Vec<NodeId>, tail: Option<NodeId>) -> NodeId {
        let block = self.alloc(NodeKind::Block { stmts, tail });
        self.expr(ExprKind::Block(Some(block)))
    }

    /// `let pat: ty = init;`
    pub fn let_stmt(&mut self, pat: NodeId, ty: Option<NodeId>, init: Option<NodeId>) -> NodeId {
        self.stmt(StmtKind::Let {
            pat: Some(pat),
            ty,
            init,
        })
    }

    /// Parameter `pat: ty`.
    pub fn param(&mut self, pat: NodeId, ty: Option<NodeId>) -> NodeId {
        self.decl(DeclKind::Param { pat: Some(pat), ty })
    }

    /// Free function item.
    pub fn fn_item(&mut self, name: &str, sig: FnSig) -> NodeId {
        let name = self.intern(name);
        self.item(ItemKind::Fn { name, sig })
    }

    /// Finish the tree. Nodes without a parent become roots.
    pub fn finish(self) -> SyntaxTree {
        SyntaxTree {
            nodes: self.nodes,
            interner: self.interner,
        }
    }

    /// Number of allocated nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
