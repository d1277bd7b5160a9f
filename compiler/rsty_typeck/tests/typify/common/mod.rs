//! Program builder for the end-to-end tests.
//!
//! Wraps a [`TreeBuilder`] and records name bindings next to the nodes
//! that declare them, so a test reads as the program it models.

use rsty_ir::{
    DeclKind, ExprKind, FnSig, ItemKind, NodeId, NodeKind, SyntaxTree, TreeBuilder, TypeKind,
};
use rsty_typeck::{init_tracing, ResolvedNames, TypifyEngine};
use rsty_types::Ty;

pub struct Program {
    b: TreeBuilder,
    names: ResolvedNames,
}

impl Program {
    pub fn new() -> Self {
        init_tracing();
        Program {
            b: TreeBuilder::new(),
            names: ResolvedNames::new(),
        }
    }

    /// Raw builder access for shapes the helpers don't cover.
    pub fn b(&mut self) -> &mut TreeBuilder {
        &mut self.b
    }

    /// Make `path` resolve to `decl`.
    pub fn declare(&mut self, path: &str, decl: NodeId) {
        self.names.bind_path(path, decl);
    }

    /// Make `reference` (a method call, field access...) resolve to `decl`.
    pub fn refer(&mut self, reference: NodeId, decl: NodeId) {
        self.names.bind_reference(reference, decl);
    }

    /// Type annotation from its source text: paths, `()`, tuples, `&T`,
    /// `&mut T`.
    pub fn ty(&mut self, text: &str) -> NodeId {
        let text = text.trim();
        if let Some(inner) = text.strip_prefix("&mut ") {
            let inner = self.ty(inner);
            return self.b.ref_ty(inner, true);
        }
        if let Some(inner) = text.strip_prefix('&') {
            let inner = self.ty(inner);
            return self.b.ref_ty(inner, false);
        }
        if let Some(body) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
            let elems = split_top_level(body)
                .into_iter()
                .map(|elem| self.ty(elem))
                .collect();
            return self.b.ty(TypeKind::Tuple(elems));
        }
        self.b.path_ty(text)
    }

    /// `struct Name { field: ty, .. }`. Returns the struct and its fields.
    pub fn struct_item(&mut self, name: &str, fields: &[(&str, &str)]) -> (NodeId, Vec<NodeId>) {
        let fields: Vec<NodeId> = fields
            .iter()
            .map(|&(field, ty)| {
                let ty = self.ty(ty);
                let field = self.b.intern(field);
                self.b.decl(DeclKind::Field {
                    name: field,
                    ty: Some(ty),
                })
            })
            .collect();
        let item = self.b.item(ItemKind::Struct {
            name: self.b.intern(name),
            generics: vec![],
            fields: fields.clone(),
        });
        self.declare(name, item);
        (item, fields)
    }

    /// `struct Name(ty, ..);`
    pub fn tuple_struct(&mut self, name: &str, fields: &[&str]) -> NodeId {
        let fields = self.tuple_fields(fields);
        let item = self.b.item(ItemKind::Struct {
            name: self.b.intern(name),
            generics: vec![],
            fields,
        });
        self.declare(name, item);
        item
    }

    /// `enum Name { Variant(ty, ..), .. }`. Returns the enum and its
    /// variants; each variant is declared as `Name::Variant`.
    pub fn enum_item(
        &mut self,
        name: &str,
        variants: &[(&str, &[&str])],
    ) -> (NodeId, Vec<NodeId>) {
        let variants: Vec<NodeId> = variants
            .iter()
            .map(|&(variant, fields)| {
                let fields = self.tuple_fields(fields);
                let decl = self.b.decl(DeclKind::Variant {
                    name: self.b.intern(variant),
                    fields,
                });
                self.declare(&format!("{name}::{variant}"), decl);
                decl
            })
            .collect();
        let body = self.b.alloc(NodeKind::EnumBody {
            variants: variants.clone(),
        });
        let item = self.b.item(ItemKind::Enum {
            name: self.b.intern(name),
            generics: vec![],
            body: Some(body),
        });
        self.declare(name, item);
        (item, variants)
    }

    /// `fn name(param: ty, ..) -> ret { body }`. Parameters without a
    /// type are written `("p", None)`. Returns the function and its
    /// parameter bindings, each declared under its own name.
    pub fn function(
        &mut self,
        name: &str,
        params: &[(&str, Option<&str>)],
        ret: Option<&str>,
        body: Option<NodeId>,
    ) -> (NodeId, Vec<NodeId>) {
        let (sig, bindings) = self.signature(None, params, ret, body);
        let item = self.b.fn_item(name, sig);
        self.declare(name, item);
        (item, bindings)
    }

    /// Method with a receiver (`&self` is `(true, false)`). Returns the
    /// method and its receiver. Not attached to an impl yet.
    pub fn method(
        &mut self,
        name: &str,
        receiver: Option<(bool, bool)>,
        params: &[(&str, Option<&str>)],
        ret: Option<&str>,
    ) -> (NodeId, Option<NodeId>) {
        let receiver = receiver.map(|(is_ref, mutable)| {
            self.b.decl(DeclKind::SelfParam { is_ref, mutable })
        });
        let (sig, _) = self.signature(receiver, params, ret, None);
        let method = self.b.decl(DeclKind::Method {
            name: self.b.intern(name),
            sig,
        });
        (method, receiver)
    }

    /// `impl target { members }`
    pub fn impl_block(&mut self, target: &str, members: Vec<NodeId>) -> NodeId {
        let target = self.ty(target);
        self.b.item(ItemKind::Impl {
            generics: vec![],
            trait_ref: None,
            target: Some(target),
            members,
        })
    }

    /// Path expression `text`.
    pub fn path(&mut self, text: &str) -> NodeId {
        self.b.path_expr(text)
    }

    /// `callee(args..)`
    pub fn call(&mut self, callee: &str, args: Vec<NodeId>) -> NodeId {
        let callee = self.path(callee);
        self.b.expr(ExprKind::Call { callee, args })
    }

    /// `receiver.method(args..)`, resolved to `decl`.
    pub fn method_call(&mut self, receiver: NodeId, method: &str, decl: NodeId) -> NodeId {
        let call = self.b.expr(ExprKind::MethodCall {
            receiver,
            method: self.b.intern(method),
            args: vec![],
        });
        self.refer(call, decl);
        call
    }

    pub fn finish(self) -> Typed {
        Typed {
            tree: self.b.finish(),
            names: self.names,
        }
    }

    fn tuple_fields(&mut self, fields: &[&str]) -> Vec<NodeId> {
        fields
            .iter()
            .map(|&ty| {
                let ty = self.ty(ty);
                self.b.decl(DeclKind::TupleField { ty })
            })
            .collect()
    }

    fn signature(
        &mut self,
        self_param: Option<NodeId>,
        params: &[(&str, Option<&str>)],
        ret: Option<&str>,
        body: Option<NodeId>,
    ) -> (FnSig, Vec<NodeId>) {
        let mut bindings = Vec::with_capacity(params.len());
        let params = params
            .iter()
            .map(|&(name, ty)| {
                let pat = self.b.binding(name);
                self.declare(name, pat);
                bindings.push(pat);
                let ty = ty.map(|ty| self.ty(ty));
                self.b.param(pat, ty)
            })
            .collect();
        let ret_ty = ret.map(|ret| self.ty(ret));
        let sig = FnSig {
            self_param,
            params,
            ret_ty,
            body,
            ..FnSig::default()
        };
        (sig, bindings)
    }
}

/// A finished program.
pub struct Typed {
    pub tree: SyntaxTree,
    pub names: ResolvedNames,
}

impl Typed {
    pub fn engine(&self) -> TypifyEngine<'_> {
        TypifyEngine::new(&self.tree, &self.names)
    }

    pub fn show(&self, ty: &Ty) -> String {
        ty.format(&self.tree)
    }

    /// Rendered type of an expression.
    pub fn expr(&self, node: NodeId) -> String {
        self.show(&self.engine().typify_expr(node))
    }

    /// Rendered type of a named entity.
    pub fn named(&self, node: NodeId) -> String {
        self.show(&self.engine().typify(node))
    }
}

/// Split `a, (b, c), d` at the commas outside parentheses.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0u32;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = text[start..].trim();
    if !last.is_empty() {
        parts.push(last);
    }
    parts.into_iter().map(str::trim).collect()
}
