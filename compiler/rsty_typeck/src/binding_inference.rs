//! Narrowing a pattern's type to one of its bindings.
//!
//! The binding rule finds the type of the whole pattern; a
//! [`BindingInference`] decides what that means for a binding nested
//! inside it. [`StructuralBindingInference`] destructures tuples,
//! references, structs and enum variants; [`IdentityBindingInference`]
//! hands back the whole-pattern type.

use rsty_ir::{DeclKind, FieldPat, ItemKind, NodeId, NodeKind, PatKind};
use rsty_types::Ty;

use crate::derive::variant_enum;
use crate::TypifyEngine;

/// Hook narrowing the type of a whole pattern to one binding inside it.
pub trait BindingInference: Sync {
    /// Type of `binding`, given that `top_pattern` (an ancestor of
    /// `binding`, or `binding` itself) has type `ty`.
    fn infer_binding_type(
        &self,
        engine: &TypifyEngine<'_>,
        binding: NodeId,
        top_pattern: NodeId,
        ty: Ty,
    ) -> Ty;
}

/// Returns the whole-pattern type unchanged.
#[derive(Copy, Clone, Debug, Default)]
pub struct IdentityBindingInference;

impl BindingInference for IdentityBindingInference {
    fn infer_binding_type(
        &self,
        _engine: &TypifyEngine<'_>,
        _binding: NodeId,
        _top_pattern: NodeId,
        ty: Ty,
    ) -> Ty {
        ty
    }
}

/// Destructures the pattern type along the path to the binding.
///
/// Rules, applied at each pattern between the top and the binding:
/// - tuple pattern on a tuple type of the same arity: the element type
/// - `&p` / `&mut p` on a reference type: the referent
/// - `x @ sub`: `sub` sees the type `x` sees
/// - struct or tuple-struct pattern on the struct it names: the declared
///   field type
/// - struct or tuple-struct pattern naming a variant, on that variant's
///   enum: the variant's declared field type
///
/// Matching a tuple, struct or tuple-struct pattern against a reference
/// looks through the reference, and bindings below it are then
/// references themselves (default binding modes). A `ref` / `ref mut`
/// binding borrows its type explicitly. Anything that does not line up
/// is `Unknown`.
#[derive(Copy, Clone, Debug, Default)]
pub struct StructuralBindingInference;

impl BindingInference for StructuralBindingInference {
    fn infer_binding_type(
        &self,
        engine: &TypifyEngine<'_>,
        binding: NodeId,
        top_pattern: NodeId,
        ty: Ty,
    ) -> Ty {
        let tree = engine.tree();

        // Patterns from the top down to the binding
        let mut chain: Vec<NodeId> = tree
            .ancestors(binding)
            .take_while(|&p| tree.kind(p).is_pat())
            .collect();
        if binding != top_pattern && chain.last() != Some(&top_pattern) {
            return Ty::Unknown;
        }
        chain.reverse();
        chain.push(binding);

        let mut walk = Walk {
            engine,
            ty,
            ref_mode: None,
        };
        for step in chain.windows(2) {
            if !walk.descend(step[0], step[1]) {
                return Ty::Unknown;
            }
        }
        walk.finish(binding)
    }
}

/// State of a walk down the pattern chain.
struct Walk<'e, 'a> {
    engine: &'e TypifyEngine<'a>,
    /// Type at the current pattern.
    ty: Ty,
    /// Default binding mode: `Some(mutable)` once a non-reference pattern
    /// has matched through a reference.
    ref_mode: Option<bool>,
}

impl Walk<'_, '_> {
    /// Move from `pat` to its child pattern `child`. False on mismatch.
    fn descend(&mut self, pat: NodeId, child: NodeId) -> bool {
        let tree = self.engine.tree();
        let NodeKind::Pat(kind) = tree.kind(pat) else {
            return false;
        };
        match kind {
            PatKind::Binding { sub: Some(sub), .. } if *sub == child => true,
            PatKind::Ref { pat: inner, .. } if *inner == child => {
                match std::mem::replace(&mut self.ty, Ty::Unknown) {
                    Ty::Ref { inner, .. } => {
                        self.ty = *inner;
                        self.ref_mode = None;
                        true
                    }
                    _ => false,
                }
            }
            PatKind::Tuple(elems) => {
                self.peel_refs();
                let Some(index) = elems.iter().position(|&e| e == child) else {
                    return false;
                };
                match std::mem::replace(&mut self.ty, Ty::Unknown) {
                    Ty::Tuple(mut tys) if tys.len() == elems.len() => {
                        self.ty = tys.swap_remove(index);
                        true
                    }
                    _ => false,
                }
            }
            PatKind::Struct { fields, .. } => {
                self.peel_refs();
                let Some(FieldPat { name, .. }) = fields.iter().find(|f| f.pat == child) else {
                    return false;
                };
                let field = self.matched_fields(pat).and_then(|decl_fields| {
                    decl_fields.iter().copied().find(|&f| {
                        matches!(
                            tree.kind(f),
                            NodeKind::Decl(DeclKind::Field { name: n, .. }) if n == name
                        )
                    })
                });
                self.enter_field(field)
            }
            PatKind::TupleStruct { elems, .. } => {
                self.peel_refs();
                let Some(index) = elems.iter().position(|&e| e == child) else {
                    return false;
                };
                let field = self
                    .matched_fields(pat)
                    .and_then(|decl_fields| decl_fields.get(index).copied());
                self.enter_field(field)
            }
            _ => false,
        }
    }

    /// Look through references, switching to the by-reference binding mode.
    fn peel_refs(&mut self) {
        while let Ty::Ref { inner, mutable } = &mut self.ty {
            let mutable = *mutable;
            let inner = std::mem::replace(inner.as_mut(), Ty::Unknown);
            self.ref_mode = Some(self.ref_mode.map_or(mutable, |outer| outer && mutable));
            self.ty = inner;
        }
    }

    /// Field declarations of the struct or variant `pat` names, if it
    /// names the nominal type currently being matched.
    fn matched_fields(&self, pat: NodeId) -> Option<&[NodeId]> {
        let engine = self.engine;
        let tree = engine.tree();
        let decl = engine.resolve_reference(pat)?;
        match (tree.kind(decl), &self.ty) {
            (NodeKind::Item(ItemKind::Struct { fields, .. }), Ty::Struct(id)) if *id == decl => {
                Some(fields.as_slice())
            }
            (NodeKind::Decl(DeclKind::Variant { fields, .. }), Ty::Enum(id))
                if variant_enum(engine, decl) == Some(*id) =>
            {
                Some(fields.as_slice())
            }
            _ => None,
        }
    }

    /// Continue with a field declaration's annotated type.
    fn enter_field(&mut self, field: Option<NodeId>) -> bool {
        let engine = self.engine;
        let annotation = field.and_then(|field| match engine.tree().kind(field) {
            NodeKind::Decl(DeclKind::Field { ty, .. }) => *ty,
            NodeKind::Decl(DeclKind::TupleField { ty }) => Some(*ty),
            _ => None,
        });
        match annotation {
            Some(ty) => {
                self.ty = engine.resolve_annotation(ty);
                true
            }
            None => false,
        }
    }

    /// Type of the binding itself under the current binding mode.
    fn finish(self, binding: NodeId) -> Ty {
        let tree = self.engine.tree();
        let NodeKind::Pat(PatKind::Binding { by_ref, mutable, .. }) = *tree.kind(binding) else {
            return Ty::Unknown;
        };
        if by_ref {
            Ty::reference(self.ty, mutable)
        } else if let Some(mutable) = self.ref_mode {
            Ty::reference(self.ty, mutable)
        } else {
            self.ty
        }
    }
}
