//! Item typifier.

use rsty_ir::{ItemKind, NodeId, NodeKind};
use rsty_types::Ty;

use crate::{derive, TypifyEngine};

/// Type of an item.
///
/// Structs, enums and traits are nominal and typed by their own id. A type
/// alias is whatever its annotation resolves to; a free function is its
/// assembled signature. `impl`, `const`, `static`, `mod` and `use` items
/// have no type of their own.
pub(crate) fn typify_item(engine: &TypifyEngine<'_>, node: NodeId) -> Ty {
    let NodeKind::Item(kind) = engine.tree().kind(node) else {
        return Ty::Unknown;
    };
    match kind {
        ItemKind::Struct { .. } => Ty::Struct(node),
        ItemKind::Enum { .. } => Ty::Enum(node),
        ItemKind::Trait { .. } => Ty::Trait(node),
        ItemKind::TypeAlias { ty, .. } => {
            ty.map_or(Ty::Unknown, |ty| engine.resolve_annotation(ty))
        }
        ItemKind::Fn { .. } => derive::function_type(engine, node),
        ItemKind::Impl { .. }
        | ItemKind::Const { .. }
        | ItemKind::Static { .. }
        | ItemKind::Mod { .. }
        | ItemKind::Use { .. } => Ty::Unknown,
    }
}
