//! Expression typifier.
//!
//! Synthesis only: the type of an expression is computed bottom-up from
//! its own shape, its children's types and the declarations its names
//! resolve to. There are no inference variables and nothing flows down
//! from the context.
//!
//! Dispatch is a single match on `ExprKind`, delegating to:
//! - `literals`: literal tokens
//! - `operators`: unary and binary operators
//! - `access`: paths and field accesses
//! - `calls`: calls and method calls
//! - `control_flow`: blocks, `if`, loops

mod access;
mod calls;
mod control_flow;
mod literals;
mod operators;

use rsty_ir::{ExprKind, NodeId, NodeKind};
use rsty_types::Ty;

use crate::{derive, TypifyEngine};

/// Type of an expression node. Non-expressions are `Unknown`.
pub(crate) fn typify_expr(engine: &TypifyEngine<'_>, node: NodeId) -> Ty {
    let NodeKind::Expr(kind) = engine.tree().kind(node) else {
        return Ty::Unknown;
    };
    match kind {
        ExprKind::Lit(lit) => literals::typify_literal(engine, *lit),
        ExprKind::Unit => Ty::Unit,

        // Names
        ExprKind::Path(_) => access::typify_path(engine, node),
        ExprKind::Field { .. } => access::typify_field(engine, node),
        ExprKind::Struct { .. } => derive::struct_literal_type(engine, node),

        // Operators
        ExprKind::Unary { op, operand } => operators::typify_unary(engine, *op, *operand),
        ExprKind::Binary { op, .. } => operators::typify_binary(*op),
        ExprKind::Paren(inner) => engine.typify_expr(*inner),

        // Composites
        ExprKind::Tuple(elems) => {
            Ty::tuple(elems.iter().map(|&e| engine.typify_expr(e)).collect())
        }

        // Calls
        ExprKind::Call { callee, .. } => calls::typify_call(engine, *callee),
        ExprKind::MethodCall { .. } => calls::typify_method_call(engine, node),

        // Control flow
        ExprKind::Block(block) => control_flow::typify_block(engine, *block),
        ExprKind::If {
            then_block,
            else_branch,
            ..
        } => control_flow::typify_if(engine, *then_block, *else_branch),
        ExprKind::While { .. } | ExprKind::Loop { .. } | ExprKind::For { .. } => Ty::Unit,

        // Outside the type model
        ExprKind::Array(_)
        | ExprKind::Index { .. }
        | ExprKind::Cast { .. }
        | ExprKind::Match { .. }
        | ExprKind::Closure { .. }
        | ExprKind::Return(_)
        | ExprKind::Break(_)
        | ExprKind::Continue => Ty::Unknown,
    }
}
