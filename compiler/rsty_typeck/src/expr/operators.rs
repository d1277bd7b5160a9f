//! Unary and binary operators.
//!
//! No operator overloading and no numeric inference: only operators whose
//! result type does not depend on their operands get a type.

use rsty_ir::{BinaryOp, NodeId, UnaryOp};
use rsty_types::Ty;

use crate::TypifyEngine;

pub(super) fn typify_unary(engine: &TypifyEngine<'_>, op: UnaryOp, operand: Option<NodeId>) -> Ty {
    let Some(operand) = operand else {
        return Ty::Unknown;
    };
    match op {
        UnaryOp::Box => Ty::Unknown,
        UnaryOp::Ref { mutable } => Ty::reference(engine.typify_expr(operand), mutable),
        // Deref, negation and `!` keep the operand type
        UnaryOp::Deref | UnaryOp::Neg | UnaryOp::Not => engine.typify_expr(operand),
    }
}

/// Comparisons and `&&` / `||` are `bool`; arithmetic, bitwise and
/// assignment operators are `Unknown`.
pub(super) fn typify_binary(op: BinaryOp) -> Ty {
    if op.is_comparison() || op.is_logical() {
        Ty::Bool
    } else {
        Ty::Unknown
    }
}
