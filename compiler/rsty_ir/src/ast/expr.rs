//! Expression nodes.

use super::{BinaryOp, UnaryOp};
use crate::{Name, NodeId, SymbolPath};

/// Literal category. The text itself lives in [`Literal::text`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LitKind {
    Int,
    Float,
    Str,
    Char,
    /// `b'a'`
    Byte,
    /// `b"abc"`
    ByteStr,
    /// `true` / `false`
    Bool(bool),
}

/// A literal token: its category plus the verbatim source text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Literal {
    pub kind: LitKind,
    pub text: Name,
}

/// Field initializer in a struct literal: `name: value`, or shorthand `name`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldInit {
    pub name: Name,
    pub value: Option<NodeId>,
}

/// Field selector in a field access.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FieldName {
    /// `s.name`
    Named(Name),
    /// `t.0`
    Positional(u32),
}

/// Expression kinds.
///
/// Optional children model incomplete source: an IDE tree routinely holds
/// `if` without a block or `&` without an operand.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ExprKind {
    Lit(Literal),
    /// `()`
    Unit,
    /// Name reference: `x`, `E::V`, `self`.
    Path(SymbolPath),
    Unary {
        op: UnaryOp,
        operand: Option<NodeId>,
    },
    Binary {
        op: BinaryOp,
        lhs: NodeId,
        rhs: NodeId,
    },
    Paren(NodeId),
    Tuple(Vec<NodeId>),
    Array(Vec<NodeId>),
    /// `Path { field: value, .. }`
    Struct {
        path: SymbolPath,
        fields: Vec<FieldInit>,
        base: Option<NodeId>,
    },
    Call {
        callee: NodeId,
        args: Vec<NodeId>,
    },
    MethodCall {
        receiver: NodeId,
        method: Name,
        args: Vec<NodeId>,
    },
    Field {
        receiver: NodeId,
        field: FieldName,
    },
    Index {
        base: NodeId,
        index: NodeId,
    },
    Cast {
        expr: NodeId,
        ty: NodeId,
    },
    /// Block expression; the child is a `NodeKind::Block`.
    Block(Option<NodeId>),
    /// `cond` may be a plain expression or a `NodeKind::ScopedLet`
    /// (`if let`). `else_branch` is a block expression or another `if`.
    If {
        cond: Option<NodeId>,
        then_block: Option<NodeId>,
        else_branch: Option<NodeId>,
    },
    While {
        cond: Option<NodeId>,
        body: Option<NodeId>,
    },
    Loop {
        body: Option<NodeId>,
    },
    For {
        pat: Option<NodeId>,
        iter: Option<NodeId>,
        body: Option<NodeId>,
    },
    /// Arms are `NodeKind::MatchArm` nodes.
    Match {
        scrutinee: Option<NodeId>,
        arms: Vec<NodeId>,
    },
    /// Params are `DeclKind::Param` nodes.
    Closure {
        params: Vec<NodeId>,
        ret_ty: Option<NodeId>,
        body: Option<NodeId>,
    },
    Return(Option<NodeId>),
    Break(Option<NodeId>),
    Continue,
}

impl ExprKind {
    pub(crate) fn push_children(&self, out: &mut Vec<NodeId>) {
        match self {
            ExprKind::Lit(_) | ExprKind::Unit | ExprKind::Path(_) | ExprKind::Continue => {}
            ExprKind::Unary { operand, .. } => out.extend(*operand),
            ExprKind::Binary { lhs, rhs, .. } => out.extend([*lhs, *rhs]),
            ExprKind::Paren(inner) => out.push(*inner),
            ExprKind::Tuple(elems) | ExprKind::Array(elems) => out.extend(elems),
            ExprKind::Struct { fields, base, .. } => {
                out.extend(fields.iter().filter_map(|f| f.value));
                out.extend(*base);
            }
            ExprKind::Call { callee, args } => {
                out.push(*callee);
                out.extend(args);
            }
            ExprKind::MethodCall { receiver, args, .. } => {
                out.push(*receiver);
                out.extend(args);
            }
            ExprKind::Field { receiver, .. } => out.push(*receiver),
            ExprKind::Index { base, index } => out.extend([*base, *index]),
            ExprKind::Cast { expr, ty } => out.extend([*expr, *ty]),
            ExprKind::Block(block) | ExprKind::Loop { body: block } => out.extend(*block),
            ExprKind::If {
                cond,
                then_block,
                else_branch,
            } => out.extend([*cond, *then_block, *else_branch].into_iter().flatten()),
            ExprKind::While { cond, body } => out.extend([*cond, *body].into_iter().flatten()),
            ExprKind::For { pat, iter, body } => {
                out.extend([*pat, *iter, *body].into_iter().flatten());
            }
            ExprKind::Match { scrutinee, arms } => {
                out.extend(*scrutinee);
                out.extend(arms);
            }
            ExprKind::Closure {
                params,
                ret_ty,
                body,
            } => {
                out.extend(params);
                out.extend([*ret_ty, *body].into_iter().flatten());
            }
            ExprKind::Return(value) | ExprKind::Break(value) => out.extend(*value),
        }
    }
}
