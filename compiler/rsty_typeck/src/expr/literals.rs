//! Literal tokens.

use rsty_ir::literal::{split_float_suffix, split_int_suffix};
use rsty_ir::{LitKind, Literal};
use rsty_types::{FloatKind, IntKind, Ty};

use crate::TypifyEngine;

/// Numeric literals always get a numeric type: an unknown or missing
/// suffix falls back to the configured default kind.
pub(super) fn typify_literal(engine: &TypifyEngine<'_>, lit: Literal) -> Ty {
    let config = engine.config();
    match lit.kind {
        LitKind::Int => {
            let (_, suffix) = split_int_suffix(engine.tree().text(lit.text));
            match suffix {
                Some(suffix) => IntKind::from_suffix(suffix)
                    .map(Ty::Int)
                    .or_else(|| FloatKind::from_suffix(suffix).map(Ty::Float))
                    .unwrap_or(Ty::Int(config.default_int)),
                None => Ty::Int(config.default_int),
            }
        }
        LitKind::Float => {
            let (_, suffix) = split_float_suffix(engine.tree().text(lit.text));
            Ty::Float(
                suffix
                    .and_then(FloatKind::from_suffix)
                    .unwrap_or(config.default_float),
            )
        }
        LitKind::Str => Ty::Str,
        LitKind::Char => Ty::Char,
        LitKind::Bool(_) => Ty::Bool,
        LitKind::Byte => Ty::Int(IntKind::U8),
        // `&[u8; N]` has no counterpart in the type model
        LitKind::ByteStr => Ty::Unknown,
    }
}
