use super::*;
use pretty_assertions::assert_eq;
use rsty_types::PrimitiveTy;

#[test]
fn test_defaults() {
    let config = TypifyConfig::default();
    assert_eq!(config.default_int, IntKind::I32);
    assert_eq!(config.default_float, FloatKind::F64);
    assert_eq!(config.max_depth, None);
    assert_eq!(config.primitives, PrimitiveTable::rust());
}

#[test]
fn test_parse_max_depth() {
    assert_eq!(parse_max_depth("64"), Ok(Some(64)));
    assert_eq!(parse_max_depth(" 1024 "), Ok(Some(1024)));
    assert_eq!(parse_max_depth("none"), Ok(None));
    assert_eq!(parse_max_depth("Unbounded"), Ok(None));
    assert!(parse_max_depth("-1").is_err());
    assert!(parse_max_depth("deep").is_err());
    assert!(parse_max_depth("").is_err());
}

#[test]
fn test_builder_methods() {
    let mut primitives = PrimitiveTable::empty();
    primitives.insert("int", PrimitiveTy::Int(IntKind::I64));

    let config = TypifyConfig::default()
        .with_primitives(primitives.clone())
        .with_default_int(IntKind::I64)
        .with_default_float(FloatKind::F32)
        .with_max_depth(None);

    assert_eq!(config.primitives, primitives);
    assert_eq!(config.default_int, IntKind::I64);
    assert_eq!(config.default_float, FloatKind::F32);
    assert_eq!(config.max_depth, None);
}
