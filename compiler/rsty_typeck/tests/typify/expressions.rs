//! Expression typing through whole programs.

use pretty_assertions::assert_eq;
use rsty_ir::{BinaryOp, ExprKind, FieldName, UnaryOp};

use crate::common::Program;

#[test]
fn literal_types() {
    let mut p = Program::new();
    let cases = [
        (p.b().int_lit("42u32"), "u32"),
        (p.b().int_lit("42"), "i32"),
        (p.b().int_lit("3_f64"), "f64"),
        (p.b().float_lit("1.5"), "f64"),
        (p.b().float_lit("1.5f32"), "f32"),
        (p.b().str_lit("\"hi\""), "str"),
        (p.b().char_lit("'x'"), "char"),
        (p.b().bool_lit(true), "bool"),
    ];
    let typed = p.finish();

    for (node, expected) in cases {
        assert_eq!(typed.expr(node), expected);
    }
}

#[test]
fn tuple_of_mixed_literals() {
    let mut p = Program::new();
    let one = p.b().int_lit("1u8");
    let text = p.b().str_lit("\"s\"");
    let borrowed = p.b().expr(ExprKind::Unary {
        op: UnaryOp::Ref { mutable: true },
        operand: Some(text),
    });
    let tuple = p.b().expr(ExprKind::Tuple(vec![one, borrowed]));
    let another = p.b().int_lit("2u8");
    let single = p.b().expr(ExprKind::Tuple(vec![another]));
    let typed = p.finish();

    assert_eq!(typed.expr(tuple), "(u8, &mut str)");
    assert_eq!(typed.expr(single), "(u8,)");
}

#[test]
fn comparison_is_bool_arithmetic_is_unknown() {
    let mut p = Program::new();
    let a = p.b().int_lit("1");
    let c = p.b().int_lit("2");
    let lt = p.b().expr(ExprKind::Binary {
        op: BinaryOp::Lt,
        lhs: a,
        rhs: c,
    });
    let x = p.b().int_lit("1");
    let y = p.b().int_lit("2");
    let sum = p.b().expr(ExprKind::Binary {
        op: BinaryOp::Add,
        lhs: x,
        rhs: y,
    });
    let typed = p.finish();

    assert_eq!(typed.expr(lt), "bool");
    assert_eq!(typed.expr(sum), "<unknown>");
}

#[test]
fn call_returns_declared_type() {
    // fn parse(text: &str) -> (u32, bool); parse("1")
    let mut p = Program::new();
    p.function("parse", &[("text", Some("&str"))], Some("(u32, bool)"), None);
    let arg = p.b().str_lit("\"1\"");
    let call = p.call("parse", vec![arg]);
    let callee = p.path("parse");
    let typed = p.finish();

    assert_eq!(typed.expr(call), "(u32, bool)");
    assert_eq!(typed.expr(callee), "fn(&str) -> (u32, bool)");
}

#[test]
fn call_of_unannotated_function_is_unit() {
    let mut p = Program::new();
    p.function("tick", &[], None, None);
    let call = p.call("tick", vec![]);
    let unknown = p.call("missing", vec![]);
    let typed = p.finish();

    assert_eq!(typed.expr(call), "()");
    assert_eq!(typed.expr(unknown), "<unknown>");
}

#[test]
fn method_call_and_field_access() {
    // struct Point { x: f64, y: f64 }
    // impl Point { fn norm(&self) -> f64 }
    // fn f(p: &Point) { p.norm(); p.x }
    let mut p = Program::new();
    let (_, fields) = p.struct_item("Point", &[("x", "f64"), ("y", "f64")]);
    let (norm, _) = p.method("norm", Some((true, false)), &[], Some("f64"));
    p.impl_block("Point", vec![norm]);
    p.function("f", &[("p", Some("&Point"))], None, None);

    let receiver = p.path("p");
    let call = p.method_call(receiver, "norm", norm);
    let receiver = p.path("p");
    let x = p.b().intern("x");
    let access = p.b().expr(ExprKind::Field {
        receiver,
        field: FieldName::Named(x),
    });
    p.refer(access, fields[0]);
    let typed = p.finish();

    assert_eq!(typed.expr(receiver), "&Point");
    assert_eq!(typed.expr(call), "f64");
    assert_eq!(typed.named(norm), "fn(&Point) -> f64");
    assert_eq!(typed.expr(access), "f64");
}

#[test]
fn variant_constructors() {
    // enum Shape { Circle(f64), Empty }
    let mut p = Program::new();
    p.enum_item("Shape", &[("Circle", &["f64"]), ("Empty", &[])]);
    let radius = p.b().float_lit("1.0");
    let circle = p.call("Shape::Circle", vec![radius]);
    let empty = p.path("Shape::Empty");
    let typed = p.finish();

    assert_eq!(typed.expr(circle), "Shape");
    assert_eq!(typed.expr(empty), "Shape");
}

#[test]
fn block_and_if() {
    // { let n = 1u64; if true { n } else { 0 } }
    let mut p = Program::new();
    let n = p.b().binding("n");
    p.declare("n", n);
    let one = p.b().int_lit("1u64");
    let stmt = p.b().let_stmt(n, None, Some(one));
    let cond = p.b().bool_lit(true);
    let use_n = p.path("n");
    let then_block = p.b().block(vec![], Some(use_n));
    let zero = p.b().int_lit("0");
    let else_block = p.b().block(vec![], Some(zero));
    let if_expr = p.b().expr(ExprKind::If {
        cond: Some(cond),
        then_block: Some(then_block),
        else_branch: Some(else_block),
    });
    let block = p.b().block(vec![stmt], Some(if_expr));
    let typed = p.finish();

    assert_eq!(typed.expr(block), "u64");
    assert_eq!(typed.expr(use_n), "u64");
}

#[test]
fn self_value_in_method_body() {
    // impl Counter { fn get(&mut self) { self } }
    let mut p = Program::new();
    p.tuple_struct("Counter", &["u32"]);
    let self_expr = p.path("self");
    let body = p.b().block(vec![], Some(self_expr));
    let receiver = p.b().decl(rsty_ir::DeclKind::SelfParam {
        is_ref: true,
        mutable: true,
    });
    let name = p.b().intern("get");
    let get = p.b().decl(rsty_ir::DeclKind::Method {
        name,
        sig: rsty_ir::FnSig {
            self_param: Some(receiver),
            body: Some(body),
            ..rsty_ir::FnSig::default()
        },
    });
    p.impl_block("Counter", vec![get]);
    let typed = p.finish();

    assert_eq!(typed.expr(self_expr), "&mut Counter");
    assert_eq!(typed.expr(body), "&mut Counter");
}
