//! Pattern binding typing.

use pretty_assertions::assert_eq;
use rsty_ir::{ExprKind, FieldPat, NodeKind, PatKind, UnaryOp};
use rsty_typeck::{IdentityBindingInference, TypifyEngine};

use crate::common::Program;

#[test]
fn let_with_annotation_and_initializer() {
    // let a: u16 = 1; let b = "s"; let c;
    let mut p = Program::new();
    let a = p.b().binding("a");
    let u16_ty = p.ty("u16");
    let one = p.b().int_lit("1");
    p.b().let_stmt(a, Some(u16_ty), Some(one));
    let b = p.b().binding("b");
    let s = p.b().str_lit("\"s\"");
    p.b().let_stmt(b, None, Some(s));
    let c = p.b().binding("c");
    p.b().let_stmt(c, None, None);
    let typed = p.finish();

    assert_eq!(typed.named(a), "u16");
    assert_eq!(typed.named(b), "str");
    assert_eq!(typed.named(c), "<unknown>");
}

#[test]
fn parameters() {
    let mut p = Program::new();
    p.struct_item("Config", &[]);
    let (_, params) = p.function(
        "run",
        &[("config", Some("&Config")), ("verbose", Some("bool")), ("extra", None)],
        None,
        None,
    );
    let typed = p.finish();

    assert_eq!(typed.named(params[0]), "&Config");
    assert_eq!(typed.named(params[1]), "bool");
    assert_eq!(typed.named(params[2]), "<unknown>");
}

#[test]
fn destructuring_a_borrowed_struct() {
    // struct Pair { left: u8, right: (char, bool) }
    // fn f(pair: &Pair) { let Pair { left, right: (c, _) } = pair; }
    let mut p = Program::new();
    p.struct_item("Pair", &[("left", "u8"), ("right", "(char, bool)")]);
    p.function("f", &[("pair", Some("&Pair"))], None, None);

    let left = p.b().binding("left");
    let c = p.b().binding("c");
    let wild = p.b().pat(PatKind::Wild);
    let right = p.b().pat(PatKind::Tuple(vec![c, wild]));
    let path = p.b().path("Pair");
    let left_name = p.b().intern("left");
    let right_name = p.b().intern("right");
    let pat = p.b().pat(PatKind::Struct {
        path,
        fields: vec![
            FieldPat {
                name: left_name,
                pat: left,
            },
            FieldPat {
                name: right_name,
                pat: right,
            },
        ],
    });
    let init = p.path("pair");
    p.b().let_stmt(pat, None, Some(init));
    let typed = p.finish();

    assert_eq!(typed.named(left), "&u8");
    assert_eq!(typed.named(c), "&char");
}

#[test]
fn match_on_enum_variants() {
    // enum Token { Num(i64), Pair(char, char) }
    // match tok { Token::Num(n) => .., Token::Pair(_, ref last) => .. }
    let mut p = Program::new();
    let (_, variants) = p.enum_item("Token", &[("Num", &["i64"]), ("Pair", &["char", "char"])]);
    p.function("f", &[("tok", Some("Token"))], None, None);

    let n = p.b().binding("n");
    let path = p.b().path("Token::Num");
    let num_pat = p.b().pat(PatKind::TupleStruct {
        path,
        elems: vec![n],
    });
    let wild = p.b().pat(PatKind::Wild);
    let name = p.b().intern("last");
    let last = p.b().pat(PatKind::Binding {
        name,
        by_ref: true,
        mutable: false,
        sub: None,
    });
    let path = p.b().path("Token::Pair");
    let pair_pat = p.b().pat(PatKind::TupleStruct {
        path,
        elems: vec![wild, last],
    });
    let arms = [num_pat, pair_pat].map(|pat| {
        p.b().alloc(NodeKind::MatchArm {
            pat: Some(pat),
            guard: None,
            body: None,
        })
    });
    let scrutinee = p.path("tok");
    p.b().expr(ExprKind::Match {
        scrutinee: Some(scrutinee),
        arms: arms.to_vec(),
    });
    let typed = p.finish();

    assert_eq!(typed.named(n), "i64");
    assert_eq!(typed.named(last), "&char");
    assert_eq!(typed.named(variants[1]), "Token");
}

#[test]
fn if_let_through_a_reference() {
    // if let (x, &y) = &(1u8, &'c') {}
    let mut p = Program::new();
    let x = p.b().binding("x");
    let y = p.b().binding("y");
    let ref_y = p.b().pat(PatKind::Ref {
        pat: y,
        mutable: false,
    });
    let pat = p.b().pat(PatKind::Tuple(vec![x, ref_y]));

    let byte = p.b().int_lit("1u8");
    let c = p.b().char_lit("'c'");
    let c_ref = p.b().expr(ExprKind::Unary {
        op: UnaryOp::Ref { mutable: false },
        operand: Some(c),
    });
    let tuple = p.b().expr(ExprKind::Tuple(vec![byte, c_ref]));
    let scrutinee = p.b().expr(ExprKind::Unary {
        op: UnaryOp::Ref { mutable: false },
        operand: Some(tuple),
    });
    p.b().alloc(NodeKind::ScopedLet {
        pat: Some(pat),
        scrutinee: Some(scrutinee),
    });
    let typed = p.finish();

    assert_eq!(typed.named(x), "&u8");
    // `&y` takes the referent and resets the binding mode
    assert_eq!(typed.named(y), "char");
}

#[test]
fn identity_inference_sees_whole_pattern() {
    let mut p = Program::new();
    let a = p.b().binding("a");
    let b = p.b().binding("b");
    let pat = p.b().pat(PatKind::Tuple(vec![a, b]));
    let annotation = p.ty("(i8, f32)");
    p.b().let_stmt(pat, Some(annotation), None);
    let typed = p.finish();

    let engine = TypifyEngine::builder(&typed.tree, &typed.names)
        .with_binding_inference(&IdentityBindingInference)
        .build();
    assert_eq!(typed.show(&engine.typify(a)), "(i8, f32)");
    assert_eq!(typed.named(a), "i8");
    assert_eq!(typed.named(b), "f32");
}

#[test]
fn long_let_chain() {
    // let x0 = 1u8; let x1 = x0; ... let x299 = x298;
    let mut p = Program::new();
    let first = p.b().binding("x0");
    p.declare("x0", first);
    let one = p.b().int_lit("1u8");
    p.b().let_stmt(first, None, Some(one));
    let mut last = first;
    for i in 1..300 {
        let name = format!("x{i}");
        let binding = p.b().binding(&name);
        p.declare(&name, binding);
        let prev = p.path(&format!("x{}", i - 1));
        p.b().let_stmt(binding, None, Some(prev));
        last = binding;
    }
    let typed = p.finish();

    assert_eq!(typed.named(last), "u8");
}

#[test]
fn binding_initialized_from_itself() {
    // let x = (x, 'c');
    let mut p = Program::new();
    let x = p.b().binding("x");
    p.declare("x", x);
    let use_x = p.path("x");
    let c = p.b().char_lit("'c'");
    let init = p.b().expr(ExprKind::Tuple(vec![use_x, c]));
    p.b().let_stmt(x, None, Some(init));
    let typed = p.finish();

    assert_eq!(typed.named(x), "(<unknown>, char)");
    assert_eq!(typed.expr(init), "((<unknown>, char), char)");
}
