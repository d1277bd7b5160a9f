//! Item, alias and signature typing.

use pretty_assertions::assert_eq;
use rsty_ir::{DeclKind, ItemKind};
use rsty_typeck::{type_at_offset, TypifyConfig, TypifyEngine, TypifyError};

use crate::common::Program;

#[test]
fn nominal_items_render_by_name() {
    let mut p = Program::new();
    let (point, _) = p.struct_item("Point", &[("x", "i32")]);
    let meters = p.tuple_struct("Meters", &["f64"]);
    let (shape, variants) = p.enum_item("Shape", &[("Dot", &[])]);
    let typed = p.finish();
    let engine = typed.engine();

    assert_eq!(typed.show(&engine.typify_item(point)), "Point");
    assert_eq!(typed.show(&engine.typify_item(meters)), "Meters");
    assert_eq!(typed.show(&engine.typify_item(shape)), "Shape");
    assert_eq!(typed.named(variants[0]), "Shape");
}

#[test]
fn aliases_resolve_through_chains() {
    // type Id = u32; type Pair = (Id, &Id);
    let mut p = Program::new();
    let u32_ty = p.ty("u32");
    let name = p.b().intern("Id");
    let id = p.b().item(ItemKind::TypeAlias {
        name,
        generics: vec![],
        ty: Some(u32_ty),
    });
    p.declare("Id", id);
    let pair_ty = p.ty("(Id, &Id)");
    let name = p.b().intern("Pair");
    let pair = p.b().item(ItemKind::TypeAlias {
        name,
        generics: vec![],
        ty: Some(pair_ty),
    });
    let typed = p.finish();

    assert_eq!(typed.named(id), "u32");
    assert_eq!(typed.named(pair), "(u32, &u32)");
}

#[test]
fn self_referential_alias_terminates() {
    // type Loop = (Loop, u8);
    let mut p = Program::new();
    let target = p.ty("(Loop, u8)");
    let name = p.b().intern("Loop");
    let alias = p.b().item(ItemKind::TypeAlias {
        name,
        generics: vec![],
        ty: Some(target),
    });
    p.declare("Loop", alias);
    let typed = p.finish();

    assert_eq!(typed.named(alias), "(<unknown>, u8)");
}

#[test]
fn depth_limit_truncates_alias_nesting() {
    // type Loop = (Loop, u8); under a depth limit of two
    let mut p = Program::new();
    let target = p.ty("(Loop, u8)");
    let name = p.b().intern("Loop");
    let alias = p.b().item(ItemKind::TypeAlias {
        name,
        generics: vec![],
        ty: Some(target),
    });
    p.declare("Loop", alias);
    let typed = p.finish();

    let config = TypifyConfig::default().with_max_depth(Some(2));
    let engine = TypifyEngine::builder(&typed.tree, &typed.names)
        .with_config(&config)
        .build();

    // Item and tuple take the two levels; the elements get none
    assert_eq!(
        typed.show(&engine.typify_item(alias)),
        "(<unknown>, <unknown>)"
    );
}

#[test]
fn function_signatures() {
    let mut p = Program::new();
    p.struct_item("Buf", &[]);
    let (write, _) = p.function(
        "write",
        &[("buf", Some("&mut Buf")), ("data", Some("&str")), ("hint", None)],
        Some("(usize, bool)"),
        None,
    );
    let (noop, _) = p.function("noop", &[], None, None);
    let typed = p.finish();

    assert_eq!(
        typed.named(write),
        "fn(&mut Buf, &str, <unknown>) -> (usize, bool)"
    );
    assert_eq!(typed.named(noop), "fn()");
}

#[test]
fn methods_include_the_receiver() {
    // impl Stack { fn push(&mut self, v: i64); fn into_len(self) -> usize; fn new() -> Self }
    let mut p = Program::new();
    p.struct_item("Stack", &[]);
    let (push, push_self) = p.method("push", Some((true, true)), &[("v", Some("i64"))], None);
    let (into_len, _) = p.method("into_len", Some((false, false)), &[], Some("usize"));
    let (new, _) = p.method("new", None, &[], Some("Self"));
    p.impl_block("Stack", vec![push, into_len, new]);
    let typed = p.finish();

    assert_eq!(typed.named(push), "fn(&mut Stack, i64)");
    assert_eq!(typed.named(into_len), "fn(Stack) -> usize");
    assert_eq!(typed.named(new), "fn() -> Stack");
    assert_eq!(typed.named(push_self.expect("receiver")), "&mut Stack");
}

#[test]
fn trait_methods_use_the_trait_as_self() {
    // trait Shape { fn area(&self) -> f64; fn scaled(&self) -> Self; }
    let mut p = Program::new();
    let (area, receiver) = p.method("area", Some((true, false)), &[], Some("f64"));
    let (scaled, _) = p.method("scaled", Some((true, false)), &[], Some("Self"));
    let name = p.b().intern("Shape");
    let shape = p.b().item(ItemKind::Trait {
        name,
        generics: vec![],
        members: vec![area, scaled],
    });
    let typed = p.finish();

    // The receiver only knows its impl target, and a trait has none
    assert_eq!(typed.named(receiver.expect("receiver")), "&<unknown>");
    assert_eq!(typed.named(scaled), "fn(&<unknown>) -> Shape");
    assert_eq!(typed.named(shape), "Shape");
}

#[test]
fn generic_parameters() {
    // fn first<T>(items: (T, T)) -> T
    let mut p = Program::new();
    let name = p.b().intern("T");
    let t = p.b().decl(DeclKind::TypeParam { name });
    p.declare("T", t);
    let (first, _) = p.function("first", &[("items", Some("(T, T)"))], Some("T"), None);
    let typed = p.finish();

    assert_eq!(typed.named(first), "fn((T, T)) -> T");
    assert_eq!(typed.named(t), "T");
}

#[test]
fn non_items_are_rejected() {
    let mut p = Program::new();
    let lit = p.b().int_lit("1");
    let typed = p.finish();

    let err = typed.engine().try_typify_item(lit).unwrap_err();
    assert_eq!(
        err,
        TypifyError::NotAnItem {
            node: lit,
            kind: "expression"
        }
    );
    assert!(err.to_string().contains("expression"));
}

#[test]
fn hover_over_item() {
    let mut p = Program::new();
    let (point, _) = p.struct_item("Point", &[]);
    p.b().set_span(point, rsty_ir::Span::new(0, 20));
    let typed = p.finish();

    assert_eq!(
        type_at_offset(&typed.engine(), 5).map(|(node, ty)| (node, typed.show(&ty))),
        Some((point, "Point".to_owned()))
    );
}
