use std::path::PathBuf;

use indoc::indoc;
use primgen_core::PrimitiveKind;

use super::{RenderError, RenderErrorKind, Renderer};
use crate::{MemoryLoader, TemplateSet};

fn try_render(src: &str, template: &str, kind: PrimitiveKind) -> Result<String, RenderError> {
    let set = TemplateSet::from_source(src);
    assert!(set.is_valid(), "{}", set.diagnostics().render_plain());
    let unit = &set.units()[0];
    Renderer::new(&set, unit).render(template, kind.descriptor())
}

fn render(src: &str, template: &str, kind: PrimitiveKind) -> String {
    try_render(src, template, kind).unwrap()
}

fn render_all(src: &str, template: &str) -> String {
    PrimitiveKind::ALL
        .iter()
        .map(|&kind| format!("{}: {}", kind, render(src, template, kind)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn delta_only_for_floating_point() {
    let src = r#"t(p) ::= "assertEquals(a, b<p.delta>);""#;

    insta::assert_snapshot!(render_all(src, "t"), @r"
    boolean: assertEquals(a, b);
    byte: assertEquals(a, b);
    char: assertEquals(a, b);
    double: assertEquals(a, b, 0.0);
    float: assertEquals(a, b, 0.0);
    int: assertEquals(a, b);
    long: assertEquals(a, b);
    short: assertEquals(a, b);
    ");
}

#[test]
fn builtins() {
    let src = r#"t(p) ::= "<literal(p, \"1\")> | <cast(p, \"x\")> | <hashCode(p, \"v\")>""#;

    insta::assert_snapshot!(render(src, "t", PrimitiveKind::Int), @"1 | (int) x | v");
    insta::assert_snapshot!(render(src, "t", PrimitiveKind::Long), @"1L | (long) x | (int) (v ^ v >>> 32)");
    insta::assert_snapshot!(render(src, "t", PrimitiveKind::Float), @"1.0f | (float) x | Float.floatToIntBits(v)");
}

#[test]
fn boolean_cannot_be_cast() {
    let src = r#"t(p) ::= "<cast(p, \"x\")>""#;
    let err = try_render(src, "t", PrimitiveKind::Boolean).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"cannot render `t` of `<inline>` for boolean: boolean values cannot be cast");
}

#[test]
fn invalid_literal_for_type() {
    let src = r#"t(p) ::= "<literal(p, \"1.5\")>""#;
    assert_eq!(render(src, "t", PrimitiveKind::Double), "1.5");
    let err = try_render(src, "t", PrimitiveKind::Int).unwrap_err();
    insta::assert_snapshot!(err.kind.to_string(), @"`1.5` is not a valid int literal");
}

#[test]
fn sum_methods_are_gated() {
    let src = indoc! {r#"
    class(primitive) ::= <<
    class <primitive.name>List {
        <if(primitive.supportsSum)>
        <primitive.sumType> sum();
        <endif>
    }
    >>
    "#};

    insta::assert_snapshot!(render(src, "class", PrimitiveKind::Char), @r"
    class CharList {
    }
    ");
    insta::assert_snapshot!(render(src, "class", PrimitiveKind::Int), @r"
    class IntList {
        long sum();
    }
    ");
}

#[test]
fn multi_line_values_are_reindented() {
    let src = indoc! {r#"
    class(primitive) ::= <<
    {
        <methods(primitive)>
    }
    >>

    methods(p) ::= <<
    <p> a();

    <p> b();
    >>
    "#};

    insta::assert_snapshot!(render(src, "class", PrimitiveKind::Short), @r"
    {
        short a();

        short b();
    }
    ");
}

#[test]
fn dictionary_lookups() {
    let src = indoc! {r#"
    boxed ::= ["int": "Integer", "char": "Character", default: key]
    empty ::= []

    t(p) ::= <<
    <boxed.(p)> <boxed.int> <boxed.("x")> [<empty.(p)>]
    >>
    "#};

    insta::assert_snapshot!(render(src, "t", PrimitiveKind::Int), @"Integer Integer x []");
    insta::assert_snapshot!(render(src, "t", PrimitiveKind::Char), @"Character Integer x []");
    insta::assert_snapshot!(render(src, "t", PrimitiveKind::Long), @"long Integer x []");
}

#[test]
fn truthiness() {
    let src = r#"t(p) ::= "<if(\"\")>a<else>b<endif><if(p)>c<endif><if(!p.integral)>d<endif>""#;

    assert_eq!(render(src, "t", PrimitiveKind::Int), "bc");
    assert_eq!(render(src, "t", PrimitiveKind::Double), "bcd");
}

#[test]
fn elseif_chain() {
    let src = r#"t(p) ::= "<if(p.floatingPoint)>f<elseif(p.integral)>i<elseif(p.charPrimitive)>c<else>b<endif>""#;

    let rendered: String = PrimitiveKind::ALL
        .iter()
        .map(|&kind| render(src, "t", kind))
        .collect();
    assert_eq!(rendered, "bicffiii");
}

#[test]
fn booleans_render_as_words() {
    let src = r#"t(p) ::= "<p.supportsSum>""#;
    assert_eq!(render(src, "t", PrimitiveKind::Boolean), "false");
    assert_eq!(render(src, "t", PrimitiveKind::Byte), "true");
}

#[test]
fn property_on_text_fails() {
    let src = r#"t(p) ::= "<wrap(\"x\")><p>" wrap(s) ::= "<s.name>""#;
    let err = try_render(src, "t", PrimitiveKind::Int).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"cannot render `t` of `<inline>` for int: `.name` needs a primitive, found text");
}

#[test]
fn recursion_is_limited() {
    let set = TemplateSet::from_source(r#"t(p) ::= "<t(p)>""#);
    let unit = &set.units()[0];
    let err = Renderer::new(&set, unit)
        .recursion_limit(8)
        .render("t", PrimitiveKind::Int.descriptor())
        .unwrap_err();
    assert_eq!(err.kind, RenderErrorKind::RecursionLimitExceeded(8));
}

#[test]
fn undefined_template() {
    let set = TemplateSet::from_source(r#"t(p) ::= "<p>""#);
    let unit = &set.units()[0];
    let err = Renderer::new(&set, unit)
        .render("missing", PrimitiveKind::Int.descriptor())
        .unwrap_err();
    assert_eq!(
        err.kind,
        RenderErrorKind::UndefinedTemplate("missing".to_string())
    );
}

#[test]
fn importer_overrides_library_helper() {
    let loader = MemoryLoader::new()
        .file(
            "main.stg",
            r#"import "base.stg" class(primitive) ::= "<body(primitive)>" helper() ::= "main""#,
        )
        .file("base.stg", r#"body(p) ::= "<helper()>:<p>" helper() ::= "base""#);

    let set = TemplateSet::load(&[PathBuf::from("main.stg")], &loader).unwrap();
    assert!(set.is_valid(), "{}", set.diagnostics().render_plain());
    let unit = &set.units()[0];
    let out = Renderer::new(&set, unit)
        .render("class", PrimitiveKind::Int.descriptor())
        .unwrap();
    assert_eq!(out, "main:int");
}
