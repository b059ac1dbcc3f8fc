use indoc::indoc;

use crate::test_utils::{dump, parse};

#[test]
fn quoted_template() {
    insta::assert_snapshot!(dump(r#"t(p) ::= "Hello <p.name>!""#), @r#"
    template t(p)
      text "Hello "
      expr p.name
      text "!"
    "#);
}

#[test]
fn big_string_template_strips_one_newline_each_side() {
    let input = indoc! {r#"
    body(primitive, _unused) ::= <<

    public class <primitive.name>Stack {}

    >>
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    template body(primitive, _unused)
      text "\npublic class "
      expr primitive.name
      text "Stack {}\n"
    "#);
}

#[test]
fn imports_come_first_in_dump() {
    let input = indoc! {r#"
    import "common.stg"
    // comments are trivia
    a() ::= "x"
    import "more.stg"
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    import "common.stg"
    import "more.stg"
    template a()
      text "x"
    "#);
}

#[test]
fn dictionary() {
    let input = indoc! {r#"
    wrappers ::= [
        "int": "Integer",
        "char": <<Character>>,
        default: key
    ]
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    dict wrappers
      "int":
        text "Integer"
      "char":
        text "Character"
      default: key
    "#);
}

#[test]
fn empty_dictionary_and_trailing_comma() {
    insta::assert_snapshot!(dump(r#"a ::= [] b ::= ["x": "y",]"#), @r#"
    dict a
    dict b
      "x":
        text "y"
    "#);
}

#[test]
fn contextual_keywords_are_plain_names() {
    let (group, diagnostics) = parse(r#"import() ::= "<key>" default(key) ::= "<key>""#);
    assert!(diagnostics.is_empty());
    let names: Vec<&str> = group.templates.iter().map(|t| t.name.text.as_str()).collect();
    assert_eq!(names, ["import", "default"]);
}

#[test]
fn lookup_helpers() {
    let (group, _) = parse(r#"a(x) ::= "" m ::= ["k": "v"]"#);
    assert_eq!(group.template("a").map(|t| t.arity()), Some(1));
    assert!(group.template("m").is_none());
    assert!(group.dict("m").is_some());
}
