use indoc::indoc;

use crate::test_utils::{dump_diagnostics, parse};

#[test]
fn unclosed_tag() {
    insta::assert_snapshot!(dump_diagnostics(r#"t(p) ::= "<p.name""#), @r"error at 10..17: missing closing `>` (hint: a literal `<` in template text must be escaped as `\<`)");
}

#[test]
fn unexpected_token_is_skipped() {
    let (group, diagnostics) = parse(r#"t() ::= "x" @@ u() ::= "y""#);
    assert_eq!(group.templates.len(), 2);
    insta::assert_snapshot!(diagnostics.render_plain(), @"error at 12..14: unexpected `@@`");
}

#[test]
fn missing_define_as() {
    insta::assert_snapshot!(dump_diagnostics(r#"t(p) "x""#), @r#"error at 5..8: expected `::=` (hint: e.g., `name(primitive) ::= "..."`)"#);
}

#[test]
fn unclosed_dictionary() {
    insta::assert_snapshot!(dump_diagnostics(r#"d ::= [ "a": "b""#), @"error at 6..7: missing closing `]`; dictionary started here");
}

#[test]
fn duplicate_dictionary_key() {
    insta::assert_snapshot!(dump_diagnostics(r#"d ::= ["a": "x", "a": "y"]"#), @"error at 17..20: key `a` appears more than once (related: first used here at 7..10)");
}

#[test]
fn missing_dictionary_value() {
    insta::assert_snapshot!(dump_diagnostics(r#"d ::= ["a": ]"#), @"error at 12..13: expected dictionary value (hint: dictionary values are strings, `<<...>>` or `key`)");
}

#[test]
fn orphan_else() {
    insta::assert_snapshot!(dump_diagnostics(r#"t() ::= "a<else>b""#), @"error at 11..15: `<else>` without `<if>`");
}

#[test]
fn branch_after_else() {
    insta::assert_snapshot!(dump_diagnostics(r#"t(x) ::= "<if(x)>a<else>b<else>c<endif>""#), @"error at 26..30: no branch may follow `<else>`");
}

#[test]
fn unclosed_if() {
    insta::assert_snapshot!(dump_diagnostics(r#"t() ::= "<if(x)>a""#), @"error at 10..15: missing `<endif>`");
}

#[test]
fn unclosed_comment() {
    insta::assert_snapshot!(dump_diagnostics(r#"t() ::= "a<! b""#), @"error at 10..14: missing closing `!>`");
}

#[test]
fn dangling_dot() {
    insta::assert_snapshot!(dump_diagnostics(r#"t() ::= "<a.>""#), @"error at 12..12: expected name, found end of tag");
}

#[test]
fn unexpected_character_in_tag() {
    insta::assert_snapshot!(dump_diagnostics(r#"t() ::= "<a + b>""#), @"error at 12..13: unexpected character `+`");
}

#[test]
fn trailing_tokens_in_tag() {
    insta::assert_snapshot!(dump_diagnostics(r#"t() ::= "<a b>""#), @"error at 12..13: unexpected name after expression");
}

#[test]
fn empty_tag() {
    insta::assert_snapshot!(dump_diagnostics(r#"t() ::= "<>""#), @"error at 10..10: empty tag");
}

#[test]
fn unclosed_big_string() {
    insta::assert_snapshot!(dump_diagnostics("t() ::= <<abc"), @"error at 8..10: missing closing `>>`");
}

#[test]
fn unterminated_string() {
    insta::assert_snapshot!(dump_diagnostics("t() ::= \"abc\nu() ::= <<ok>>"), @r#"error at 8..12: missing closing `"`"#);
}

#[test]
fn unclosed_params_recovers_at_next_definition() {
    let input = indoc! {r#"
    t( ::= "x"
    u() ::= "<p>"
    "#};

    let (group, diagnostics) = parse(input);
    let names: Vec<&str> = group.templates.iter().map(|t| t.name.text.as_str()).collect();
    assert_eq!(names, ["u"]);
    insta::assert_snapshot!(diagnostics.render_plain(), @"error at 1..2: missing closing `)`; parameter list started here");
}

#[test]
fn template_without_parameter_list() {
    insta::assert_snapshot!(dump_diagnostics(r#"t ::= "x""#), @"error at 6..9: expected `[` to start a dictionary; templates need a parameter list, e.g. `name() ::= ...`");
}
