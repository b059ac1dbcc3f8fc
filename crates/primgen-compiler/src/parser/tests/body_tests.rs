use indoc::indoc;

use crate::test_utils::dump;

#[test]
fn branch_lines_are_removed() {
    let input = indoc! {r#"
    t(p) ::= <<
    class A {
        <if(p.supportsSum)>
        sum;
        <else>
        none;
        <endif>
    }
    >>
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    template t(p)
      text "class A {\n"
      if p.supportsSum
        text "    sum;\n"
      else
        text "    none;\n"
      endif
      text "}"
    "#);
}

#[test]
fn inline_branches_keep_surrounding_text() {
    insta::assert_snapshot!(dump(r#"t(p) ::= "a <if(p)>b<endif> c""#), @r#"
    template t(p)
      text "a "
      if p
        text "b"
      endif
      text " c"
    "#);
}

#[test]
fn nested_ifs() {
    let input = indoc! {r#"
    t(a, b) ::= <<
    <if(a)>
    <if(b)>
    both
    <endif>
    <endif>
    >>
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    template t(a, b)
      if a
        if b
          text "both\n"
        endif
      endif
    "#);
}

#[test]
fn expression_alone_on_line_captures_indent() {
    let input = indoc! {r#"
    t(p) ::= <<
    {
        <body(p)>
    }
    >>
    "#};

    insta::assert_snapshot!(dump(input), @r#"
    template t(p)
      text "{\n    "
      expr body(p) indent="    "
      text "\n}"
    "#);
}

#[test]
fn expression_after_text_has_no_indent() {
    insta::assert_snapshot!(dump(r#"t(p) ::= "x <p>""#), @r#"
    template t(p)
      text "x "
      expr p
    "#);
}

#[test]
fn quoted_escapes() {
    insta::assert_snapshot!(dump(r#"t() ::= "a\tb \<x\> \"q\" \\""#), @r#"
    template t()
      text "a\tb <x> \"q\" \\"
    "#);
}

#[test]
fn big_string_keeps_backslashes() {
    insta::assert_snapshot!(dump(r#"t() ::= <<a\n\<b\>>>"#), @r#"
    template t()
      text "a\\n<b>"
    "#);
}

#[test]
fn comments_are_dropped() {
    insta::assert_snapshot!(dump(r#"t() ::= "a<! note !>b""#), @r#"
    template t()
      text "ab"
    "#);
}

#[test]
fn quoted_strings_inside_quoted_body() {
    insta::assert_snapshot!(dump(r#"t(p) ::= "<helper(p, \"a>b\")>""#), @r#"
    template t(p)
      expr helper(p, "a>b")
    "#);
}
