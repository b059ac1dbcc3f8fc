use crate::test_utils::dump;

#[test]
fn properties_and_lookups() {
    insta::assert_snapshot!(dump(r#"t(p) ::= "<names.(p.name)><names.int><p.wrapperName>""#), @r"
    template t(p)
      expr names.(p.name)
      expr names.int
      expr p.wrapperName
    ");
}

#[test]
fn calls_with_arguments() {
    insta::assert_snapshot!(dump(r#"t(p) ::= "<literal(p, \"1\")><helper()><cast(p, p.zero)>""#), @r#"
    template t(p)
      expr literal(p, "1")
      expr helper()
      expr cast(p, p.zero)
    "#);
}

#[test]
fn condition_precedence() {
    insta::assert_snapshot!(dump(r#"t(p, a, b, c) ::= "<if(!p.floatingPoint && (a || b))>x<elseif(a || b && c)>y<endif>""#), @r#"
    template t(p, a, b, c)
      if (!p.floatingPoint && (a || b))
        text "x"
      elseif (a || (b && c))
        text "y"
      endif
    "#);
}

#[test]
fn whitespace_inside_tags() {
    insta::assert_snapshot!(dump(r#"t(p) ::= "< helper( p , p ) >""#), @r"
    template t(p)
      expr helper(p, p)
    ");
}
