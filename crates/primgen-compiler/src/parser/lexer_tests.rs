use super::cst::SyntaxKind;
use super::lexer::{lex, token_text};

fn dump(src: &str) -> String {
    lex(src)
        .iter()
        .filter(|t| !t.kind.is_trivia())
        .map(|t| format!("{:?} {:?}", t.kind, token_text(src, t)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn group_tokens() {
    let src = r#"import "lib.stg" // shared
t(p) ::= <<x>> d ::= ["k": key]"#;

    insta::assert_snapshot!(dump(src), @r#"
    Id "import"
    StringLiteral "\"lib.stg\""
    Id "t"
    ParenOpen "("
    Id "p"
    ParenClose ")"
    DefineAs "::="
    BigString "<<x>>"
    Id "d"
    DefineAs "::="
    BracketOpen "["
    StringLiteral "\"k\""
    Colon ":"
    Id "key"
    BracketClose "]"
    "#);
}

#[test]
fn trivia_is_kept_in_stream() {
    let kinds: Vec<SyntaxKind> = lex("a /* b */ // c\n").iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::Id,
            SyntaxKind::Whitespace,
            SyntaxKind::BlockComment,
            SyntaxKind::Whitespace,
            SyntaxKind::LineComment,
            SyntaxKind::Newline,
        ]
    );
}

#[test]
fn escaped_close_does_not_end_big_string() {
    insta::assert_snapshot!(dump(r"<<a\>>b>> x"), @r#"
    BigString "<<a\\>>b>>"
    Id "x"
    "#);
}

#[test]
fn big_string_spans_lines() {
    let src = "<<\nline one\nline two\n>>";
    let tokens = lex(src);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, SyntaxKind::BigString);
}

#[test]
fn unclosed_big_string() {
    let tokens = lex("t() ::= <<abc");
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, SyntaxKind::UnclosedBigString);
    assert_eq!(u32::from(last.span.start()), 8);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(dump("a @#$ b"), @r#"
    Id "a"
    Garbage "@#$"
    Id "b"
    "#);
}

#[test]
fn unterminated_string() {
    insta::assert_snapshot!(dump("\"abc\nx"), @r#"
    UnterminatedString "\"abc"
    Id "x"
    "#);
}
