//! Token kinds of the group file syntax.

use logos::{Lexer, Logos};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    /// `::=` introduces a template or dictionary body.
    #[token("::=")]
    DefineAs,

    /// Identifiers, including the contextual words `import`, `default` and `key`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Id,

    /// `"..."` template or string.
    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    StringLiteral,

    /// `"...` running to the end of the line without a closing quote.
    #[regex(r#""(?:[^"\\\n]|\\.)*"#, allow_greedy = true)]
    UnterminatedString,

    /// `<<...>>` template; unterminated ones are reported by the lexer.
    #[token("<<", big_string)]
    BigString,

    #[regex(r"[ \t]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    #[regex(r"//[^\n]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*[^/])*\*/")]
    BlockComment,

    /// `<<` with no closing `>>`, produced by the lexer.
    UnclosedBigString,

    /// Consecutive unrecognized characters, coalesced.
    Garbage,
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::Newline | Self::LineComment | Self::BlockComment
        )
    }
}

/// Consumes a `<<...>>` body. `\>>` does not close it.
fn big_string(lex: &mut Lexer<SyntaxKind>) -> bool {
    let rest = lex.remainder().as_bytes();
    let mut i = 0;
    while i + 1 < rest.len() {
        match (rest[i], rest[i + 1]) {
            (b'\\', _) => i += 2,
            (b'>', b'>') => {
                lex.bump(i + 2);
                return true;
            }
            _ => i += 1,
        }
    }
    lex.bump(rest.len());
    false
}
