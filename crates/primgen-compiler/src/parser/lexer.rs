//! Lexer for group files.
//!
//! Produces span-based tokens; text is sliced from source only when needed.
//! Consecutive error characters are coalesced into single `Garbage` tokens.

use std::ops::Range;

use logos::Logos;
use rowan::TextRange;

use super::cst::SyntaxKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

pub(crate) fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                flush_garbage(&mut tokens, &mut error_start, lexer.span().start);
                tokens.push(Token::new(kind, range_to_text_range(lexer.span())));
            }
            Some(Err(())) => {
                if lexer.slice().starts_with("<<") {
                    flush_garbage(&mut tokens, &mut error_start, lexer.span().start);
                    tokens.push(Token::new(
                        SyntaxKind::UnclosedBigString,
                        range_to_text_range(lexer.span()),
                    ));
                } else if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                flush_garbage(&mut tokens, &mut error_start, source.len());
                break;
            }
        }
    }

    tokens
}

fn flush_garbage(tokens: &mut Vec<Token>, error_start: &mut Option<usize>, end: usize) {
    if let Some(start) = error_start.take() {
        tokens.push(Token::new(
            SyntaxKind::Garbage,
            range_to_text_range(start..end),
        ));
    }
}

/// Retrieves the text slice for a token.
#[inline]
pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[Range::<usize>::from(token.span)]
}
