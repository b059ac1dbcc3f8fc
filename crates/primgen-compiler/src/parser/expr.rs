//! Expressions inside `<...>` tags.

use std::ops::Range;

use logos::Logos;
use rowan::{TextRange, TextSize};

use super::ast::{Cond, Expr, Ident};
use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};
use crate::source_map::SourceId;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum ExprToken {
    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token("!")]
    Bang,

    #[token("&&")]
    And,

    #[token("||")]
    Or,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    Str,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Id,

    #[regex(r"[ \t\r\n]+")]
    Whitespace,
}

impl ExprToken {
    fn describe(self) -> &'static str {
        match self {
            Self::ParenOpen => "`(`",
            Self::ParenClose => "`)`",
            Self::Comma => "`,`",
            Self::Dot => "`.`",
            Self::Bang => "`!`",
            Self::And => "`&&`",
            Self::Or => "`||`",
            Self::Str => "string",
            Self::Id => "name",
            Self::Whitespace => "whitespace",
        }
    }
}

/// What a single tag turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Tag {
    Expr(Expr),
    If(Cond),
    ElseIf(Cond),
    Else,
    EndIf,
}

/// Marker for an error that has already been reported.
struct Reported;

type ParseResult<T> = Result<T, Reported>;

pub(crate) struct ExprParser<'a> {
    text: &'a str,
    tokens: Vec<(ExprToken, Range<usize>)>,
    pos: usize,
    base: u32,
    limit: u32,
    source: SourceId,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> ExprParser<'a> {
    /// `range` is where the tag content sits in the group source; token
    /// positions are mapped into it.
    pub(crate) fn new(
        text: &'a str,
        range: TextRange,
        source: SourceId,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        Self {
            text,
            tokens: Vec::new(),
            pos: 0,
            base: range.start().into(),
            limit: range.end().into(),
            source,
            diagnostics,
        }
    }

    /// Parses a whole tag. Returns `None` once a diagnostic has been reported.
    pub(crate) fn parse_tag(mut self) -> Option<Tag> {
        self.tokenize().ok()?;

        if self.tokens.is_empty() {
            self.error(0..self.text.len(), "empty tag");
            return None;
        }

        let tag = match self.keyword() {
            Some("if") if self.nth_is(1, ExprToken::ParenOpen) => {
                self.pos += 1;
                Tag::If(self.paren_cond().ok()?)
            }
            Some("elseif") if self.nth_is(1, ExprToken::ParenOpen) => {
                self.pos += 1;
                Tag::ElseIf(self.paren_cond().ok()?)
            }
            Some("else") if self.tokens.len() == 1 => {
                self.pos += 1;
                Tag::Else
            }
            Some("endif") if self.tokens.len() == 1 => {
                self.pos += 1;
                Tag::EndIf
            }
            _ => Tag::Expr(self.expr().ok()?),
        };

        if let Some((token, range)) = self.tokens.get(self.pos).cloned() {
            self.error(range, &format!("unexpected {} after expression", token.describe()));
            return None;
        }
        Some(tag)
    }

    fn tokenize(&mut self) -> ParseResult<()> {
        let mut lexer = ExprToken::lexer(self.text);
        while let Some(result) = lexer.next() {
            match result {
                Ok(ExprToken::Whitespace) => {}
                Ok(token) => self.tokens.push((token, lexer.span())),
                Err(()) => {
                    let msg = format!("unexpected character `{}`", lexer.slice());
                    self.error(lexer.span(), &msg);
                    return Err(Reported);
                }
            }
        }
        Ok(())
    }

    fn keyword(&self) -> Option<&'a str> {
        let text = self.text;
        match self.tokens.first() {
            Some((ExprToken::Id, range)) => Some(&text[range.clone()]),
            _ => None,
        }
    }

    fn nth_is(&self, n: usize, token: ExprToken) -> bool {
        self.tokens.get(self.pos + n).is_some_and(|(t, _)| *t == token)
    }

    fn peek(&self) -> Option<ExprToken> {
        self.tokens.get(self.pos).map(|(t, _)| *t)
    }

    fn bump(&mut self) -> Range<usize> {
        let range = self.tokens[self.pos].1.clone();
        self.pos += 1;
        range
    }

    fn expect(&mut self, token: ExprToken) -> ParseResult<Range<usize>> {
        if self.peek() == Some(token) {
            return Ok(self.bump());
        }
        let found = self.peek().map_or("end of tag", ExprToken::describe);
        let at = self.current_range();
        self.error(at, &format!("expected {}, found {}", token.describe(), found));
        Err(Reported)
    }

    fn current_range(&self) -> Range<usize> {
        match self.tokens.get(self.pos) {
            Some((_, range)) => range.clone(),
            None => self.text.len()..self.text.len(),
        }
    }

    fn paren_cond(&mut self) -> ParseResult<Cond> {
        self.expect(ExprToken::ParenOpen)?;
        let cond = self.cond()?;
        self.expect(ExprToken::ParenClose)?;
        Ok(cond)
    }

    fn cond(&mut self) -> ParseResult<Cond> {
        let mut lhs = self.and_cond()?;
        while self.peek() == Some(ExprToken::Or) {
            self.bump();
            let rhs = self.and_cond()?;
            lhs = Cond::Or(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn and_cond(&mut self) -> ParseResult<Cond> {
        let mut lhs = self.unary_cond()?;
        while self.peek() == Some(ExprToken::And) {
            self.bump();
            let rhs = self.unary_cond()?;
            lhs = Cond::And(Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn unary_cond(&mut self) -> ParseResult<Cond> {
        match self.peek() {
            Some(ExprToken::Bang) => {
                self.bump();
                Ok(Cond::Not(Box::new(self.unary_cond()?)))
            }
            Some(ExprToken::ParenOpen) => self.paren_cond(),
            _ => Ok(Cond::Expr(self.expr()?)),
        }
    }

    fn expr(&mut self) -> ParseResult<Expr> {
        let mut expr = self.primary()?;
        while self.peek() == Some(ExprToken::Dot) {
            self.bump();
            if self.peek() == Some(ExprToken::ParenOpen) {
                self.bump();
                let key = self.expr()?;
                let close = self.expect(ExprToken::ParenClose)?;
                let range = expr.range().cover(self.abs(close));
                expr = Expr::Lookup {
                    target: Box::new(expr),
                    key: Box::new(key),
                    range,
                };
            } else {
                let name = self.ident()?;
                expr = Expr::Prop {
                    target: Box::new(expr),
                    name,
                };
            }
        }
        Ok(expr)
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        match self.peek() {
            Some(ExprToken::Str) => {
                let range = self.bump();
                let raw = &self.text[range.start + 1..range.end - 1];
                Ok(Expr::Str {
                    value: unescape(raw),
                    range: self.abs(range),
                })
            }
            Some(ExprToken::Id) => {
                let name = self.ident()?;
                if self.peek() != Some(ExprToken::ParenOpen) {
                    return Ok(Expr::Attr(name));
                }
                self.bump();
                let args = self.args()?;
                let close = self.expect(ExprToken::ParenClose)?;
                let range = name.range.cover(self.abs(close));
                Ok(Expr::Call { name, args, range })
            }
            found => {
                let found = found.map_or("end of tag", ExprToken::describe);
                let at = self.current_range();
                self.error(at, &format!("expected an expression, found {}", found));
                Err(Reported)
            }
        }
    }

    fn args(&mut self) -> ParseResult<Vec<Expr>> {
        let mut args = Vec::new();
        if self.peek() == Some(ExprToken::ParenClose) {
            return Ok(args);
        }
        args.push(self.expr()?);
        while self.peek() == Some(ExprToken::Comma) {
            self.bump();
            args.push(self.expr()?);
        }
        Ok(args)
    }

    fn ident(&mut self) -> ParseResult<Ident> {
        let range = self.expect(ExprToken::Id)?;
        Ok(Ident {
            text: self.text[range.clone()].to_string(),
            range: self.abs(range),
        })
    }

    fn abs(&self, range: Range<usize>) -> TextRange {
        let clamp = |offset: usize| TextSize::from((self.base + offset as u32).min(self.limit));
        TextRange::new(clamp(range.start), clamp(range.end))
    }

    fn error(&mut self, range: Range<usize>, message: &str) {
        let span = Span::new(self.source, self.abs(range));
        self.diagnostics
            .report(DiagnosticKind::InvalidExpression, span)
            .message(message)
            .emit();
    }
}

/// Resolves `\"`, `\\`, `\n` and `\t`; other backslashes are kept.
pub(crate) fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
