//! Recursive-descent parser for the group grammar.
//!
//! Works on the non-trivia token stream. Lexical errors are reported once,
//! up front; the parser then steps over the offending tokens silently.

use indexmap::IndexMap;
use indexmap::map::Entry;
use rowan::{TextRange, TextSize};

use super::ast::{Body, DictDef, DictEntry, DictValue, Group, Ident, Import, TemplateDef};
use super::body::BodyParser;
use super::cst::SyntaxKind;
use super::expr::unescape;
use super::lexer::{Token, lex, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};
use crate::source_map::SourceId;

/// Marker for an error that has already been reported.
struct Reported;

type ParseResult<T> = Result<T, Reported>;

pub(crate) struct Parser<'s, 'd> {
    text: &'s str,
    source: SourceId,
    tokens: Vec<Token>,
    pos: usize,
    diagnostics: &'d mut Diagnostics,
}

impl<'s, 'd> Parser<'s, 'd> {
    pub(crate) fn new(source: SourceId, text: &'s str, diagnostics: &'d mut Diagnostics) -> Self {
        let tokens = lex(text)
            .into_iter()
            .filter(|t| !t.kind.is_trivia())
            .collect();
        Self {
            text,
            source,
            tokens,
            pos: 0,
            diagnostics,
        }
    }

    pub(crate) fn parse(mut self) -> Group {
        self.report_lexical_errors();

        let mut group = Group::new(self.source);
        while let Some(token) = self.peek() {
            match token.kind {
                kind if is_lexical_error(kind) => self.pos += 1,
                SyntaxKind::Id if self.at_import() => {
                    if let Ok(import) = self.import() {
                        group.imports.push(import);
                    }
                }
                SyntaxKind::Id => match self.definition() {
                    Ok(Definition::Template(t)) => group.templates.push(t),
                    Ok(Definition::Dict(d)) => group.dicts.push(d),
                    Err(Reported) => self.recover(),
                },
                _ => {
                    self.error(
                        DiagnosticKind::UnexpectedToken,
                        token.span,
                        "expected a template or dictionary definition",
                    );
                    self.pos += 1;
                    self.recover();
                }
            }
        }
        group
    }

    fn report_lexical_errors(&mut self) {
        let errors: Vec<Token> = self
            .tokens
            .iter()
            .filter(|t| is_lexical_error(t.kind))
            .copied()
            .collect();
        for token in errors {
            match token.kind {
                SyntaxKind::UnterminatedString => {
                    self.diagnostics
                        .report(DiagnosticKind::UnclosedString, self.span(token.span))
                        .emit();
                }
                SyntaxKind::UnclosedBigString => {
                    let open = TextRange::at(token.span.start(), TextSize::from(2));
                    self.diagnostics
                        .report(DiagnosticKind::UnclosedTemplate, self.span(open))
                        .emit();
                }
                _ => {
                    let found = token_text(self.text, &token).to_string();
                    self.error(
                        DiagnosticKind::UnexpectedToken,
                        token.span,
                        &format!("unexpected `{}`", found),
                    );
                }
            }
        }
    }

    fn import(&mut self) -> ParseResult<Import> {
        let keyword = self.bump();
        let Some(path) = self.eat(SyntaxKind::StringLiteral) else {
            let at = self.current_span_or(keyword.span);
            self.diagnostics
                .report(DiagnosticKind::ExpectedImportPath, self.span(at))
                .emit();
            return Err(Reported);
        };
        Ok(Import {
            path: unescape(self.inner(path.span, 1)),
            range: path.span,
        })
    }

    fn definition(&mut self) -> ParseResult<Definition> {
        let name = self.ident();

        match self.peek_kind() {
            Some(SyntaxKind::ParenOpen) => {
                let params = self.params()?;
                self.expect_define_as(&name)?;
                let body = self.template_body(name.range)?;
                Ok(Definition::Template(TemplateDef { name, params, body }))
            }
            Some(SyntaxKind::DefineAs) => {
                self.pos += 1;
                if self.peek_kind() != Some(SyntaxKind::BracketOpen) {
                    let at = self.current_span_or(name.range);
                    self.error(
                        DiagnosticKind::UnexpectedToken,
                        at,
                        "expected `[` to start a dictionary; templates need a parameter list, e.g. `name() ::= ...`",
                    );
                    return Err(Reported);
                }
                self.dict(name).map(Definition::Dict)
            }
            _ => {
                let at = self.current_span_or(name.range);
                self.diagnostics
                    .report(DiagnosticKind::ExpectedDefineAs, self.span(at))
                    .emit();
                Err(Reported)
            }
        }
    }

    fn params(&mut self) -> ParseResult<Vec<Ident>> {
        let open = self.bump();
        let mut params = Vec::new();

        loop {
            match self.peek_kind() {
                Some(SyntaxKind::ParenClose) => {
                    self.pos += 1;
                    return Ok(params);
                }
                Some(SyntaxKind::Id) => {
                    params.push(self.ident());
                    match self.peek_kind() {
                        Some(SyntaxKind::Comma) => self.pos += 1,
                        Some(SyntaxKind::ParenClose) => {}
                        _ => break,
                    }
                }
                Some(SyntaxKind::Comma) | Some(SyntaxKind::Colon) => {
                    let at = self.current_span_or(open.span);
                    self.diagnostics
                        .report(DiagnosticKind::ExpectedParamName, self.span(at))
                        .emit();
                    return Err(Reported);
                }
                _ => break,
            }
        }

        self.diagnostics
            .report(DiagnosticKind::UnclosedParams, self.span(open.span))
            .message("parameter list started here")
            .emit();
        Err(Reported)
    }

    fn expect_define_as(&mut self, name: &Ident) -> ParseResult<()> {
        if self.eat(SyntaxKind::DefineAs).is_some() {
            return Ok(());
        }
        let at = self.current_span_or(name.range);
        self.diagnostics
            .report(DiagnosticKind::ExpectedDefineAs, self.span(at))
            .emit();
        Err(Reported)
    }

    fn template_body(&mut self, anchor: TextRange) -> ParseResult<Body> {
        match self.peek_kind() {
            Some(SyntaxKind::StringLiteral) | Some(SyntaxKind::BigString) => {
                let token = self.bump();
                Ok(self.body(token))
            }
            Some(kind) if is_lexical_error(kind) => {
                self.pos += 1;
                Err(Reported)
            }
            _ => {
                let at = self.current_span_or(anchor);
                self.diagnostics
                    .report(DiagnosticKind::ExpectedTemplateBody, self.span(at))
                    .emit();
                Err(Reported)
            }
        }
    }

    fn dict(&mut self, name: Ident) -> ParseResult<DictDef> {
        let open = self.bump();
        let mut entries: IndexMap<String, DictEntry> = IndexMap::new();
        let mut default: Option<DictEntry> = None;

        loop {
            let Some(token) = self.peek() else {
                break;
            };

            let key = match token.kind {
                SyntaxKind::BracketClose => {
                    self.pos += 1;
                    return Ok(DictDef {
                        name,
                        entries,
                        default,
                    });
                }
                SyntaxKind::StringLiteral => {
                    self.pos += 1;
                    Some(unescape(self.inner(token.span, 1)))
                }
                SyntaxKind::Id if token_text(self.text, &token) == "default" => {
                    self.pos += 1;
                    None
                }
                _ => {
                    self.diagnostics
                        .report(DiagnosticKind::ExpectedDictKey, self.span(token.span))
                        .emit();
                    return Err(Reported);
                }
            };

            if self.eat(SyntaxKind::Colon).is_none() {
                let at = self.current_span_or(token.span);
                self.error(
                    DiagnosticKind::UnexpectedToken,
                    at,
                    "expected `:` after dictionary key",
                );
                return Err(Reported);
            }

            let value = self.dict_value(token.span)?;
            let entry = DictEntry {
                key_range: token.span,
                value,
            };

            match key {
                Some(key) => match entries.entry(key) {
                    Entry::Occupied(first) => {
                        let first_range = first.get().key_range;
                        let first_span = self.span(first_range);
                        self.diagnostics
                            .report(DiagnosticKind::DuplicateDictKey, self.span(token.span))
                            .message(first.key())
                            .related_to("first used here", first_span)
                            .emit();
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(entry);
                    }
                },
                None if default.is_some() => {
                    self.diagnostics
                        .report(DiagnosticKind::DuplicateDictKey, self.span(token.span))
                        .message("default")
                        .emit();
                }
                None => default = Some(entry),
            }

            match self.peek_kind() {
                Some(SyntaxKind::Comma) => self.pos += 1,
                Some(SyntaxKind::BracketClose) => {}
                _ => break,
            }
        }

        self.diagnostics
            .report(DiagnosticKind::UnclosedDict, self.span(open.span))
            .message("dictionary started here")
            .emit();
        Err(Reported)
    }

    fn dict_value(&mut self, key_range: TextRange) -> ParseResult<DictValue> {
        match self.peek() {
            Some(token)
                if matches!(
                    token.kind,
                    SyntaxKind::StringLiteral | SyntaxKind::BigString
                ) =>
            {
                self.pos += 1;
                Ok(DictValue::Body(self.body(token)))
            }
            Some(token)
                if token.kind == SyntaxKind::Id && token_text(self.text, &token) == "key" =>
            {
                self.pos += 1;
                Ok(DictValue::Key)
            }
            _ => {
                let at = self.current_span_or(key_range);
                self.diagnostics
                    .report(DiagnosticKind::ExpectedDictValue, self.span(at))
                    .emit();
                Err(Reported)
            }
        }
    }

    fn body(&mut self, token: Token) -> Body {
        let quoted = token.kind == SyntaxKind::StringLiteral;
        let range = if quoted {
            shrink(token.span, 1)
        } else {
            self.big_string_content(token.span)
        };
        let text = self.text;
        let raw = &text[std::ops::Range::<usize>::from(range)];
        BodyParser::new(raw, range, quoted, self.source, self.diagnostics).parse()
    }

    /// Content of `<<...>>` minus one newline right after `<<` and one right before `>>`.
    fn big_string_content(&self, span: TextRange) -> TextRange {
        let inner = shrink(span, 2);
        let text = &self.text[std::ops::Range::<usize>::from(inner)];

        let lead = if text.starts_with("\r\n") {
            2
        } else {
            usize::from(text.starts_with('\n'))
        };
        let trail = if text[lead..].ends_with("\r\n") {
            2
        } else {
            usize::from(text[lead..].ends_with('\n'))
        };

        let start = inner.start() + TextSize::from(lead as u32);
        let end = inner.end() - TextSize::from(trail as u32);
        TextRange::new(start, end)
    }

    /// Skips to the next token that can start an item.
    fn recover(&mut self) {
        while let Some(token) = self.peek() {
            if token.kind == SyntaxKind::Id
                && (self.at_import()
                    || matches!(
                        self.nth_kind(1),
                        Some(SyntaxKind::ParenOpen) | Some(SyntaxKind::DefineAs)
                    ))
            {
                return;
            }
            self.pos += 1;
        }
    }

    fn at_import(&self) -> bool {
        self.peek()
            .is_some_and(|t| t.kind == SyntaxKind::Id && token_text(self.text, &t) == "import")
            && self.nth_kind(1) == Some(SyntaxKind::StringLiteral)
    }

    fn ident(&mut self) -> Ident {
        let token = self.bump();
        Ident {
            text: token_text(self.text, &token).to_string(),
            range: token.span,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_kind(&self) -> Option<SyntaxKind> {
        self.nth_kind(0)
    }

    fn nth_kind(&self, n: usize) -> Option<SyntaxKind> {
        self.tokens.get(self.pos + n).map(|t| t.kind)
    }

    fn bump(&mut self) -> Token {
        let token = self.tokens[self.pos];
        self.pos += 1;
        token
    }

    fn eat(&mut self, kind: SyntaxKind) -> Option<Token> {
        if self.peek_kind() == Some(kind) {
            return Some(self.bump());
        }
        None
    }

    /// The current token's span, or an empty span right after `fallback` at end of input.
    fn current_span_or(&self, fallback: TextRange) -> TextRange {
        match self.peek() {
            Some(token) => token.span,
            None => TextRange::empty(fallback.end()),
        }
    }

    fn inner(&self, span: TextRange, quote_len: u32) -> &'s str {
        &self.text[std::ops::Range::<usize>::from(shrink(span, quote_len))]
    }

    fn span(&self, range: TextRange) -> Span {
        Span::new(self.source, range)
    }

    fn error(&mut self, kind: DiagnosticKind, range: TextRange, message: &str) {
        let span = self.span(range);
        self.diagnostics.report(kind, span).message(message).emit();
    }
}

enum Definition {
    Template(TemplateDef),
    Dict(DictDef),
}

fn is_lexical_error(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::Garbage | SyntaxKind::UnterminatedString | SyntaxKind::UnclosedBigString
    )
}

fn shrink(span: TextRange, by: u32) -> TextRange {
    let by = TextSize::from(by);
    TextRange::new(span.start() + by, span.end() - by)
}
