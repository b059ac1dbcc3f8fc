//! Template bodies: literal text interleaved with `<...>` tags.
//!
//! Scanning works on the raw source slice so every tag keeps an exact span.
//! The flat list of pieces is then folded into nested `<if>` blocks.

use std::mem;

use rowan::{TextRange, TextSize};

use super::ast::{Body, Chunk, Cond};
use super::expr::{ExprParser, Tag};
use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};
use crate::source_map::SourceId;

enum Piece {
    Text(String),
    Tag(Tag, TextRange, Option<String>),
}

pub(crate) struct BodyParser<'a> {
    raw: &'a str,
    base: u32,
    /// Bodies written as `"..."` also resolve `\"`, `\\`, `\n` and `\t`.
    quoted: bool,
    source: SourceId,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> BodyParser<'a> {
    pub(crate) fn new(
        raw: &'a str,
        range: TextRange,
        quoted: bool,
        source: SourceId,
        diagnostics: &'a mut Diagnostics,
    ) -> Self {
        Self {
            raw,
            base: range.start().into(),
            quoted,
            source,
            diagnostics,
        }
    }

    pub(crate) fn parse(mut self) -> Body {
        let pieces = self.scan();
        self.fold(pieces)
    }

    fn scan(&mut self) -> Vec<Piece> {
        let raw = self.raw;
        let mut pieces = Vec::new();
        let mut text = String::new();
        // Start of the current line within `text`, and whether only
        // whitespace has been seen on it.
        let mut line_start = 0;
        let mut line_blank = true;
        let mut i = 0;

        while i < raw.len() {
            let rest = &raw[i..];

            if let Some(escaped) = rest.strip_prefix('\\') {
                let (resolved, consumed) = match escaped.chars().next() {
                    Some(c @ ('<' | '>')) => (Some(c), 2),
                    Some('"') if self.quoted => (Some('"'), 2),
                    Some('\\') if self.quoted => (Some('\\'), 2),
                    Some('t') if self.quoted => (Some('\t'), 2),
                    Some('n') if self.quoted => (Some('\n'), 2),
                    _ => (None, 1),
                };
                match resolved {
                    Some('\n') => {
                        text.push('\n');
                        line_start = text.len();
                        line_blank = true;
                    }
                    Some(c) => {
                        text.push(c);
                        line_blank &= c.is_whitespace();
                    }
                    None => {
                        text.push('\\');
                        line_blank = false;
                    }
                }
                i += consumed;
                continue;
            }

            if rest.starts_with("<!") {
                match rest[2..].find("!>") {
                    Some(end) => i += 2 + end + 2,
                    None => {
                        self.report(DiagnosticKind::UnclosedComment, i..raw.len());
                        break;
                    }
                }
                continue;
            }

            if rest.starts_with('<') {
                let Some(close) = self.tag_end(i) else {
                    let end = raw[i..].find('\n').map_or(raw.len(), |n| i + n);
                    self.report(DiagnosticKind::UnclosedTag, i..end);
                    break;
                };

                let content = if self.quoted {
                    unescape_quoted_tag(&raw[i + 1..close])
                } else {
                    raw[i + 1..close].to_string()
                };
                let range = self.abs(i + 1..close);
                let tag = ExprParser::new(&content, range, self.source, self.diagnostics)
                    .parse_tag();
                i = close + 1;

                let Some(tag) = tag else {
                    line_blank = false;
                    continue;
                };

                if let Tag::Expr(_) = tag {
                    let indent = (line_blank && line_start < text.len())
                        .then(|| text[line_start..].to_string());
                    flush(&mut pieces, &mut text);
                    line_start = 0;
                    line_blank = false;
                    pieces.push(Piece::Tag(tag, range, indent));
                    continue;
                }

                // A branch tag alone on its line takes the whole line with it.
                let trailing = raw[i..]
                    .bytes()
                    .take_while(|b| matches!(b, b' ' | b'\t'))
                    .count();
                let after = &raw[i + trailing..];
                let newline = if after.starts_with("\r\n") {
                    Some(2)
                } else if after.starts_with('\n') || after.is_empty() {
                    Some(usize::from(!after.is_empty()))
                } else {
                    None
                };

                match newline {
                    Some(len) if line_blank => {
                        text.truncate(line_start);
                        i += trailing + len;
                    }
                    _ => line_blank = false,
                }
                flush(&mut pieces, &mut text);
                line_start = 0;
                pieces.push(Piece::Tag(tag, range, None));
                continue;
            }

            let Some(c) = rest.chars().next() else {
                break;
            };
            text.push(c);
            if c == '\n' {
                line_start = text.len();
                line_blank = true;
            } else if !c.is_whitespace() {
                line_blank = false;
            }
            i += c.len_utf8();
        }

        flush(&mut pieces, &mut text);
        pieces
    }

    /// Index of the `>` closing the tag opened at `start`, skipping over
    /// string literals. Tags never span lines.
    fn tag_end(&self, start: usize) -> Option<usize> {
        let bytes = self.raw.as_bytes();
        let mut in_string = false;
        let mut j = start + 1;
        while j < bytes.len() {
            match bytes[j] {
                b'\n' => return None,
                b'\\' if self.quoted && bytes.get(j + 1) == Some(&b'"') => {
                    in_string = !in_string;
                    j += 2;
                }
                b'\\' if in_string => j += 2,
                b'"' if !self.quoted => {
                    in_string = !in_string;
                    j += 1;
                }
                b'>' if !in_string => return Some(j),
                _ => j += 1,
            }
        }
        None
    }

    fn fold(&mut self, pieces: Vec<Piece>) -> Body {
        struct Frame {
            range: TextRange,
            /// Condition of the branch being collected; `None` once in `<else>`.
            cond: Option<Cond>,
            branches: Vec<(Cond, Body)>,
            body: Body,
        }

        fn current<'b>(root: &'b mut Body, stack: &'b mut [Frame]) -> &'b mut Body {
            match stack.last_mut() {
                Some(frame) => &mut frame.body,
                None => root,
            }
        }

        let mut root = Body::default();
        let mut stack: Vec<Frame> = Vec::new();

        for piece in pieces {
            let (tag, range, indent) = match piece {
                Piece::Text(text) => {
                    current(&mut root, &mut stack).chunks.push(Chunk::Text(text));
                    continue;
                }
                Piece::Tag(tag, range, indent) => (tag, range, indent),
            };

            match tag {
                Tag::Expr(expr) => {
                    current(&mut root, &mut stack)
                        .chunks
                        .push(Chunk::Expr { expr, indent });
                }
                Tag::If(cond) => stack.push(Frame {
                    range,
                    cond: Some(cond),
                    branches: Vec::new(),
                    body: Body::default(),
                }),
                Tag::ElseIf(_) | Tag::Else => {
                    let Some(frame) = stack.last_mut() else {
                        let orphan = match tag {
                            Tag::Else => "`<else>` without `<if>`",
                            _ => "`<elseif>` without `<if>`",
                        };
                        self.report_range(DiagnosticKind::UnexpectedBranch, range, Some(orphan));
                        continue;
                    };
                    let Some(cond) = frame.cond.take() else {
                        self.report_range(
                            DiagnosticKind::UnexpectedBranch,
                            range,
                            Some("no branch may follow `<else>`"),
                        );
                        continue;
                    };
                    let body = mem::take(&mut frame.body);
                    frame.branches.push((cond, body));
                    if let Tag::ElseIf(next) = tag {
                        frame.cond = Some(next);
                    }
                }
                Tag::EndIf => {
                    let Some(mut frame) = stack.pop() else {
                        self.report_range(
                            DiagnosticKind::UnexpectedBranch,
                            range,
                            Some("`<endif>` without `<if>`"),
                        );
                        continue;
                    };
                    let otherwise = match frame.cond.take() {
                        Some(cond) => {
                            frame.branches.push((cond, frame.body));
                            None
                        }
                        None => Some(frame.body),
                    };
                    current(&mut root, &mut stack).chunks.push(Chunk::If {
                        branches: frame.branches,
                        otherwise,
                    });
                }
            }
        }

        for frame in stack {
            self.report_range(DiagnosticKind::UnclosedIf, frame.range, None);
        }

        root
    }

    fn abs(&self, range: std::ops::Range<usize>) -> TextRange {
        TextRange::new(
            TextSize::from(self.base + range.start as u32),
            TextSize::from(self.base + range.end as u32),
        )
    }

    fn report(&mut self, kind: DiagnosticKind, range: std::ops::Range<usize>) {
        let range = self.abs(range);
        self.report_range(kind, range, None);
    }

    fn report_range(&mut self, kind: DiagnosticKind, range: TextRange, message: Option<&str>) {
        let builder = self
            .diagnostics
            .report(kind, Span::new(self.source, range));
        match message {
            Some(message) => builder.message(message).emit(),
            None => builder.emit(),
        }
    }
}

fn flush(pieces: &mut Vec<Piece>, text: &mut String) {
    if text.is_empty() {
        return;
    }
    let text = mem::take(text);
    if let Some(Piece::Text(previous)) = pieces.last_mut() {
        previous.push_str(&text);
    } else {
        pieces.push(Piece::Text(text));
    }
}

/// Inside a `"..."` body, tag content sees `\"` as `"` and `\\` as `\`.
fn unescape_quoted_tag(raw: &str) -> String {
    raw.replace("\\\\", "\u{0}").replace("\\\"", "\"").replace('\u{0}', "\\")
}
