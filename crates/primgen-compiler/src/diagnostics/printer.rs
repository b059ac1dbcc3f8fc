//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};
use crate::source_map::SourceMap;

pub struct DiagnosticsPrinter<'a> {
    messages: Vec<DiagnosticMessage>,
    sources: Option<&'a SourceMap>,
    colored: bool,
}

impl<'a> DiagnosticsPrinter<'a> {
    fn new(messages: Vec<DiagnosticMessage>) -> Self {
        Self {
            messages,
            sources: None,
            colored: false,
        }
    }

    /// Render against the loaded sources. Without them, output is one plain line per diagnostic.
    pub fn sources(mut self, sources: &'a SourceMap) -> Self {
        self.sources = Some(sources);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(sources) = self.sources else {
            return self.format_plain(w);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.messages.iter().enumerate() {
            let source = sources.content(diag.span.source);
            let path = sources.kind(diag.span.source).display_name();
            let range = adjust_range(diag.span.range, source.len());

            let mut snippet = Snippet::source(source)
                .line_start(1)
                .path(path.as_str())
                .annotation(AnnotationKind::Primary.span(range).label(&diag.message));

            let mut elsewhere = Vec::new();
            for related in &diag.related {
                if related.span.source == diag.span.source {
                    snippet = snippet.annotation(
                        AnnotationKind::Context
                            .span(adjust_range(related.span.range, source.len()))
                            .label(&related.message),
                    );
                } else {
                    elsewhere.push(related);
                }
            }

            let level = severity_to_level(diag.severity());
            let mut report: Vec<Group> = vec![level.primary_title(&diag.message).element(snippet)];

            let other_paths: Vec<String> = elsewhere
                .iter()
                .map(|r| sources.kind(r.span.source).display_name())
                .collect();
            for (related, other_path) in elsewhere.iter().zip(&other_paths) {
                let other = sources.content(related.span.source);
                report.push(
                    Level::NOTE.secondary_title(&related.message).element(
                        Snippet::source(other)
                            .line_start(1)
                            .path(other_path.as_str())
                            .annotation(
                                AnnotationKind::Context
                                    .span(adjust_range(related.span.range, other.len())),
                            ),
                    ),
                );
            }

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&report))?;
            for hint in &diag.hints {
                write!(w, "\n  = help: {}", hint)?;
            }
            w.write_char('\n')?;
        }

        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.messages.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", diag)?;
        }
        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = usize::from(range.start()).min(limit);
    let end: usize = usize::from(range.end()).min(limit);

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}

impl Diagnostics {
    /// Printer over the filtered diagnostics (cascading errors suppressed).
    pub fn printer<'a>(&self) -> DiagnosticsPrinter<'a> {
        DiagnosticsPrinter::new(self.filtered())
    }

    pub fn render(&self, sources: &SourceMap) -> String {
        self.printer().sources(sources).render()
    }

    pub fn render_colored(&self, sources: &SourceMap, colored: bool) -> String {
        self.printer().sources(sources).colored(colored).render()
    }

    /// One `severity at start..end: message` line per diagnostic.
    pub fn render_plain(&self) -> String {
        self.printer().render()
    }
}
