//! Semantic checks on parsed groups.
//!
//! Definition-level checks run once per group. Body checks run once per
//! unit, since the same library template resolves calls against whichever
//! group imported it.

use std::collections::{HashMap, HashSet};

use primgen_core::PrimitiveDescriptor;
use rowan::TextRange;

use super::scope::Scope;
use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};
use crate::parser::{Body, Chunk, Cond, DictValue, Expr, Group, Ident};
use crate::source_map::SourceId;

/// Names the renderer implements itself; each takes `(primitive, value)`.
pub const BUILTINS: &[&str] = &["literal", "cast", "hashCode"];

pub(crate) fn is_builtin(name: &str) -> bool {
    BUILTINS.contains(&name)
}

/// Duplicate and reserved names within one group.
pub(crate) fn check_definitions(group: &Group, diagnostics: &mut Diagnostics) {
    let span = |range: TextRange| Span::new(group.source, range);
    let mut seen: HashMap<&str, TextRange> = HashMap::new();

    let names = group
        .templates
        .iter()
        .map(|t| &t.name)
        .chain(group.dicts.iter().map(|d| &d.name));

    for name in names {
        if is_builtin(&name.text) {
            diagnostics
                .report(DiagnosticKind::ReservedName, span(name.range))
                .message(&name.text)
                .emit();
            continue;
        }
        match seen.get(name.text.as_str()) {
            Some(&first) => diagnostics
                .report(DiagnosticKind::DuplicateDefinition, span(name.range))
                .message(&name.text)
                .related_to("first defined here", span(first))
                .emit(),
            None => {
                seen.insert(&name.text, name.range);
            }
        }
    }

    for template in &group.templates {
        let mut params: HashMap<&str, TextRange> = HashMap::new();
        for param in &template.params {
            match params.get(param.text.as_str()) {
                Some(&first) => diagnostics
                    .report(DiagnosticKind::DuplicateParameter, span(param.range))
                    .message(&param.text)
                    .related_to("first declared here", span(first))
                    .emit(),
                None => {
                    params.insert(&param.text, param.range);
                }
            }
        }
    }
}

/// Checks every template and dictionary body of `group` against `scope`.
/// Dictionary values take no parameters.
pub(crate) fn check_bodies(
    group: &Group,
    scope: &Scope,
    arity: &dyn Fn(&str) -> Option<usize>,
    diagnostics: &mut Diagnostics,
) {
    for template in &group.templates {
        let mut checker = BodyChecker {
            source: group.source,
            params: &template.params,
            scope,
            arity,
            used: HashSet::new(),
            diagnostics: &mut *diagnostics,
        };
        checker.body(&template.body);
        checker.report_unused();
    }

    let entries = group
        .dicts
        .iter()
        .flat_map(|d| d.entries.values().chain(d.default.as_ref()));
    for entry in entries {
        if let DictValue::Body(body) = &entry.value {
            BodyChecker {
                source: group.source,
                params: &[],
                scope,
                arity,
                used: HashSet::new(),
                diagnostics: &mut *diagnostics,
            }
            .body(body);
        }
    }
}

struct BodyChecker<'a, 'd> {
    source: SourceId,
    params: &'a [Ident],
    scope: &'a Scope,
    arity: &'a dyn Fn(&str) -> Option<usize>,
    used: HashSet<&'a str>,
    diagnostics: &'d mut Diagnostics,
}

impl<'a> BodyChecker<'a, '_> {
    fn body(&mut self, body: &'a Body) {
        for chunk in &body.chunks {
            match chunk {
                Chunk::Text(_) => {}
                Chunk::Expr { expr, .. } => self.value(expr),
                Chunk::If {
                    branches,
                    otherwise,
                } => {
                    for (cond, body) in branches {
                        self.cond(cond);
                        self.body(body);
                    }
                    if let Some(body) = otherwise {
                        self.body(body);
                    }
                }
            }
        }
    }

    fn cond(&mut self, cond: &'a Cond) {
        match cond {
            Cond::Expr(expr) => self.value(expr),
            Cond::Not(inner) => self.cond(inner),
            Cond::And(a, b) | Cond::Or(a, b) => {
                self.cond(a);
                self.cond(b);
            }
        }
    }

    /// An expression whose result is rendered or tested.
    fn value(&mut self, expr: &'a Expr) {
        match expr {
            Expr::Attr(name) => {
                if self.is_param(name) {
                    self.used.insert(&name.text);
                } else if self.scope.has_dict(&name.text) {
                    self.report(DiagnosticKind::DictionaryAsValue, name.range, &name.text);
                } else {
                    self.report(DiagnosticKind::UndefinedAttribute, name.range, &name.text);
                }
            }
            Expr::Str { .. } => {}
            Expr::Call { name, args, .. } => {
                for arg in args {
                    self.value(arg);
                }
                self.call(name, args.len());
            }
            Expr::Prop { target, name } => {
                if self.dict_target(target) {
                    return;
                }
                self.value(target);
                if !PrimitiveDescriptor::is_property(&name.text) {
                    self.report(DiagnosticKind::UnknownProperty, name.range, &name.text);
                }
            }
            Expr::Lookup { target, key, .. } => {
                self.value(key);
                if self.dict_target(target) {
                    return;
                }
                let range = target.range();
                match &**target {
                    Expr::Attr(name) if !self.is_param(name) => {
                        self.report(DiagnosticKind::UndefinedAttribute, range, &name.text);
                    }
                    _ => {
                        let span = Span::new(self.source, range);
                        self.diagnostics
                            .report(DiagnosticKind::InvalidExpression, span)
                            .message("only dictionaries can be indexed with `.(...)`")
                            .emit();
                    }
                }
            }
        }
    }

    /// Whether `target` names a dictionary. Parameters shadow dictionaries.
    fn dict_target(&self, target: &Expr) -> bool {
        match target {
            Expr::Attr(name) => !self.is_param(name) && self.scope.has_dict(&name.text),
            _ => false,
        }
    }

    fn call(&mut self, name: &Ident, found: usize) {
        let expected = if is_builtin(&name.text) {
            Some(2)
        } else {
            (self.arity)(&name.text)
        };

        let Some(expected) = expected else {
            self.report(DiagnosticKind::UndefinedTemplate, name.range, &name.text);
            return;
        };

        if expected != found {
            let message = format!(
                "`{}` expects {} {}, found {}",
                name.text,
                expected,
                plural(expected, "argument"),
                found
            );
            self.report(DiagnosticKind::ArityMismatch, name.range, &message);
        }
    }

    fn is_param(&self, name: &Ident) -> bool {
        self.params.iter().any(|p| p.text == name.text)
    }

    fn report_unused(&mut self) {
        for param in self.params {
            if param.text.starts_with('_') || self.used.contains(param.text.as_str()) {
                continue;
            }
            let span = Span::new(self.source, param.range);
            self.diagnostics
                .report(DiagnosticKind::UnusedParameter, span)
                .message(&param.text)
                .emit();
        }
    }

    fn report(&mut self, kind: DiagnosticKind, range: TextRange, detail: &str) {
        let span = Span::new(self.source, range);
        self.diagnostics.report(kind, span).message(detail).emit();
    }
}

pub(crate) fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
