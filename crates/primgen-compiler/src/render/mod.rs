//! Expands a template for one primitive.
//!
//! Rendering assumes an analyzed [`TemplateSet`]; the errors here are the
//! ones only visible once a concrete primitive is bound (an invalid literal
//! for that type, a property read on text, runaway recursion).

mod value;

#[cfg(test)]
mod render_tests;

use std::path::PathBuf;

use primgen_core::{LiteralError, PrimitiveDescriptor, PrimitiveKind};

pub use value::Value;

use crate::analyze::{TemplateSet, Unit};
use crate::parser::{Body, Chunk, Cond, DictDef, DictValue, Expr, TemplateDef};

pub const DEFAULT_RECURSION_LIMIT: usize = 64;

/// A template could not be rendered for a primitive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot render `{template}` of `{group}` for {primitive}: {kind}")]
pub struct RenderError {
    pub group: String,
    pub template: String,
    pub primitive: PrimitiveKind,
    #[source]
    pub kind: RenderErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderErrorKind {
    #[error("`.{property}` needs a primitive, found text")]
    NotAPrimitive { property: String },

    #[error("`{builtin}` expects a primitive as its first argument")]
    ExpectedPrimitive { builtin: String },

    #[error(transparent)]
    Literal(#[from] LiteralError),

    #[error("template calls nested deeper than {0}")]
    RecursionLimitExceeded(usize),

    #[error("template `{0}` is not defined")]
    UndefinedTemplate(String),

    #[error("attribute `{0}` is not defined")]
    UndefinedAttribute(String),

    #[error("`{0}` is not a dictionary")]
    NotADictionary(String),

    #[error("`{0}` is not a primitive property")]
    UnknownProperty(String),

    #[error("`{template}` expects {expected} arguments, found {found}")]
    ArityMismatch {
        template: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid file name `{0}`")]
    InvalidFileName(String),

    #[error("target path `{0}` must be relative and stay below the output root")]
    InvalidTargetPath(String),

    #[error("`{}` is produced more than once", .0.display())]
    DuplicateOutput(PathBuf),
}

type Env<'t> = Vec<(&'t str, Value)>;

/// Renders templates visible from one unit.
pub struct Renderer<'s> {
    set: &'s TemplateSet,
    unit: &'s Unit,
    recursion_limit: usize,
    depth: usize,
}

impl<'s> Renderer<'s> {
    pub fn new(set: &'s TemplateSet, unit: &'s Unit) -> Self {
        Self {
            set,
            unit,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            depth: 0,
        }
    }

    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Renders `template` with `primitive` bound to its single parameter.
    /// Templates without parameters are rendered as they are.
    pub fn render(
        &mut self,
        template: &str,
        primitive: &'static PrimitiveDescriptor,
    ) -> Result<String, RenderError> {
        self.depth = 0;
        self.render_inner(template, primitive)
            .map_err(|kind| self.error(template, primitive, kind))
    }

    fn error(
        &self,
        template: &str,
        primitive: &PrimitiveDescriptor,
        kind: RenderErrorKind,
    ) -> RenderError {
        RenderError {
            group: self.set.unit_name(self.unit),
            template: template.to_string(),
            primitive: primitive.kind,
            kind,
        }
    }

    fn render_inner(
        &mut self,
        name: &str,
        primitive: &'static PrimitiveDescriptor,
    ) -> Result<String, RenderErrorKind> {
        let template = self
            .set
            .resolve_template(self.unit, name)
            .ok_or_else(|| RenderErrorKind::UndefinedTemplate(name.to_string()))?;
        let args = match template.arity() {
            0 => Vec::new(),
            _ => vec![Value::Primitive(primitive)],
        };
        self.call(template, args)
    }

    fn call(&mut self, template: &'s TemplateDef, args: Vec<Value>) -> Result<String, RenderErrorKind> {
        if args.len() != template.arity() {
            return Err(RenderErrorKind::ArityMismatch {
                template: template.name.text.clone(),
                expected: template.arity(),
                found: args.len(),
            });
        }
        if self.depth >= self.recursion_limit {
            return Err(RenderErrorKind::RecursionLimitExceeded(self.recursion_limit));
        }

        tracing::trace!(template = %template.name.text, depth = self.depth, "call");
        self.depth += 1;
        let env: Env<'s> = template
            .params
            .iter()
            .map(|p| p.text.as_str())
            .zip(args)
            .collect();
        let mut out = String::new();
        self.body(&template.body, &env, &mut out)?;
        self.depth -= 1;
        Ok(out)
    }

    fn body(&mut self, body: &'s Body, env: &Env<'s>, out: &mut String) -> Result<(), RenderErrorKind> {
        for chunk in &body.chunks {
            match chunk {
                Chunk::Text(text) => out.push_str(text),
                Chunk::Expr { expr, indent } => {
                    let text = self.eval(expr, env)?.render();
                    match indent {
                        Some(indent) => push_indented(out, &text, indent),
                        None => out.push_str(&text),
                    }
                }
                Chunk::If {
                    branches,
                    otherwise,
                } => {
                    let mut chosen = otherwise.as_ref();
                    for (cond, body) in branches {
                        if self.test(cond, env)? {
                            chosen = Some(body);
                            break;
                        }
                    }
                    if let Some(body) = chosen {
                        self.body(body, env, out)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn test(&mut self, cond: &'s Cond, env: &Env<'s>) -> Result<bool, RenderErrorKind> {
        Ok(match cond {
            Cond::Expr(expr) => self.eval(expr, env)?.is_truthy(),
            Cond::Not(inner) => !self.test(inner, env)?,
            Cond::And(a, b) => self.test(a, env)? && self.test(b, env)?,
            Cond::Or(a, b) => self.test(a, env)? || self.test(b, env)?,
        })
    }

    fn eval(&mut self, expr: &'s Expr, env: &Env<'s>) -> Result<Value, RenderErrorKind> {
        match expr {
            Expr::Attr(name) => lookup(env, &name.text)
                .cloned()
                .ok_or_else(|| RenderErrorKind::UndefinedAttribute(name.text.clone())),
            Expr::Str { value, .. } => Ok(Value::Text(value.clone())),
            Expr::Call { name, args, .. } => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval(arg, env)?);
                }
                if let Some(text) = builtin(&name.text, &values)? {
                    return Ok(Value::Text(text));
                }
                let template = self
                    .set
                    .resolve_template(self.unit, &name.text)
                    .ok_or_else(|| RenderErrorKind::UndefinedTemplate(name.text.clone()))?;
                self.call(template, values).map(Value::Text)
            }
            Expr::Prop { target, name } => {
                if let Some(dict) = self.dict_target(target, env) {
                    return self.lookup_dict(dict, &name.text);
                }
                let value = self.eval(target, env)?;
                let Some(descriptor) = value.as_primitive() else {
                    return Err(RenderErrorKind::NotAPrimitive {
                        property: name.text.clone(),
                    });
                };
                descriptor
                    .property(&name.text)
                    .map(Value::from)
                    .ok_or_else(|| RenderErrorKind::UnknownProperty(name.text.clone()))
            }
            Expr::Lookup { target, key, .. } => {
                let key = self.eval(key, env)?.render();
                match self.dict_target(target, env) {
                    Some(dict) => self.lookup_dict(dict, &key),
                    None => Err(RenderErrorKind::NotADictionary(render_target(target))),
                }
            }
        }
    }

    /// The dictionary `target` names, unless a parameter shadows it.
    fn dict_target(&self, target: &Expr, env: &Env<'s>) -> Option<&'s DictDef> {
        let Expr::Attr(name) = target else {
            return None;
        };
        if lookup(env, &name.text).is_some() {
            return None;
        }
        let def = self.unit.scope().dict(&name.text)?;
        Some(self.set.dict(def))
    }

    /// The entry for `key`, else the default entry, else empty text.
    fn lookup_dict(&mut self, dict: &'s DictDef, key: &str) -> Result<Value, RenderErrorKind> {
        let Some(entry) = dict.entries.get(key).or(dict.default.as_ref()) else {
            return Ok(Value::Text(String::new()));
        };
        match &entry.value {
            DictValue::Key => Ok(Value::Text(key.to_string())),
            DictValue::Body(body) => {
                let mut out = String::new();
                self.body(body, &Env::new(), &mut out)?;
                Ok(Value::Text(out))
            }
        }
    }
}

fn lookup<'v>(env: &'v Env<'_>, name: &str) -> Option<&'v Value> {
    env.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
}

/// `literal`, `cast` and `hashCode`. `None` when `name` is not a built-in.
fn builtin(name: &str, args: &[Value]) -> Result<Option<String>, RenderErrorKind> {
    if !crate::analyze::BUILTINS.contains(&name) {
        return Ok(None);
    }
    let descriptor = match args {
        [first, _] => first.as_primitive(),
        _ => None,
    };
    let (Some(descriptor), Some(value)) = (descriptor, args.get(1)) else {
        return Err(RenderErrorKind::ExpectedPrimitive {
            builtin: name.to_string(),
        });
    };
    let value = value.render();

    let text = match name {
        "literal" => descriptor.format_literal(&value)?,
        "cast" => descriptor.cast(&value)?,
        _ => descriptor.hash_code(&value),
    };
    Ok(Some(text))
}

fn render_target(expr: &Expr) -> String {
    match expr {
        Expr::Attr(name) => name.text.clone(),
        Expr::Prop { target, name } => format!("{}.{}", render_target(target), name.text),
        Expr::Call { name, .. } => format!("{}(...)", name.text),
        Expr::Str { value, .. } => format!("{value:?}"),
        Expr::Lookup { target, .. } => format!("{}.(...)", render_target(target)),
    }
}

/// Appends `text`, indenting every non-empty line after the first.
fn push_indented(out: &mut String, text: &str, indent: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(indent);
            }
        }
        out.push_str(line);
    }
}
