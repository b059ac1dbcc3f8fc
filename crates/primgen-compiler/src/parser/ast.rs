//! Parsed form of a template group.
//!
//! Ranges are absolute offsets into the group's source.

use indexmap::IndexMap;
use rowan::TextRange;

use crate::source_map::SourceId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub text: String,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub path: String,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDef {
    pub name: Ident,
    pub params: Vec<Ident>,
    pub body: Body,
}

impl TemplateDef {
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictDef {
    pub name: Ident,
    pub entries: IndexMap<String, DictEntry>,
    pub default: Option<DictEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictEntry {
    pub key_range: TextRange,
    pub value: DictValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictValue {
    Body(Body),
    /// The `key` keyword: the entry renders as the looked-up key.
    Key,
}

/// One parsed group file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub source: SourceId,
    pub imports: Vec<Import>,
    pub templates: Vec<TemplateDef>,
    pub dicts: Vec<DictDef>,
}

impl Group {
    pub fn new(source: SourceId) -> Self {
        Self {
            source,
            imports: Vec::new(),
            templates: Vec::new(),
            dicts: Vec::new(),
        }
    }

    pub fn template(&self, name: &str) -> Option<&TemplateDef> {
        self.templates.iter().find(|t| t.name.text == name)
    }

    pub fn dict(&self, name: &str) -> Option<&DictDef> {
        self.dicts.iter().find(|d| d.name.text == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    pub chunks: Vec<Chunk>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    Text(String),
    /// `<expr>`. `indent` is the whitespace preceding the tag when nothing
    /// else precedes it on its line; multi-line values are re-indented by it.
    Expr { expr: Expr, indent: Option<String> },
    If {
        branches: Vec<(Cond, Body)>,
        otherwise: Option<Body>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A parameter, or a dictionary when used as a lookup target.
    Attr(Ident),
    Str {
        value: String,
        range: TextRange,
    },
    Call {
        name: Ident,
        args: Vec<Expr>,
        range: TextRange,
    },
    /// `target.name`: a descriptor property or a constant dictionary key.
    Prop { target: Box<Expr>, name: Ident },
    /// `target.(key)`: dictionary lookup with a computed key.
    Lookup {
        target: Box<Expr>,
        key: Box<Expr>,
        range: TextRange,
    },
}

impl Expr {
    pub fn range(&self) -> TextRange {
        match self {
            Expr::Attr(ident) => ident.range,
            Expr::Str { range, .. } | Expr::Call { range, .. } | Expr::Lookup { range, .. } => {
                *range
            }
            Expr::Prop { target, name } => target.range().cover(name.range),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cond {
    Expr(Expr),
    Not(Box<Cond>),
    And(Box<Cond>, Box<Cond>),
    Or(Box<Cond>, Box<Cond>),
}
