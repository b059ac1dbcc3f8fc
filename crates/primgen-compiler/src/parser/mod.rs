//! Parser for template group files.
//!
//! # Architecture
//!
//! Parsing runs in three layers, each with its own grammar:
//!
//! - `lexer`: group-level tokens (names, `::=`, strings, `<<...>>` bodies)
//! - `core`: imports, template definitions and dictionaries
//! - `body`/`expr`: the text of a template body and the tags inside it
//!
//! # Recovery
//!
//! The parser always produces a `Group`. A malformed definition is reported
//! and skipped up to the next token that can start an item, so one typo does
//! not hide the rest of the file.

pub mod ast;
pub mod cst;
pub mod lexer;

mod body;
mod core;
mod expr;

#[cfg(test)]
mod lexer_tests;
#[cfg(test)]
mod tests;

pub use ast::{Body, Chunk, Cond, DictDef, DictEntry, DictValue, Expr, Group, Ident, Import, TemplateDef};
pub use cst::SyntaxKind;

use crate::diagnostics::Diagnostics;
use crate::source_map::SourceId;

/// Parses one group file. Problems are reported into `diagnostics`.
pub fn parse_group(source: SourceId, text: &str, diagnostics: &mut Diagnostics) -> Group {
    let group = core::Parser::new(source, text, diagnostics).parse();
    tracing::trace!(
        source = source.index(),
        imports = group.imports.len(),
        templates = group.templates.len(),
        dicts = group.dicts.len(),
        "parsed group"
    );
    group
}
