//! Template group compiler: expands `.stg` template groups over every
//! primitive descriptor.
//!
//! Pipeline:
//! - `parser` - lexer, group grammar and template bodies
//! - `loader` - group files and their import closure
//! - `analyze` - name resolution and directive validation
//! - `render` - expansion of a template for one primitive
//! - `generate` - per-primitive output files and writing them to disk
//! - `diagnostics` - error reporting

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod diagnostics;
pub mod generate;
pub mod loader;
pub mod parser;
pub mod render;
pub mod source_map;

#[cfg(test)]
pub mod test_utils;

use std::path::PathBuf;

pub use analyze::{Scope, TemplateSet, Unit, UnitKind};
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity, Span};
pub use generate::{GeneratedFile, Generator, GeneratorConfig, WriteMode, WriteReport};
pub use loader::{FsLoader, GroupLoader, MemoryLoader};
pub use render::{RenderError, RenderErrorKind};
pub use source_map::{SourceId, SourceKind, SourceMap};

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("template validation failed with {} errors", .0.error_count())]
    Invalid(Diagnostics),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
