//! Semantic analysis of loaded template groups.
//!
//! Every root group and its import closure forms a [`Unit`]. Names inside
//! the unit resolve against the root's [`Scope`], so a root can override a
//! helper that an imported template calls.
//!
//! Passes:
//! - definition checks per group (duplicates, reserved names)
//! - body checks per unit (attributes, calls, properties, dictionaries)
//! - directive signatures for generator units

pub mod directives;
pub mod scope;
mod validate;

#[cfg(test)]
mod scope_tests;

use std::path::{Path, PathBuf};

pub use scope::{DefRef, Scope};
pub use validate::BUILTINS;

use crate::diagnostics::Diagnostics;
use crate::loader::{GroupLoader, Loaded, Loader, MemoryLoader};
use crate::parser::{DictDef, Group, TemplateDef};
use crate::source_map::{SourceId, SourceMap};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// Defines `class(primitive)`; produces one file per primitive.
    Generator,
    /// Only meant to be imported.
    Library,
}

/// A root group with everything it imports.
#[derive(Debug, Clone)]
pub struct Unit {
    root: SourceId,
    kind: UnitKind,
    scope: Scope,
    members: Vec<SourceId>,
}

impl Unit {
    pub fn root(&self) -> SourceId {
        self.root
    }

    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn is_generator(&self) -> bool {
        self.kind == UnitKind::Generator
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// The root followed by every group it reaches through imports.
    pub fn members(&self) -> &[SourceId] {
        &self.members
    }
}

/// Parsed and analyzed template groups, ready to render.
#[derive(Debug)]
pub struct TemplateSet {
    sources: SourceMap,
    groups: Vec<Group>,
    units: Vec<Unit>,
    diagnostics: Diagnostics,
}

impl TemplateSet {
    /// Loads and analyzes the given root groups.
    ///
    /// Fails only when a root cannot be read; every other problem ends up
    /// in [`TemplateSet::diagnostics`].
    pub fn load(roots: &[PathBuf], loader: &dyn GroupLoader) -> Result<Self> {
        let mut l = Loader::new(loader);
        for root in roots {
            l.root_file(root)?;
        }
        Ok(Self::analyze(l.finish()))
    }

    /// Analyzes a single inline group. Imports resolve through `loader`
    /// relative to `base_dir`.
    pub fn from_source_with(text: &str, base_dir: &Path, loader: &dyn GroupLoader) -> Self {
        let mut l = Loader::new(loader);
        l.root_inline(text, base_dir);
        Self::analyze(l.finish())
    }

    /// Analyzes a single inline group without imports.
    pub fn from_source(text: &str) -> Self {
        Self::from_source_with(text, Path::new(""), &MemoryLoader::new())
    }

    fn analyze(loaded: Loaded) -> Self {
        let Loaded {
            sources,
            groups,
            imports,
            roots,
            mut diagnostics,
        } = loaded;

        for group in &groups {
            validate::check_definitions(group, &mut diagnostics);
        }

        let scopes = scope::build_scopes(&groups, &imports);
        let mut units = Vec::with_capacity(roots.len());

        for root in roots {
            let scope = scopes[root.index()].clone();
            let members = scope::import_closure(root, &imports);
            let arity = |name: &str| {
                scope
                    .template(name)
                    .map(|def| groups[def.source.index()].templates[def.index].arity())
            };

            for member in &members {
                validate::check_bodies(&groups[member.index()], &scope, &arity, &mut diagnostics);
            }

            let kind = if scope.has_template(directives::CLASS) {
                UnitKind::Generator
            } else {
                UnitKind::Library
            };

            if kind == UnitKind::Generator {
                for (name, _) in directives::DIRECTIVES {
                    if let Some(def) = scope.template(name) {
                        let template = &groups[def.source.index()].templates[def.index];
                        directives::check_directive(def.source, template, &mut diagnostics);
                    }
                }
            }

            tracing::debug!(
                root = %sources.kind(root).display_name(),
                ?kind,
                members = members.len(),
                "analyzed unit"
            );
            units.push(Unit {
                root,
                kind,
                scope,
                members,
            });
        }

        Self {
            sources,
            groups,
            units,
            diagnostics,
        }
    }

    /// No errors were found. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.sources
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn generators(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter().filter(|u| u.is_generator())
    }

    pub fn group(&self, id: SourceId) -> &Group {
        &self.groups[id.index()]
    }

    pub fn template(&self, def: DefRef) -> &TemplateDef {
        &self.groups[def.source.index()].templates[def.index]
    }

    pub fn dict(&self, def: DefRef) -> &DictDef {
        &self.groups[def.source.index()].dicts[def.index]
    }

    /// Looks up a template visible from `unit`.
    pub fn resolve_template(&self, unit: &Unit, name: &str) -> Option<&TemplateDef> {
        unit.scope.template(name).map(|def| self.template(def))
    }

    /// Display name of a unit: its file stem, or `<inline>`.
    pub fn unit_name(&self, unit: &Unit) -> String {
        match self.sources.stem(unit.root) {
            Some(stem) => stem.to_string(),
            None => self.sources.kind(unit.root).display_name(),
        }
    }
}
