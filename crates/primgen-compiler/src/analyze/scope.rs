//! Name resolution across imports.
//!
//! A group's scope holds its own definitions first, then whatever each
//! import brings in, in import order. Earlier entries shadow later ones.

use indexmap::IndexMap;

use crate::parser::Group;
use crate::source_map::SourceId;

/// Position of a definition: the group it lives in and its index there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefRef {
    pub source: SourceId,
    pub index: usize,
}

/// Templates and dictionaries visible from one group.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    templates: IndexMap<String, DefRef>,
    dicts: IndexMap<String, DefRef>,
}

impl Scope {
    pub fn template(&self, name: &str) -> Option<DefRef> {
        self.templates.get(name).copied()
    }

    pub fn dict(&self, name: &str) -> Option<DefRef> {
        self.dicts.get(name).copied()
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn has_dict(&self, name: &str) -> bool {
        self.dicts.contains_key(name)
    }

    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn dict_names(&self) -> impl Iterator<Item = &str> {
        self.dicts.keys().map(String::as_str)
    }

    fn define_own(&mut self, group: &Group) {
        for (index, template) in group.templates.iter().enumerate() {
            self.templates
                .entry(template.name.text.clone())
                .or_insert(DefRef {
                    source: group.source,
                    index,
                });
        }
        for (index, dict) in group.dicts.iter().enumerate() {
            self.dicts.entry(dict.name.text.clone()).or_insert(DefRef {
                source: group.source,
                index,
            });
        }
    }

    fn inherit(&mut self, other: &Scope) {
        for (name, def) in &other.templates {
            self.templates.entry(name.clone()).or_insert(*def);
        }
        for (name, def) in &other.dicts {
            self.dicts.entry(name.clone()).or_insert(*def);
        }
    }
}

/// Builds the scope of every group. `imports` must be acyclic.
pub(crate) fn build_scopes(groups: &[Group], imports: &[Vec<SourceId>]) -> Vec<Scope> {
    let mut scopes: Vec<Option<Scope>> = vec![None; groups.len()];
    for id in 0..groups.len() {
        build(id, groups, imports, &mut scopes);
    }
    scopes.into_iter().map(Option::unwrap_or_default).collect()
}

fn build(id: usize, groups: &[Group], imports: &[Vec<SourceId>], scopes: &mut [Option<Scope>]) {
    if scopes[id].is_some() {
        return;
    }

    let mut scope = Scope::default();
    scope.define_own(&groups[id]);
    for import in &imports[id] {
        build(import.index(), groups, imports, scopes);
        if let Some(imported) = &scopes[import.index()] {
            scope.inherit(imported);
        }
    }
    scopes[id] = Some(scope);
}

/// The group itself followed by every group it reaches through imports.
pub(crate) fn import_closure(root: SourceId, imports: &[Vec<SourceId>]) -> Vec<SourceId> {
    let mut closure = vec![root];
    let mut i = 0;
    while i < closure.len() {
        for &next in &imports[closure[i].index()] {
            if !closure.contains(&next) {
                closure.push(next);
            }
        }
        i += 1;
    }
    closure
}
