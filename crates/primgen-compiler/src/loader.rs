//! Loading group files and their import closure.

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};
use crate::parser::{Group, parse_group};
use crate::source_map::{SourceId, SourceMap};
use crate::{Error, Result};

/// Source of group file contents.
pub trait GroupLoader {
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads groups from the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl GroupLoader for FsLoader {
    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Serves groups from memory. Paths are normalized lexically on both sides.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: HashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: impl AsRef<Path>, content: impl Into<String>) -> Self {
        self.files
            .insert(normalize(path.as_ref()), content.into());
        self
    }
}

impl GroupLoader for MemoryLoader {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.files.get(&normalize(path)).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such group: {}", path.display()),
            )
        })
    }
}

/// Every group reachable from the roots, indexed by `SourceId`.
#[derive(Debug)]
pub(crate) struct Loaded {
    pub(crate) sources: SourceMap,
    pub(crate) groups: Vec<Group>,
    /// Resolved imports of each group, in declaration order.
    pub(crate) imports: Vec<Vec<SourceId>>,
    pub(crate) roots: Vec<SourceId>,
    pub(crate) diagnostics: Diagnostics,
}

pub(crate) struct Loader<'l> {
    loader: &'l dyn GroupLoader,
    loaded: Loaded,
    stack: Vec<SourceId>,
}

impl<'l> Loader<'l> {
    pub(crate) fn new(loader: &'l dyn GroupLoader) -> Self {
        Self {
            loader,
            loaded: Loaded {
                sources: SourceMap::new(),
                groups: Vec::new(),
                imports: Vec::new(),
                roots: Vec::new(),
                diagnostics: Diagnostics::new(),
            },
            stack: Vec::new(),
        }
    }

    /// Loads a root group from `path`. A root that cannot be read is a hard error;
    /// unreadable imports are diagnostics.
    pub(crate) fn root_file(&mut self, path: &Path) -> Result<SourceId> {
        let path = normalize(path);
        let id = match self.loaded.sources.find_file(&path) {
            Some(id) => id,
            None => {
                let content = self.loader.read(&path).map_err(|source| Error::Read {
                    path: path.clone(),
                    source,
                })?;
                let id = self.loaded.sources.add_file(&path, &content);
                self.enter(id, &content, parent_dir(&path));
                id
            }
        };
        self.add_root(id);
        Ok(id)
    }

    /// Loads a root group given as text. Its imports resolve against `base_dir`.
    pub(crate) fn root_inline(&mut self, content: &str, base_dir: &Path) -> SourceId {
        let id = self.loaded.sources.add_inline(content);
        self.enter(id, content, normalize(base_dir));
        self.add_root(id);
        id
    }

    pub(crate) fn finish(self) -> Loaded {
        self.loaded
    }

    fn add_root(&mut self, id: SourceId) {
        if !self.loaded.roots.contains(&id) {
            self.loaded.roots.push(id);
        }
    }

    fn enter(&mut self, id: SourceId, content: &str, dir: PathBuf) {
        let group = parse_group(id, content, &mut self.loaded.diagnostics);
        tracing::debug!(
            group = %self.loaded.sources.kind(id).display_name(),
            templates = group.templates.len(),
            dicts = group.dicts.len(),
            "loaded group"
        );

        let imports: Vec<_> = group
            .imports
            .iter()
            .map(|import| (import.path.clone(), import.range))
            .collect();
        debug_assert_eq!(self.loaded.groups.len(), id.index());
        self.loaded.groups.push(group);
        self.loaded.imports.push(Vec::new());

        self.stack.push(id);
        for (import, range) in imports {
            let span = Span::new(id, range);
            if let Some(target) = self.import(&dir.join(&import), &import, span) {
                self.loaded.imports[id.index()].push(target);
            }
        }
        self.stack.pop();
    }

    fn import(&mut self, path: &Path, written: &str, span: Span) -> Option<SourceId> {
        let path = normalize(path);

        if let Some(id) = self.loaded.sources.find_file(&path) {
            if self.stack.contains(&id) {
                self.loaded
                    .diagnostics
                    .report(DiagnosticKind::ImportCycle, span)
                    .message(written)
                    .emit();
                return None;
            }
            return Some(id);
        }

        let content = match self.loader.read(&path) {
            Ok(content) => content,
            Err(err) => {
                self.loaded
                    .diagnostics
                    .report(DiagnosticKind::ImportNotFound, span)
                    .message(written)
                    .hint(err.to_string())
                    .emit();
                return None;
            }
        };

        let id = self.loaded.sources.add_file(&path, &content);
        self.enter(id, &content, parent_dir(&path));
        Some(id)
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Resolves `.` and `..` without touching the filesystem.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(out.components().next_back(), Some(Component::Normal(_)))
                    && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
