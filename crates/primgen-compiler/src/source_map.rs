//! Storage for every template group loaded in a session.
//!
//! Groups reference each other through imports; diagnostics point into any
//! of them through a [`SourceId`].

use std::path::{Path, PathBuf};

/// Lightweight handle to a loaded group source.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct SourceId(pub(crate) u32);

impl SourceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Describes the origin of a source.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SourceKind {
    /// Group text given directly (tests, one-off renders).
    Inline,
    /// A group file with its (normalized) path.
    File(PathBuf),
}

impl SourceKind {
    /// Returns the display name for diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            SourceKind::Inline => "<inline>".to_string(),
            SourceKind::File(path) => path.display().to_string(),
        }
    }
}

/// A borrowed view of a source: id, kind, and content.
#[derive(Clone, Debug)]
pub struct Source<'s> {
    pub id: SourceId,
    pub kind: &'s SourceKind,
    pub content: &'s str,
}

#[derive(Clone, Debug)]
struct SourceEntry {
    kind: SourceKind,
    content: String,
}

/// Registry of all sources.
#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    entries: Vec<SourceEntry>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_inline(&mut self, content: &str) -> SourceId {
        self.push_entry(SourceKind::Inline, content)
    }

    pub fn add_file(&mut self, path: &Path, content: &str) -> SourceId {
        self.push_entry(SourceKind::File(path.to_path_buf()), content)
    }

    /// Finds an already loaded file by its normalized path.
    pub fn find_file(&self, path: &Path) -> Option<SourceId> {
        self.iter()
            .find(|s| matches!(s.kind, SourceKind::File(p) if p == path))
            .map(|s| s.id)
    }

    pub fn content(&self, id: SourceId) -> &str {
        &self.entry(id).content
    }

    pub fn kind(&self, id: SourceId) -> &SourceKind {
        &self.entry(id).kind
    }

    /// Get the file path if this source is a file, None otherwise.
    pub fn path(&self, id: SourceId) -> Option<&Path> {
        match &self.entry(id).kind {
            SourceKind::File(path) => Some(path),
            SourceKind::Inline => None,
        }
    }

    /// File stem of a source, used to derive default output names.
    pub fn stem(&self, id: SourceId) -> Option<&str> {
        self.path(id)?.file_stem()?.to_str()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: SourceId) -> Source<'_> {
        let entry = self.entry(id);
        Source {
            id,
            kind: &entry.kind,
            content: &entry.content,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Source<'_>> {
        self.entries.iter().enumerate().map(|(idx, entry)| Source {
            id: SourceId(idx as u32),
            kind: &entry.kind,
            content: &entry.content,
        })
    }

    fn entry(&self, id: SourceId) -> &SourceEntry {
        self.entries.get(id.index()).expect("invalid SourceId")
    }

    fn push_entry(&mut self, kind: SourceKind, content: &str) -> SourceId {
        let id = SourceId(self.entries.len() as u32);
        self.entries.push(SourceEntry {
            kind,
            content: content.to_owned(),
        });
        id
    }
}
