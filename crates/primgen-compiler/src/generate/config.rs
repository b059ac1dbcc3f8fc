//! Generator configuration.

use std::path::{Path, PathBuf};

use primgen_core::PrimitiveKind;

use crate::render::DEFAULT_RECURSION_LIMIT;

/// When to touch a file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Rewrite every file.
    Always,
    /// Leave files whose contents already match alone.
    #[default]
    IfChanged,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root for generated sources.
    pub output_dir: PathBuf,
    /// Root for outputs of groups whose `isTest()` is true; `output_dir` when unset.
    pub test_output_dir: Option<PathBuf>,
    /// File extension, without the dot.
    pub extension: String,
    /// Primitives to expand over, in output order.
    pub primitives: Vec<PrimitiveKind>,
    pub write_mode: WriteMode,
    /// Maximum depth of nested template calls.
    pub recursion_limit: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            test_output_dir: None,
            extension: "java".to_string(),
            primitives: PrimitiveKind::ALL.to_vec(),
            write_mode: WriteMode::default(),
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl GeneratorConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn test_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.test_output_dir = Some(dir.into());
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Restricts expansion to `primitives`. Duplicates are dropped and the
    /// canonical order is kept.
    pub fn primitives(mut self, primitives: &[PrimitiveKind]) -> Self {
        self.primitives = PrimitiveKind::ALL
            .into_iter()
            .filter(|kind| primitives.contains(kind))
            .collect();
        self
    }

    pub fn write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Root directory for a file.
    pub fn root_for(&self, is_test: bool) -> &Path {
        match (&self.test_output_dir, is_test) {
            (Some(dir), true) => dir,
            _ => &self.output_dir,
        }
    }
}
