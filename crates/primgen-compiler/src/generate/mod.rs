//! One output file per generator group and primitive.
//!
//! Everything is rendered in memory before anything is written, so a
//! failure for any (group, primitive) pair leaves the output untouched.
//! Writes are staged too; see [`Generator::write`] for what an IO error
//! can still leave behind.

mod config;


use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

use primgen_core::utils::specialized_name;
use primgen_core::{PrimitiveDescriptor, PrimitiveKind};

pub use config::{GeneratorConfig, WriteMode};

use crate::analyze::directives::{CLASS, FILE_NAME, IS_TEST, SKIP, SKIP_BOOLEAN, TARGET_PATH};
use crate::analyze::{TemplateSet, Unit};
use crate::render::{RenderError, RenderErrorKind, Renderer};
use crate::{Error, Result};

/// Stem used for groups that did not come from a file.
const INLINE_STEM: &str = "primitive";

/// A rendered file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path below the output (or test output) root.
    pub relative_path: PathBuf,
    pub is_test: bool,
    pub primitive: PrimitiveKind,
    /// Name of the group that produced it.
    pub group: String,
    pub contents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
}

pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Renders every generator group for every configured primitive.
    pub fn render(&self, set: &TemplateSet) -> Result<Vec<GeneratedFile>> {
        if !set.is_valid() {
            return Err(Error::Invalid(set.diagnostics().clone()));
        }

        let mut files = Vec::new();
        let mut seen = HashSet::new();

        for unit in set.generators() {
            let mut renderer =
                Renderer::new(set, unit).recursion_limit(self.config.recursion_limit);
            for &kind in &self.config.primitives {
                let descriptor = kind.descriptor();
                let Some(file) = self.render_file(set, unit, &mut renderer, descriptor)? else {
                    tracing::debug!(group = %set.unit_name(unit), primitive = %kind, "skipped");
                    continue;
                };
                if !seen.insert((file.is_test, file.relative_path.clone())) {
                    let kind = RenderErrorKind::DuplicateOutput(file.relative_path);
                    return Err(output_error(set, unit, FILE_NAME, descriptor, kind).into());
                }
                tracing::debug!(
                    group = %file.group,
                    primitive = %kind,
                    path = %file.relative_path.display(),
                    "rendered"
                );
                files.push(file);
            }
        }

        Ok(files)
    }

    fn render_file(
        &self,
        set: &TemplateSet,
        unit: &Unit,
        renderer: &mut Renderer<'_>,
        descriptor: &'static PrimitiveDescriptor,
    ) -> std::result::Result<Option<GeneratedFile>, RenderError> {
        let mut directive = |name: &str| -> std::result::Result<Option<String>, RenderError> {
            if !unit.scope().has_template(name) {
                return Ok(None);
            }
            renderer.render(name, descriptor).map(Some)
        };
        let is_true = |value: Option<String>| value.is_some_and(|v| v.trim() == "true");

        if descriptor.kind == PrimitiveKind::Boolean && is_true(directive(SKIP_BOOLEAN)?) {
            return Ok(None);
        }
        if is_true(directive(SKIP)?) {
            return Ok(None);
        }

        let group = set.unit_name(unit);
        let stem = set.source_map().stem(unit.root()).unwrap_or(INLINE_STEM);
        let file_name = match directive(FILE_NAME)? {
            Some(name) => name.trim().to_string(),
            None => specialized_name(stem, descriptor.name),
        };
        let target = directive(TARGET_PATH)?.unwrap_or_default();
        let is_test = is_true(directive(IS_TEST)?);
        let contents = renderer.render(CLASS, descriptor)?;

        if !is_valid_file_name(&file_name) {
            let kind = RenderErrorKind::InvalidFileName(file_name);
            return Err(output_error(set, unit, FILE_NAME, descriptor, kind));
        }
        let Some(dir) = relative_dir(target.trim()) else {
            let kind = RenderErrorKind::InvalidTargetPath(target);
            return Err(output_error(set, unit, TARGET_PATH, descriptor, kind));
        };

        let relative_path = dir.join(format!("{}.{}", file_name, self.config.extension));
        Ok(Some(GeneratedFile {
            relative_path,
            is_test,
            primitive: descriptor.kind,
            group,
            contents,
        }))
    }

    /// Writes `files` below the configured roots.
    ///
    /// Every file is first staged next to its target and only then renamed
    /// into place, so a write error leaves no target touched. Directories
    /// created while staging are kept. A failed rename can still leave the
    /// files renamed before it in place.
    pub fn write(&self, files: &[GeneratedFile]) -> Result<WriteReport> {
        let mut report = WriteReport::default();
        let mut staged: Vec<(PathBuf, PathBuf)> = Vec::new();

        for file in files {
            let path = self.config.root_for(file.is_test).join(&file.relative_path);

            if self.config.write_mode == WriteMode::IfChanged
                && fs::read_to_string(&path).is_ok_and(|existing| existing == file.contents)
            {
                tracing::debug!(path = %path.display(), "unchanged");
                report.unchanged.push(path);
                continue;
            }

            match stage(&path, &file.contents) {
                Ok(temp) => staged.push((temp, path)),
                Err(err) => {
                    discard(&staged);
                    return Err(err);
                }
            }
        }

        for (i, (temp, path)) in staged.iter().enumerate() {
            if let Err(source) = fs::rename(temp, path) {
                discard(&staged[i..]);
                return Err(Error::Write {
                    path: path.clone(),
                    source,
                });
            }
            tracing::debug!(path = %path.display(), "wrote");
            report.written.push(path.clone());
        }

        Ok(report)
    }

    /// Renders everything, then writes it.
    pub fn run(&self, set: &TemplateSet) -> Result<WriteReport> {
        let files = self.render(set)?;
        let report = self.write(&files)?;
        tracing::info!(
            written = report.written.len(),
            unchanged = report.unchanged.len(),
            "generation finished"
        );
        Ok(report)
    }
}

/// Writes `contents` to a hidden sibling of `path` and returns its path.
fn stage(path: &Path, contents: &str) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let temp = staging_path(path);
    fs::write(&temp, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(temp)
}

fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}

fn discard(staged: &[(PathBuf, PathBuf)]) {
    for (temp, _) in staged {
        if let Err(err) = fs::remove_file(temp) {
            tracing::warn!(path = %temp.display(), %err, "could not remove staged file");
        }
    }
}

fn output_error(
    set: &TemplateSet,
    unit: &Unit,
    template: &str,
    descriptor: &PrimitiveDescriptor,
    kind: RenderErrorKind,
) -> RenderError {
    RenderError {
        group: set.unit_name(unit),
        template: template.to_string(),
        primitive: descriptor.kind,
        kind,
    }
}

fn is_valid_file_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && name != "." && name != ".."
}

/// A relative directory that stays below the output root.
fn relative_dir(target: &str) -> Option<PathBuf> {
    let path = Path::new(target);
    let mut dir = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Normal(part) => dir.push(part),
            Component::CurDir => {}
            _ => return None,
        }
    }
    Some(dir)
}
