use std::fs;
use std::path::{Path, PathBuf};

use primgen_compiler::{Error, FsLoader, TemplateSet};

pub const GROUP_EXTENSION: &str = "stg";

/// Root groups named by a CLI path: the file itself, or every `.stg` file
/// directly inside a directory, sorted.
pub fn template_roots(path: &Path) -> Result<Vec<PathBuf>, String> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut roots: Vec<PathBuf> = fs::read_dir(path)
        .map_err(|e| format!("failed to read directory '{}': {}", path.display(), e))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == GROUP_EXTENSION))
        .collect();

    if roots.is_empty() {
        return Err(format!(
            "no .{} files found in '{}'",
            GROUP_EXTENSION,
            path.display()
        ));
    }

    // Sort for deterministic ordering
    roots.sort();
    Ok(roots)
}

/// Loads and analyzes the groups at `path`. Diagnostics are left to the caller.
pub fn load_templates(path: &Path) -> Result<TemplateSet, String> {
    let roots = template_roots(path)?;
    TemplateSet::load(&roots, &FsLoader).map_err(|e| e.to_string())
}

/// Prints diagnostics, if any, and exits when the set has errors.
pub fn report_diagnostics(set: &TemplateSet, color: bool) {
    let diagnostics = set.diagnostics();
    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.render_colored(set.source_map(), color));
    }
    if !set.is_valid() {
        std::process::exit(1);
    }
}

/// Prints a generation failure and exits.
pub fn exit_with(err: &Error, set: &TemplateSet, color: bool) -> ! {
    match err {
        Error::Invalid(diagnostics) => {
            eprint!("{}", diagnostics.render_colored(set.source_map(), color));
        }
        _ => eprintln!("error: {}", err),
    }
    std::process::exit(1)
}

pub fn exit_with_message(msg: &str) -> ! {
    eprintln!("error: {}", msg);
    std::process::exit(1)
}
