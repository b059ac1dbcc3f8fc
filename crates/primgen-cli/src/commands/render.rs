use std::path::{Path, PathBuf};

use primgen_compiler::render::Renderer;
use primgen_compiler::{FsLoader, RenderError, TemplateSet};
use primgen_core::PrimitiveKind;

use super::template_loader::{exit_with_message, load_templates, report_diagnostics};

pub struct RenderArgs {
    pub template_file: Option<PathBuf>,
    pub template_text: Option<String>,
    pub primitive: PrimitiveKind,
    pub template_name: String,
    pub recursion_limit: usize,
    pub color: bool,
}

pub fn run(args: RenderArgs) {
    let set = match (&args.template_text, &args.template_file) {
        // Inline groups import relative to the working directory.
        (Some(text), _) => TemplateSet::from_source_with(text, Path::new(""), &FsLoader),
        (None, Some(path)) => {
            if path.is_dir() {
                exit_with_message(&format!(
                    "'{}' is a directory; render takes a single group",
                    path.display()
                ));
            }
            load_templates(path).unwrap_or_else(|msg| exit_with_message(&msg))
        }
        (None, None) => exit_with_message("template is required: use a positional path or -e/--expr"),
    };
    report_diagnostics(&set, args.color);

    match render_template(&set, &args.template_name, args.primitive, args.recursion_limit) {
        Ok(text) => println!("{}", text),
        Err(e) => exit_with_message(&e.to_string()),
    }
}

/// Renders `name` from the set's single root group.
pub fn render_template(
    set: &TemplateSet,
    name: &str,
    primitive: PrimitiveKind,
    recursion_limit: usize,
) -> Result<String, RenderError> {
    let unit = set
        .units()
        .first()
        .expect("a loaded template set has one unit per root");
    Renderer::new(set, unit)
        .recursion_limit(recursion_limit)
        .render(name, primitive.descriptor())
}
