use std::path::PathBuf;

use super::template_loader::{exit_with_message, load_templates};

pub struct CheckArgs {
    pub templates: PathBuf,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let set = load_templates(&args.templates).unwrap_or_else(|msg| exit_with_message(&msg));

    let diagnostics = set.diagnostics();
    let is_valid = if args.strict {
        !diagnostics.has_errors() && !diagnostics.has_warnings()
    } else {
        set.is_valid()
    };

    if !diagnostics.is_empty() {
        eprint!("{}", diagnostics.render_colored(set.source_map(), args.color));
    }
    if !is_valid {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
