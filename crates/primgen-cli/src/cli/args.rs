//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use primgen_core::PrimitiveKind;

/// Template group file or directory of groups (positional).
pub fn templates_arg() -> Arg {
    Arg::new("templates")
        .value_name("TEMPLATES")
        .value_parser(value_parser!(PathBuf))
        .help("Template group file, or a directory of `.stg` groups")
}

/// Single template group file (positional).
pub fn template_file_arg() -> Arg {
    Arg::new("template_file")
        .value_name("TEMPLATE")
        .value_parser(value_parser!(PathBuf))
        .help("Template group file")
}

/// Inline group text (-e/--expr).
pub fn template_text_arg() -> Arg {
    Arg::new("template_text")
        .short('e')
        .long("expr")
        .value_name("TEXT")
        .conflicts_with("template_file")
        .help("Inline template group text")
}

/// Output root (-o/--output).
pub fn output_dir_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("DIR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Directory generated sources are written to")
}

/// Output root for groups marked `isTest` (--test-output).
pub fn test_output_dir_arg() -> Arg {
    Arg::new("test_output")
        .long("test-output")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Directory for generated tests (default: same as --output)")
}

/// Primitive filter (--primitives int,long).
pub fn primitives_arg() -> Arg {
    Arg::new("primitives")
        .long("primitives")
        .value_name("LIST")
        .value_delimiter(',')
        .value_parser(value_parser!(PrimitiveKind))
        .help("Only generate for these primitives (comma-separated)")
}

/// A single primitive (-p/--primitive).
pub fn primitive_arg() -> Arg {
    Arg::new("primitive")
        .short('p')
        .long("primitive")
        .value_name("PRIMITIVE")
        .required(true)
        .value_parser(value_parser!(PrimitiveKind))
        .help("Primitive to render for (keyword, name or wrapper name)")
}

/// Template to render (-t/--template).
pub fn template_name_arg() -> Arg {
    Arg::new("template_name")
        .short('t')
        .long("template")
        .value_name("NAME")
        .default_value("class")
        .help("Template to render")
}

/// Output file extension (--extension).
pub fn extension_arg() -> Arg {
    Arg::new("extension")
        .long("extension")
        .value_name("EXT")
        .default_value("java")
        .help("Extension of generated files")
}

/// Rewrite unchanged files (--force).
pub fn force_arg() -> Arg {
    Arg::new("force")
        .long("force")
        .action(ArgAction::SetTrue)
        .help("Rewrite files even when their contents did not change")
}

/// Render without writing (--dry-run).
pub fn dry_run_arg() -> Arg {
    Arg::new("dry_run")
        .long("dry-run")
        .action(ArgAction::SetTrue)
        .help("Render everything and list the files that would be written")
}

/// Nested template call limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .default_value("64")
        .value_parser(value_parser!(usize))
        .help("Maximum depth of nested template calls")
}

/// Emit JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the descriptor table as JSON")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Log progress to stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides")
}
