//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("primgen")
        .about("Generate per-primitive sources from template groups")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
        .subcommand(render_command())
        .subcommand(primitives_command())
}

/// Expand generator groups for every primitive and write the results.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Expand template groups into one source file per primitive")
        .override_usage(
            "\
  primgen generate <TEMPLATES> -o <DIR>
  primgen generate <TEMPLATES> -o <DIR> --test-output <DIR>",
        )
        .after_help(
            r#"EXAMPLES:
  primgen generate templates/ -o src/main/java                  # every group in the directory
  primgen generate stack.stg -o out --primitives int,long       # two primitives only
  primgen generate templates/ -o out --test-output out-test     # tests to their own root
  primgen generate templates/ -o out --dry-run                  # list, write nothing"#,
        )
        .arg(templates_arg().required(true))
        .arg(output_dir_arg())
        .arg(test_output_dir_arg())
        .arg(primitives_arg())
        .arg(extension_arg())
        .arg(recursion_limit_arg())
        .arg(force_arg())
        .arg(dry_run_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Parse and analyze template groups.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate template groups")
        .after_help(
            r#"EXAMPLES:
  primgen check stack.stg             # one group and its imports
  primgen check templates/            # every group in the directory
  primgen check templates/ --strict   # fail on warnings too"#,
        )
        .arg(templates_arg().required(true))
        .arg(strict_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Render one template for one primitive to stdout.
pub fn render_command() -> Command {
    Command::new("render")
        .about("Render one template for one primitive")
        .override_usage(
            "\
  primgen render <TEMPLATE> -p <PRIMITIVE> [-t <NAME>]
  primgen render -e <TEXT> -p <PRIMITIVE> [-t <NAME>]",
        )
        .after_help(
            r#"EXAMPLES:
  primgen render stack.stg -p int                       # the `class` template
  primgen render stack.stg -p double -t fileName        # a directive
  primgen render -e 't(p) ::= "<p.wrapperName>"' -p char -t t"#,
        )
        .arg(template_file_arg().required_unless_present("template_text"))
        .arg(template_text_arg())
        .arg(primitive_arg())
        .arg(template_name_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// List the primitive descriptors.
pub fn primitives_command() -> Command {
    Command::new("primitives")
        .about("List primitive descriptors and template properties")
        .arg(json_arg())
}
