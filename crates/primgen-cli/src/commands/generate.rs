use std::path::PathBuf;

use primgen_compiler::{Generator, GeneratorConfig, WriteMode};
use primgen_core::PrimitiveKind;

use super::template_loader::{exit_with, exit_with_message, load_templates, report_diagnostics};

pub struct GenerateArgs {
    pub templates: PathBuf,
    pub output: PathBuf,
    pub test_output: Option<PathBuf>,
    pub primitives: Option<Vec<PrimitiveKind>>,
    pub extension: String,
    pub recursion_limit: usize,
    pub force: bool,
    pub dry_run: bool,
    pub color: bool,
}

pub fn run(args: GenerateArgs) {
    let set = load_templates(&args.templates).unwrap_or_else(|msg| exit_with_message(&msg));
    report_diagnostics(&set, args.color);

    if set.generators().next().is_none() {
        tracing::warn!(
            path = %args.templates.display(),
            "no generator groups (groups defining `class`) found"
        );
    }

    let generator = Generator::new(generator_config(&args));

    if args.dry_run {
        let files = generator
            .render(&set)
            .unwrap_or_else(|e| exit_with(&e, &set, args.color));
        for file in files {
            let root = generator.config().root_for(file.is_test);
            println!("{}", root.join(&file.relative_path).display());
        }
        return;
    }

    let report = generator
        .run(&set)
        .unwrap_or_else(|e| exit_with(&e, &set, args.color));
    eprintln!(
        "generated {} file(s), {} unchanged",
        report.written.len(),
        report.unchanged.len()
    );
}

pub fn generator_config(args: &GenerateArgs) -> GeneratorConfig {
    let mut config = GeneratorConfig::new(&args.output)
        .extension(args.extension.trim_start_matches('.'))
        .recursion_limit(args.recursion_limit);

    if let Some(dir) = &args.test_output {
        config = config.test_output_dir(dir);
    }
    if let Some(primitives) = &args.primitives {
        config = config.primitives(primitives);
    }
    if args.force {
        config = config.write_mode(WriteMode::Always);
    }
    config
}
