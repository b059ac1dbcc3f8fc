//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use primgen_core::PrimitiveKind;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::primitives::PrimitivesArgs;
use crate::commands::render::RenderArgs;

pub struct GenerateParams {
    pub templates: PathBuf,
    pub output: PathBuf,
    pub test_output: Option<PathBuf>,
    pub primitives: Option<Vec<PrimitiveKind>>,
    pub extension: String,
    pub recursion_limit: usize,
    pub force: bool,
    pub dry_run: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            templates: required_path(m, "templates"),
            output: required_path(m, "output"),
            test_output: m.get_one::<PathBuf>("test_output").cloned(),
            primitives: m
                .get_many::<PrimitiveKind>("primitives")
                .map(|kinds| kinds.copied().collect()),
            extension: m
                .get_one::<String>("extension")
                .cloned()
                .unwrap_or_else(|| "java".to_string()),
            recursion_limit: parse_recursion_limit(m),
            force: m.get_flag("force"),
            dry_run: m.get_flag("dry_run"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            templates: p.templates,
            output: p.output,
            test_output: p.test_output,
            primitives: p.primitives,
            extension: p.extension,
            recursion_limit: p.recursion_limit,
            force: p.force,
            dry_run: p.dry_run,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub templates: PathBuf,
    pub strict: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            templates: required_path(m, "templates"),
            strict: m.get_flag("strict"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            templates: p.templates,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct RenderParams {
    pub template_file: Option<PathBuf>,
    pub template_text: Option<String>,
    pub primitive: PrimitiveKind,
    pub template_name: String,
    pub recursion_limit: usize,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl RenderParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            template_file: m.get_one::<PathBuf>("template_file").cloned(),
            template_text: m.get_one::<String>("template_text").cloned(),
            primitive: m
                .get_one::<PrimitiveKind>("primitive")
                .copied()
                .expect("primitive is a required arg"),
            template_name: m
                .get_one::<String>("template_name")
                .cloned()
                .unwrap_or_else(|| "class".to_string()),
            recursion_limit: parse_recursion_limit(m),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        Self {
            template_file: p.template_file,
            template_text: p.template_text,
            primitive: p.primitive,
            template_name: p.template_name,
            recursion_limit: p.recursion_limit,
            color: p.color.should_colorize(),
        }
    }
}

pub struct PrimitivesParams {
    pub json: bool,
}

impl PrimitivesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
        }
    }
}

impl From<PrimitivesParams> for PrimitivesArgs {
    fn from(p: PrimitivesParams) -> Self {
        Self { json: p.json }
    }
}

fn required_path(m: &ArgMatches, id: &str) -> PathBuf {
    m.get_one::<PathBuf>(id)
        .cloned()
        .expect("required path arg is enforced by clap")
}

fn parse_recursion_limit(m: &ArgMatches) -> usize {
    m.get_one::<usize>("recursion_limit")
        .copied()
        .unwrap_or(primgen_compiler::render::DEFAULT_RECURSION_LIMIT)
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
