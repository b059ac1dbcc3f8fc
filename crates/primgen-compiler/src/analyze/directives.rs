//! Templates with a fixed meaning in generator groups.

use super::validate::plural;
use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};
use crate::parser::TemplateDef;
use crate::source_map::SourceId;

pub const CLASS: &str = "class";
pub const FILE_NAME: &str = "fileName";
pub const TARGET_PATH: &str = "targetPath";
pub const SKIP_BOOLEAN: &str = "skipBoolean";
pub const SKIP: &str = "skip";
pub const IS_TEST: &str = "isTest";

/// Directive names and the number of parameters each must declare.
pub const DIRECTIVES: &[(&str, usize)] = &[
    (CLASS, 1),
    (FILE_NAME, 1),
    (TARGET_PATH, 0),
    (SKIP_BOOLEAN, 0),
    (SKIP, 1),
    (IS_TEST, 0),
];

pub(crate) fn check_directive(
    source: SourceId,
    template: &TemplateDef,
    diagnostics: &mut Diagnostics,
) {
    let Some(&(name, expected)) = DIRECTIVES.iter().find(|(n, _)| *n == template.name.text)
    else {
        return;
    };
    if template.arity() == expected {
        return;
    }

    let params = match expected {
        0 => "()".to_string(),
        _ => "(primitive)".to_string(),
    };
    diagnostics
        .report(
            DiagnosticKind::InvalidDirective,
            Span::new(source, template.name.range),
        )
        .message(format!(
            "`{}` must take {} {}, found {}",
            name,
            expected,
            plural(expected, "parameter"),
            template.arity()
        ))
        .hint(format!("declare it as `{name}{params} ::= ...`"))
        .emit();
}
