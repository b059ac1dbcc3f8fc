use super::Span;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// When two diagnostics overlap, the higher-priority one suppresses the
/// lower-priority one. Unclosed delimiters come first since everything after
/// them is usually noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Unclosed delimiters
    UnclosedTemplate,
    UnclosedString,
    UnclosedTag,
    UnclosedComment,
    UnclosedIf,
    UnclosedParams,
    UnclosedDict,

    // Something required is missing
    ExpectedDefineAs,
    ExpectedTemplateBody,
    ExpectedParamName,
    ExpectedDictKey,
    ExpectedDictValue,
    ExpectedImportPath,

    // Something that doesn't belong
    UnexpectedToken,
    InvalidExpression,
    UnexpectedBranch,

    // Imports
    ImportNotFound,
    ImportCycle,

    // Valid syntax, invalid semantics
    DuplicateDefinition,
    DuplicateParameter,
    DuplicateDictKey,
    ReservedName,
    UndefinedTemplate,
    UndefinedAttribute,
    UnknownProperty,
    ArityMismatch,
    DictionaryAsValue,
    InvalidDirective,

    // Style
    UnusedParameter,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UnusedParameter => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether this kind suppresses `other` when spans overlap.
    pub fn suppresses(&self, other: &DiagnosticKind) -> bool {
        self < other
    }

    pub fn is_structural_error(&self) -> bool {
        matches!(
            self,
            Self::UnclosedTemplate
                | Self::UnclosedString
                | Self::UnclosedTag
                | Self::UnclosedComment
                | Self::UnclosedIf
                | Self::UnclosedParams
                | Self::UnclosedDict
        )
    }

    /// Hint attached to every diagnostic of this kind.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnclosedTag => Some("a literal `<` in template text must be escaped as `\\<`"),
            Self::ExpectedDefineAs => Some("e.g., `name(primitive) ::= \"...\"`"),
            Self::ExpectedDictValue => Some("dictionary values are strings, `<<...>>` or `key`"),
            Self::ReservedName => Some("`literal`, `cast` and `hashCode` are built in"),
            Self::UnusedParameter => Some("prefix it with `_` to silence this warning"),
            _ => None,
        }
    }

    /// Base message for this kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedTemplate => "missing closing `>>`",
            Self::UnclosedString => "missing closing `\"`",
            Self::UnclosedTag => "missing closing `>`",
            Self::UnclosedComment => "missing closing `!>`",
            Self::UnclosedIf => "missing `<endif>`",
            Self::UnclosedParams => "missing closing `)`",
            Self::UnclosedDict => "missing closing `]`",

            Self::ExpectedDefineAs => "expected `::=`",
            Self::ExpectedTemplateBody => "expected template body",
            Self::ExpectedParamName => "expected parameter name",
            Self::ExpectedDictKey => "expected dictionary key",
            Self::ExpectedDictValue => "expected dictionary value",
            Self::ExpectedImportPath => "expected import path",

            Self::UnexpectedToken => "unexpected token",
            Self::InvalidExpression => "invalid expression",
            Self::UnexpectedBranch => "branch outside of `<if>`",

            Self::ImportNotFound => "import not found",
            Self::ImportCycle => "import cycle",

            Self::DuplicateDefinition => "duplicate definition",
            Self::DuplicateParameter => "duplicate parameter",
            Self::DuplicateDictKey => "duplicate dictionary key",
            Self::ReservedName => "reserved name",
            Self::UndefinedTemplate => "undefined template",
            Self::UndefinedAttribute => "undefined attribute",
            Self::UnknownProperty => "unknown property",
            Self::ArityMismatch => "wrong number of arguments",
            Self::DictionaryAsValue => "dictionary used as a value",
            Self::InvalidDirective => "invalid directive",

            Self::UnusedParameter => "unused parameter",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::DuplicateDefinition => "`{}` is already defined".to_string(),
            Self::DuplicateParameter => "parameter `{}` is already declared".to_string(),
            Self::DuplicateDictKey => "key `{}` appears more than once".to_string(),
            Self::ReservedName => "`{}` is a built-in and cannot be redefined".to_string(),
            Self::UndefinedTemplate => "template `{}` is not defined".to_string(),
            Self::UndefinedAttribute => "attribute `{}` is not defined".to_string(),
            Self::UnknownProperty => "`{}` is not a primitive property".to_string(),
            Self::DictionaryAsValue => "dictionary `{}` can only be indexed".to_string(),
            Self::UnusedParameter => "parameter `{}` is never used".to_string(),
            Self::ImportNotFound => "cannot load `{}`".to_string(),
            Self::ImportCycle => "importing `{}` forms a cycle".to_string(),

            Self::UnclosedTemplate
            | Self::UnclosedString
            | Self::UnclosedTag
            | Self::UnclosedComment
            | Self::UnclosedIf
            | Self::UnclosedParams
            | Self::UnclosedDict => format!("{}; {{}}", self.fallback_message()),

            Self::ArityMismatch
            | Self::InvalidDirective
            | Self::UnexpectedToken
            | Self::InvalidExpression
            | Self::UnexpectedBranch => "{}".to_string(),

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` returns `fallback_message()`
    /// - `Some(detail)` returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) span: Span,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) span: Span,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
            related: Vec::new(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, span: Span) -> Self {
        Self::new(kind, span, kind.fallback_message())
    }

    pub(crate) fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub(crate) fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.span.range.start()),
            u32::from(self.span.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.span.range.start()),
                u32::from(related.span.range.end())
            )?;
        }
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
