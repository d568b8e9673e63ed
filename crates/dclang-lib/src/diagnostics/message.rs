use rowan::TextRange;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// Priority rationale:
/// - Unclosed delimiters cause cascading errors downstream
/// - Expected token errors are root causes the user should fix first
/// - Misplaced tokens are specific mistakes at a location
/// - Limits are reported last, they only fire on pathological input
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // These cause cascading errors throughout the rest of the file
    UnclosedParen,
    UnclosedBrace,

    // User omitted something required - root cause errors
    ExpectedExpression,
    ExpectedIdentifier,
    ExpectedStatement,
    ExpectedSeparator,
    ExpectedCommaOrParen,

    // User wrote something that doesn't belong
    TrailingComma,
    EmptyArgument,
    InvalidAssignmentTarget,
    InvalidBlockHead,
    InvalidMemberAccess,
    UnmatchedDelimiter,
    UnexpectedCharacter,
    UnexpectedToken,
    TrailingInput,

    // Limits
    NestingTooDeep,
}

impl DiagnosticKind {
    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedParen => "missing closing `)`",
            Self::UnclosedBrace => "missing closing `}`",

            Self::ExpectedExpression => "expected an expression",
            Self::ExpectedIdentifier => "expected an identifier",
            Self::ExpectedStatement => "expected an assignment, block or call",
            Self::ExpectedSeparator => "expected newline or `;` between statements",
            Self::ExpectedCommaOrParen => "expected `,` or `)`",

            Self::TrailingComma => "trailing comma is not allowed",
            Self::EmptyArgument => "empty argument",
            Self::InvalidAssignmentTarget => "invalid assignment target",
            Self::InvalidBlockHead => "invalid block name",
            Self::InvalidMemberAccess => "only names can be followed by `.`",
            Self::UnmatchedDelimiter => "unmatched closing delimiter",
            Self::UnexpectedCharacter => "unexpected character",
            Self::UnexpectedToken => "unexpected token",
            Self::TrailingInput => "unexpected input after expression",

            Self::NestingTooDeep => "nesting too deep",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnclosedParen | Self::UnclosedBrace => {
                format!("{}; {{}}", self.fallback_message())
            }
            Self::InvalidAssignmentTarget => "cannot assign to {}".to_string(),
            Self::InvalidMemberAccess => "cannot access members of {}".to_string(),
            Self::UnexpectedCharacter => "unexpected character `{}`".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Short fix-it shown under the offending range when rendering against source.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ExpectedSeparator => Some("start a new line or add `;`"),
            Self::TrailingComma => Some("remove this `,`"),
            Self::EmptyArgument => Some("argument missing before this `,`"),
            Self::InvalidAssignmentTarget => Some("assign to a name or a dotted path"),
            Self::InvalidBlockHead => Some("use `name { }` or `name(args) { }`"),
            Self::InvalidMemberAccess => Some("only names and calls have members"),
            Self::TrailingInput => Some("an expression root holds one expression"),
            _ => None,
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) range: TextRange,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A recoverable syntax error. Parsing always continues past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl ParseError {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn offset(&self) -> u32 {
        self.range.start().into()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}
