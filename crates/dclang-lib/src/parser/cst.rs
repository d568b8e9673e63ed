//! Syntax kinds for the configuration language.
//!
//! `SyntaxKind` serves dual roles: token kinds (from lexer) and node kinds (from parser).
//! Logos derives token recognition; node kinds lack token/regex attributes.
//! `DLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first, then nodes, then `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("=")]
    Equals,

    /// Append assignment: `dependencies += listOf(...)`
    #[token("+=")]
    PlusEquals,

    #[token(",")]
    Comma,

    #[token(".")]
    Dot,

    #[token(";")]
    Semicolon,

    #[token("true")]
    KwTrue,

    #[token("false")]
    KwFalse,

    #[token("null")]
    KwNull,

    /// Bare identifier, or backtick-quoted with embedded backticks doubled.
    /// Defined after keywords so they take precedence.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    #[regex(r"`(?:[^`]|``)*`")]
    Identifier,

    #[regex(r#""(?:[^"\\\n\r]|\\.)*""#)]
    StringLiteral,

    #[token("\"\"\"", lex_multiline_string)]
    MultilineStringLiteral,

    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+")]
    #[regex(r"0[bB][01_]+")]
    IntegerLiteral,

    #[regex(r"(?:[0-9][0-9_]*|0[xX][0-9a-fA-F_]+|0[bB][01_]+)L")]
    LongLiteral,

    #[regex(r"(?:[0-9][0-9_]*|0[xX][0-9a-fA-F_]+|0[bB][01_]+)[uU]")]
    UnsignedInteger,

    #[regex(r"(?:[0-9][0-9_]*|0[xX][0-9a-fA-F_]+|0[bB][01_]+)[uU]L")]
    UnsignedLong,

    /// Bind parameter: `:name`, `?` or `?1`
    #[regex(r":[A-Za-z_][A-Za-z0-9_]*")]
    #[regex(r"\?[0-9]*")]
    ParamName,

    #[regex(r"[ \t\x0C]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    #[token("\r")]
    Newline,

    #[regex(r"//[^\n\r]*", allow_greedy = true)]
    LineComment,

    #[regex(r"/\*(?:[^*]|\*+[^*/])*\*+/")]
    BlockComment,

    /// A single character the lexer does not recognize.
    BadCharacter,

    /// End-of-input sentinel returned by lookahead. Never stored in the tree.
    Eof,

    // --- Node kinds (non-terminals) ---
    Root,
    ExprRoot,
    Assignment,
    Block,
    BlockBody,
    FactoryCall,
    ReceiverCall,
    ArgumentList,
    Argument,
    QualifiedReference,
    Property,
    Literal,
    Parameter,
    Error,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

/// Consumes the body of a `"""` string up to and including the closing `"""`.
fn lex_multiline_string(lex: &mut logos::Lexer<SyntaxKind>) -> bool {
    match lex.remainder().find("\"\"\"") {
        Some(end) => {
            lex.bump(end + 3);
            true
        }
        None => false,
    }
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        self.is_whitespace() || self.is_comment()
    }

    #[inline]
    pub fn is_whitespace(self) -> bool {
        token_sets::WHITESPACE_TOKENS.contains(self)
    }

    #[inline]
    pub fn is_comment(self) -> bool {
        token_sets::COMMENT_TOKENS.contains(self)
    }

    #[inline]
    pub fn is_string_literal(self) -> bool {
        token_sets::STRING_LITERALS.contains(self)
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Error | BadCharacter)
    }

    /// Kinds the lexer can produce. `Eof` is a lookahead sentinel, not a token.
    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) < (Eof as u16)
    }

    #[inline]
    pub fn is_node(self) -> bool {
        (self as u16) > (Eof as u16) && (self as u16) < (__LAST as u16)
    }

    /// Every kind, tokens first. Useful for building exhaustive tables.
    pub fn all() -> impl Iterator<Item = SyntaxKind> {
        (0..__LAST as u16).map(|raw| DLang::kind_from_raw(rowan::SyntaxKind(raw)))
    }

    /// Name accepted by [`SyntaxKind::from_name`], identical to the `Debug` output.
    pub fn name(self) -> String {
        format!("{self:?}")
    }

    pub fn from_name(name: &str) -> Option<SyntaxKind> {
        Self::all().find(|kind| kind.name() == name)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DLang {}

impl Language for DLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for Rowan types parameterized by our language.
pub type SyntaxNode = rowan::SyntaxNode<DLang>;
pub type SyntaxToken = rowan::SyntaxToken<DLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn single(kind: SyntaxKind) -> Self {
        let kind = kind as u16;
        assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
        TokenSet(1 << kind)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }

    #[inline]
    pub const fn intersects(self, other: TokenSet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn iter(self) -> impl Iterator<Item = SyntaxKind> {
        SyntaxKind::all().filter(move |kind| self.contains(*kind))
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Pre-defined token sets for the parser and for external formatters/highlighters.
pub mod token_sets {
    use super::*;

    pub const WHITESPACE_TOKENS: TokenSet = TokenSet::new(&[Whitespace, Newline]);

    pub const COMMENT_TOKENS: TokenSet = TokenSet::new(&[LineComment, BlockComment]);

    pub const STRING_LITERALS: TokenSet = TokenSet::new(&[StringLiteral, MultilineStringLiteral]);

    pub const TRIVIA: TokenSet = WHITESPACE_TOKENS.union(COMMENT_TOKENS);

    pub const NUMBER_LITERALS: TokenSet =
        TokenSet::new(&[IntegerLiteral, LongLiteral, UnsignedInteger, UnsignedLong]);

    pub const KEYWORDS: TokenSet = TokenSet::new(&[KwTrue, KwFalse, KwNull]);

    pub const LITERALS: TokenSet = STRING_LITERALS.union(NUMBER_LITERALS).union(KEYWORDS);

    pub const ASSIGNMENT_OPERATORS: TokenSet = TokenSet::new(&[Equals, PlusEquals]);

    /// FIRST set of an expression.
    pub const EXPR_FIRST: TokenSet = LITERALS.union(TokenSet::new(&[Identifier, ParamName]));

    /// FIRST set of a statement. Every statement starts like an expression.
    pub const STATEMENT_FIRST: TokenSet = EXPR_FIRST;

    /// Tokens that end an argument list when `)` is missing.
    pub const ARGUMENT_LIST_RECOVERY: TokenSet = TokenSet::new(&[BraceOpen, BraceClose, Semicolon]);
}
