//! Lexer for the configuration language.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//! Tokens partition the input: concatenating every token's text reproduces the source exactly.
//!
//! ## Error handling
//!
//! The lexer never fails. A character that starts no valid token becomes a single-character
//! `BadCharacter` token and scanning resumes right after it, so the stream stays total and
//! can be restarted at any token boundary.

use logos::Logos;
use rowan::{TextRange, TextSize};
use std::ops::Range;

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }

    #[inline]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        token_text(source, self)
    }
}

/// Initial lexer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum LexerMode {
    #[default]
    Default,
    /// Accepts host-language identifiers (Unicode XID plus `$`) wherever one can start,
    /// and reports keywords as plain identifiers.
    Identifiers,
}

impl LexerMode {
    pub fn accepting_language_identifiers(accept: bool) -> Self {
        if accept {
            LexerMode::Identifiers
        } else {
            LexerMode::Default
        }
    }
}

/// Lazy token stream over `source[start..end]`.
///
/// Each call to `next` scans one token starting exactly at the current offset, which is
/// what makes the stream restartable from any token boundary.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    pos: usize,
    end: usize,
    mode: LexerMode,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_range(source, 0..source.len(), LexerMode::Default)
    }

    pub fn with_mode(source: &'src str, mode: LexerMode) -> Self {
        Self::with_range(source, 0..source.len(), mode)
    }

    /// Panics if `range` is out of bounds or does not fall on char boundaries.
    pub fn with_range(source: &'src str, range: Range<usize>, mode: LexerMode) -> Self {
        assert!(
            range.start <= range.end && range.end <= source.len(),
            "Lexer::with_range: range {:?} out of bounds for source of length {}",
            range,
            source.len()
        );
        assert!(
            source.is_char_boundary(range.start) && source.is_char_boundary(range.end),
            "Lexer::with_range: range {:?} does not fall on char boundaries",
            range
        );
        Self {
            source,
            pos: range.start,
            end: range.end,
            mode,
        }
    }

    /// Offset of the next token to be produced.
    pub fn offset(&self) -> usize {
        self.pos
    }

    pub fn mode(&self) -> LexerMode {
        self.mode
    }

    fn scan_token(&self, rest: &str) -> (SyntaxKind, usize) {
        if self.mode == LexerMode::Identifiers
            && let Some(len) = scan_language_identifier(rest)
        {
            return (SyntaxKind::Identifier, len);
        }

        let mut raw = SyntaxKind::lexer(rest);
        match raw.next() {
            Some(Ok(kind)) if raw.span().start == 0 && raw.span().end > 0 => {
                (kind, raw.span().end)
            }
            _ => {
                let len = rest.chars().next().map_or(1, char::len_utf8);
                (SyntaxKind::BadCharacter, len)
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.pos >= self.end {
            return None;
        }

        let start = self.pos;
        let (kind, len) = self.scan_token(&self.source[start..self.end]);
        self.pos = start + len;
        Some(Token::new(kind, range_to_text_range(start..self.pos)))
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Length of the Java/Kotlin style identifier at the start of `text`, if any.
fn scan_language_identifier(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    let (_, first) = chars.next()?;
    if !(first == '_' || first == '$' || unicode_ident::is_xid_start(first)) {
        return None;
    }
    let end = chars
        .find(|&(_, c)| !(c == '$' || unicode_ident::is_xid_continue(c)))
        .map_or(text.len(), |(i, _)| i);
    Some(end)
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new(
        TextSize::from(range.start as u32),
        TextSize::from(range.end as u32),
    )
}

/// Lazy token stream over the whole source in the default mode.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Tokenizes source into a vector of span-based tokens.
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

pub fn lex_with_mode(source: &str, mode: LexerMode) -> Vec<Token> {
    Lexer::with_mode(source, mode).collect()
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'src>(source: &'src str, token: &Token) -> &'src str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
