//! Validity checks and identifier quoting built on the lexer and parser.
//!
//! Quoting decisions reuse the lexer: a name needs quoting exactly when it does not lex
//! back as one identifier token, so the two can never disagree.

use std::borrow::Cow;

use crate::parser::{self, SyntaxKind, lexer};

const QUOTE: char = '`';

/// Parses `text` as a file. True iff there are no syntax errors.
pub fn is_valid_query(text: &str) -> bool {
    parser::parse(text).is_valid()
}

/// Parses `text` with the expression entry point. True iff there are no syntax errors.
pub fn is_valid_expression(text: &str) -> bool {
    parser::parse_expression_root(text).is_valid()
}

/// True unless `name` lexes as exactly one identifier covering all of it.
pub fn needs_quoting(name: &str) -> bool {
    let mut tokens = lexer::tokenize(name);
    match (tokens.next(), tokens.next()) {
        (Some(token), None) => {
            token.kind != SyntaxKind::Identifier || usize::from(token.span.end()) != name.len()
        }
        _ => true,
    }
}

/// `name` itself when it is already a single identifier, otherwise the backtick-quoted
/// form with embedded backticks doubled.
pub fn get_valid_name(name: &str) -> Cow<'_, str> {
    if !needs_quoting(name) {
        return Cow::Borrowed(name);
    }
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push(QUOTE);
    for c in name.chars() {
        if c == QUOTE {
            quoted.push(QUOTE);
        }
        quoted.push(c);
    }
    quoted.push(QUOTE);
    Cow::Owned(quoted)
}

/// Inverse of quoting: strips surrounding backticks and undoubles inner ones.
/// Anything that is not backtick-quoted is returned unchanged.
pub fn unquote(name: &str) -> String {
    let inner = name
        .strip_prefix(QUOTE)
        .and_then(|rest| rest.strip_suffix(QUOTE));
    match inner {
        Some(inner) => inner.replace("``", "`"),
        None => name.to_string(),
    }
}
