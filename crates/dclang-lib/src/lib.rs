//! dclang: lexer and error-tolerant parser for a small declarative configuration language.
//!
//! # Example
//!
//! ```
//! use dclang_lib::parser;
//!
//! let source = r#"
//!     android {
//!         namespace = "org.example"
//!         dependencies += listOf(implementation("lib"))
//!     }
//! "#;
//!
//! let parse = parser::parse(source);
//! assert!(parse.is_valid());
//! eprintln!("{}", parse.diagnostics().render(source));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod dump;
pub mod parser;
pub mod spacing;
pub mod validity;


pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, ParseError};
pub use dump::CstPrinter;
pub use parser::{
    LexerMode, Parse, ParseOptions, ParseState, SyntaxKind, SyntaxNode, Token, lex,
    parse, parse_expression_root, tokenize,
};
pub use spacing::{SpacingConstraint, spacing_rule, spacing_rules};
pub use validity::{get_valid_name, is_valid_expression, is_valid_query, needs_quoting, unquote};

/// Errors surfaced to callers that want `?` instead of inspecting diagnostics.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("parsing failed with {} syntax errors", .0.len())]
    SyntaxErrors(Diagnostics),
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
