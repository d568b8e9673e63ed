//! Parser infrastructure for the configuration language.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//! Key design decisions borrowed from rust-analyzer, rnix-parser, and taplo:
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached as leading trivia
//! - Checkpoint-based wrapping: retroactively wrap nodes for `.` chains and assignments
//! - Layout predicates: line breaks in the buffered trivia end statements
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree covering the whole input.
//!
//! 1. Unknown tokens get wrapped in `SyntaxKind::Error` nodes and consumed
//! 2. Missing expected tokens emit a diagnostic but don't consume (parent may handle)
//! 3. A broken statement is skipped up to `;`, a closing `}` or the next line
//! 4. On recursion limit, remaining input goes into single Error node

pub mod ast;
pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};

pub use ast::{
    Argument, ArgumentList, Assignment, AssignmentKind, Block, BlockBody, Expr, ExprRoot,
    FactoryCall, Literal, LiteralKind, Parameter, Property, QualifiedReference, ReceiverCall,
    Root, Statement,
};

pub use core::{DEFAULT_RECURSION_LIMIT, ParseState};
pub(crate) use core::Parser;
pub use lexer::{Lexer, LexerMode, Token, lex, tokenize};

use crate::diagnostics::{Diagnostics, ParseError};

/// Parse result containing the green tree and the syntax errors.
///
/// The tree is always complete. Error nodes in the tree represent recovery points.
#[derive(Debug, Clone)]
pub struct Parse {
    cst: rowan::GreenNode,
    diagnostics: Diagnostics,
    terminal_state: ParseState,
}

impl Parse {
    pub fn as_cst(&self) -> &rowan::GreenNode {
        &self.cst
    }

    /// Creates a typed view over the immutable green tree.
    /// This is cheap: SyntaxNode is a thin wrapper with parent pointers.
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.cst.clone())
    }

    /// File root. `None` for trees built by the expression entry point.
    pub fn root(&self) -> Option<Root> {
        Root::cast(self.syntax())
    }

    /// Expression root. `None` for trees built by the file entry point.
    pub fn expr_root(&self) -> Option<ExprRoot> {
        ExprRoot::cast(self.syntax())
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn errors(&self) -> &[ParseError] {
        self.diagnostics.as_slice()
    }

    /// No syntax errors and the root spans the whole input.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// State the parser was in when it reached the end of input.
    pub fn terminal_state(&self) -> ParseState {
        self.terminal_state
    }

    pub fn into_result(self) -> crate::Result<SyntaxNode> {
        if self.diagnostics.has_errors() {
            return Err(crate::Error::SyntaxErrors(self.diagnostics));
        }
        Ok(SyntaxNode::new_root(self.cst))
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    lexer_mode: LexerMode,
    recursion_limit: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            lexer_mode: LexerMode::Default,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexer_mode(mut self, mode: LexerMode) -> Self {
        self.lexer_mode = mode;
        self
    }

    /// Maximum nesting of expressions and blocks. Deeper input is reported, not parsed.
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn lexer_mode(&self) -> LexerMode {
        self.lexer_mode
    }

    pub fn recursion_limit(&self) -> u32 {
        self.recursion_limit
    }

    /// Parses a whole file.
    pub fn parse(&self, source: &str) -> Parse {
        self.run(source, Entry::File)
    }

    /// Parses a standalone expression, optionally assigned: `a.b`, `id = :param`.
    pub fn parse_expression_root(&self, source: &str) -> Parse {
        self.run(source, Entry::Expression)
    }

    fn run(&self, source: &str, entry: Entry) -> Parse {
        tracing::debug!(len = source.len(), ?entry, mode = ?self.lexer_mode, "parse");

        let tokens = lexer::lex_with_mode(source, self.lexer_mode);
        let mut parser = Parser::new(source, tokens).with_recursion_limit(self.recursion_limit);
        match entry {
            Entry::File => parser.parse_root(),
            Entry::Expression => parser.parse_expression_root(),
        }
        let (cst, diagnostics, terminal_state) = parser.finish();

        tracing::debug!(
            errors = diagnostics.len(),
            ?terminal_state,
            "parse finished"
        );
        Parse {
            cst,
            diagnostics,
            terminal_state,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Entry {
    File,
    Expression,
}

/// Main entry point: parse a whole file with default options.
pub fn parse(source: &str) -> Parse {
    ParseOptions::default().parse(source)
}

/// Embedded entry point: parse one expression with default options.
pub fn parse_expression_root(source: &str) -> Parse {
    ParseOptions::default().parse_expression_root(source)
}
