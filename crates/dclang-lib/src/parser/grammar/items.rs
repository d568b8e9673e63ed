use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::core::ParseState;
use crate::parser::cst::token_sets::{ASSIGNMENT_OPERATORS, EXPR_FIRST, STATEMENT_FIRST};
use crate::parser::cst::{SyntaxKind, TokenSet};

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(SyntaxKind::Root);
        self.parse_statements(false);
        self.eat_trivia();
        self.finish_node();
        self.settle_terminal_state();
    }

    /// Embedded entry point: one expression, optionally assigned, and nothing else.
    pub fn parse_expression_root(&mut self) {
        self.start_node(SyntaxKind::ExprRoot);

        if self.currently_is_one_of(EXPR_FIRST) {
            let start = self.current_span().start();
            let checkpoint = self.checkpoint();
            if let Some(lhs) = self.parse_expr()
                && self.currently_is_one_of(ASSIGNMENT_OPERATORS)
                && self.at_same_line()
            {
                self.parse_assignment_tail(checkpoint, lhs, start);
            }
        } else {
            self.error_unexpected(DiagnosticKind::ExpectedExpression);
        }

        if !self.should_stop() {
            tracing::trace!(pos = self.pos, "trailing input after expression root");
            self.error_recover(DiagnosticKind::TrailingInput, TokenSet::EMPTY);
        }

        self.eat_trivia();
        self.finish_node();
        self.settle_terminal_state();
    }

    fn settle_terminal_state(&mut self) {
        if self.state() != ParseState::Recovering {
            self.transition(ParseState::AtStatementStart);
        }
    }

    /// Statement list of a file (`in_block == false`) or of a block body, which stops
    /// before its closing `}`.
    fn parse_statements(&mut self, in_block: bool) {
        let mut needs_separator = false;

        while !self.should_stop() {
            match self.current() {
                SyntaxKind::Semicolon => {
                    self.bump();
                    self.transition(ParseState::AtStatementStart);
                    needs_separator = false;
                    continue;
                }
                SyntaxKind::BraceClose if in_block => break,
                SyntaxKind::BraceClose | SyntaxKind::ParenClose => {
                    self.error_and_bump(DiagnosticKind::UnmatchedDelimiter);
                    needs_separator = false;
                    continue;
                }
                _ => {}
            }

            if needs_separator && self.at_same_line() {
                self.error(DiagnosticKind::ExpectedSeparator);
                self.recover_statement();
                needs_separator = false;
                continue;
            }

            self.transition(ParseState::AtStatementStart);
            if self.currently_is_one_of(STATEMENT_FIRST) {
                self.parse_statement();
                needs_separator = true;
            } else {
                self.error_unexpected(DiagnosticKind::ExpectedStatement);
                self.recover_statement();
                needs_separator = false;
            }
        }
    }

    /// Skips to the next statement boundary: `;`, a closing `}`, or a token on a new line,
    /// all at bracket depth zero. The first token is always consumed.
    pub(super) fn recover_statement(&mut self) {
        if self.should_stop() {
            return;
        }
        self.transition(ParseState::Recovering);
        let start = self.pos;

        self.start_node(SyntaxKind::Error);
        let mut depth = 0u32;
        loop {
            match self.current() {
                SyntaxKind::ParenOpen | SyntaxKind::BraceOpen => depth += 1,
                SyntaxKind::ParenClose | SyntaxKind::BraceClose => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.bump();

            if self.should_stop() {
                break;
            }
            if depth == 0
                && (self.currently_is(SyntaxKind::Semicolon)
                    || self.currently_is(SyntaxKind::BraceClose)
                    || self.at_new_line())
            {
                break;
            }
        }
        self.finish_node();

        tracing::trace!(skipped = self.pos - start, "statement recovery");
    }

    /// Block, assignment or bare expression.
    fn parse_statement(&mut self) {
        // LL(2): `name {` is a plain block
        if self.currently_is(SyntaxKind::Identifier)
            && self.next_on_same_line_is(SyntaxKind::BraceOpen)
        {
            self.start_node(SyntaxKind::Block);
            self.bump();
            self.parse_block_body();
            self.finish_node();
            return;
        }

        let start = self.current_span().start();
        let checkpoint = self.checkpoint();
        let Some(expr) = self.parse_expr() else {
            return;
        };

        if self.currently_is_one_of(ASSIGNMENT_OPERATORS) && self.at_same_line() {
            self.parse_assignment_tail(checkpoint, expr, start);
        } else if self.currently_is(SyntaxKind::BraceOpen) && self.at_same_line() {
            if expr.kind != SyntaxKind::FactoryCall {
                let end = self.last_non_trivia_end().unwrap_or(start);
                self.error_at_msg(
                    DiagnosticKind::InvalidBlockHead,
                    rowan::TextRange::new(start, end),
                    "a block is named by an identifier or a call",
                );
            }
            self.start_node_at(checkpoint, SyntaxKind::Block);
            self.parse_block_body();
            self.finish_node();
        }
    }

    /// `{ statements }`
    fn parse_block_body(&mut self) {
        self.assert_current(SyntaxKind::BraceOpen);
        self.start_node(SyntaxKind::BlockBody);

        if self.enter_recursion() {
            self.push_delimiter(SyntaxKind::BraceOpen);
            self.bump();
            self.transition(ParseState::InBlock);

            self.parse_statements(true);

            let open = self.pop_delimiter(SyntaxKind::BraceOpen);
            if !self.eat_token(SyntaxKind::BraceClose)
                && let Some(open) = open
            {
                self.error_unclosed_delimiter(open);
            }
            self.exit_recursion();
        }

        self.finish_node();
    }
}
