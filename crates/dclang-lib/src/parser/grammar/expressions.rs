use rowan::{Checkpoint, TextRange, TextSize};

use crate::diagnostics::DiagnosticKind;
use crate::parser::Parser;
use crate::parser::core::ParseState;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::{ARGUMENT_LIST_RECOVERY, EXPR_FIRST};

/// What statement parsing needs to know about a parsed expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedExpr {
    /// Outermost node built.
    pub(crate) kind: SyntaxKind,
    /// `a` or `a.b.c`: a property followed only by plain members.
    pub(crate) is_path: bool,
}

impl Parser<'_> {
    /// `Primary ('.' Identifier ArgumentList?)*`
    ///
    /// Returns `None` when nothing was parsed (no expression start, or the nesting limit
    /// swallowed the rest of the input).
    pub(crate) fn parse_expr(&mut self) -> Option<ParsedExpr> {
        if !self.enter_recursion() {
            return None;
        }
        self.transition(ParseState::InExpression);

        let start = self.current_span().start();
        let checkpoint = self.checkpoint();
        let parsed = match self.parse_primary() {
            Some(primary) => {
                if self.currently_is(SyntaxKind::Dot) {
                    self.check_receiver(primary, start);
                }
                let mut expr = ParsedExpr {
                    kind: primary,
                    is_path: primary == SyntaxKind::Property,
                };
                while self.currently_is(SyntaxKind::Dot) {
                    expr.kind = self.parse_member(checkpoint);
                    expr.is_path &= expr.kind == SyntaxKind::QualifiedReference;
                }
                Some(expr)
            }
            None => None,
        };

        self.exit_recursion();
        parsed
    }

    /// Literals and parameters have no members. Reported once, over the receiver; the
    /// chain is still built.
    fn check_receiver(&mut self, receiver: SyntaxKind, start: TextSize) {
        let what = match receiver {
            SyntaxKind::Literal => "a literal",
            SyntaxKind::Parameter => "a parameter",
            _ => return,
        };
        let end = self.last_non_trivia_end().unwrap_or(start);
        self.error_at_msg(
            DiagnosticKind::InvalidMemberAccess,
            TextRange::new(start, end),
            what,
        );
    }

    /// Dotted member after a receiver: `.name` or `.name(args)`. Left-associative, so
    /// the node wraps everything since `checkpoint`.
    fn parse_member(&mut self, checkpoint: Checkpoint) -> SyntaxKind {
        self.assert_current(SyntaxKind::Dot);
        self.bump();

        if !self.eat_token(SyntaxKind::Identifier) {
            self.error(DiagnosticKind::ExpectedIdentifier);
            self.start_node_at(checkpoint, SyntaxKind::QualifiedReference);
            self.finish_node();
            return SyntaxKind::QualifiedReference;
        }

        let kind = if self.currently_is(SyntaxKind::ParenOpen) && self.at_same_line() {
            self.start_node_at(checkpoint, SyntaxKind::ReceiverCall);
            self.parse_argument_list();
            SyntaxKind::ReceiverCall
        } else {
            self.start_node_at(checkpoint, SyntaxKind::QualifiedReference);
            SyntaxKind::QualifiedReference
        };
        self.finish_node();
        kind
    }

    /// Parses an expression, or reports one missing. Closers, separators and tokens on a
    /// new line are left for the caller.
    pub(crate) fn parse_expr_or_error(&mut self) -> bool {
        if self.currently_is_one_of(EXPR_FIRST) {
            return self.parse_expr().is_some();
        }

        if self.at_stray_token() {
            self.error_unexpected(DiagnosticKind::ExpectedExpression);
            self.bump_as_error();
        } else {
            self.error(DiagnosticKind::ExpectedExpression);
        }
        false
    }

    /// A token on this line that cannot start an expression and is not a closer or
    /// separator some caller waits for.
    fn at_stray_token(&mut self) -> bool {
        let waited_for = matches!(
            self.current(),
            SyntaxKind::ParenClose
                | SyntaxKind::BraceOpen
                | SyntaxKind::BraceClose
                | SyntaxKind::Semicolon
                | SyntaxKind::Comma
        );
        !waited_for
            && !self.currently_is_one_of(EXPR_FIRST)
            && !self.should_stop()
            && !self.at_new_line()
    }

    /// Completes `lhs = rhs` or `lhs += rhs` once the left side is built.
    pub(crate) fn parse_assignment_tail(
        &mut self,
        checkpoint: Checkpoint,
        lhs: ParsedExpr,
        lhs_start: TextSize,
    ) {
        if !lhs.is_path {
            let end = self.last_non_trivia_end().unwrap_or(lhs_start);
            let what = match lhs.kind {
                SyntaxKind::FactoryCall | SyntaxKind::ReceiverCall => "a call",
                SyntaxKind::Literal => "a literal",
                SyntaxKind::Parameter => "a parameter",
                SyntaxKind::QualifiedReference => "a member of a call",
                _ => "this expression",
            };
            self.error_at_msg(
                DiagnosticKind::InvalidAssignmentTarget,
                TextRange::new(lhs_start, end),
                what,
            );
        }

        self.start_node_at(checkpoint, SyntaxKind::Assignment);
        self.bump(); // `=` or `+=`
        if self.at_stray_token() {
            // `a = = 1`: the rest of the statement is one error
            self.error_unexpected(DiagnosticKind::ExpectedExpression);
            self.recover_statement();
        } else {
            self.parse_expr_or_error();
        }
        self.finish_node();
    }

    /// `( args )`. A trailing comma is reported but the list is still closed normally.
    pub(crate) fn parse_argument_list(&mut self) {
        self.assert_current(SyntaxKind::ParenOpen);
        self.start_node(SyntaxKind::ArgumentList);
        self.push_delimiter(SyntaxKind::ParenOpen);
        self.bump();
        self.transition(ParseState::InArgumentList);

        self.parse_arguments();

        let open = self.pop_delimiter(SyntaxKind::ParenOpen);
        if !self.eat_token(SyntaxKind::ParenClose)
            && let Some(open) = open
        {
            self.error_unclosed_delimiter(open);
        }
        self.finish_node();
        self.transition(ParseState::InExpression);
    }

    fn parse_arguments(&mut self) {
        loop {
            if self.should_stop()
                || self.currently_is(SyntaxKind::ParenClose)
                || self.currently_is_one_of(ARGUMENT_LIST_RECOVERY)
            {
                return;
            }

            if self.currently_is(SyntaxKind::Comma) {
                self.error(DiagnosticKind::EmptyArgument);
                self.bump();
                continue;
            }

            self.start_node(SyntaxKind::Argument);
            self.parse_expr_or_error();
            self.finish_node();
            self.transition(ParseState::InArgumentList);

            match self.current() {
                SyntaxKind::Comma => {
                    let comma = self.current_span();
                    self.bump();
                    self.transition(ParseState::InExpression);
                    if self.currently_is(SyntaxKind::ParenClose) {
                        self.error_at(DiagnosticKind::TrailingComma, comma);
                    }
                }
                SyntaxKind::ParenClose => return,
                kind if ARGUMENT_LIST_RECOVERY.contains(kind) => return,
                SyntaxKind::Eof => return,
                kind if EXPR_FIRST.contains(kind) => {
                    self.error(DiagnosticKind::ExpectedCommaOrParen);
                }
                _ => {
                    self.error_unexpected(DiagnosticKind::ExpectedCommaOrParen);
                    self.bump_as_error();
                }
            }
        }
    }
}
