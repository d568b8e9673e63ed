//! Parser state machine and low-level operations.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Token, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics};

pub const DEFAULT_RECURSION_LIMIT: u32 = 512;

/// Coarse position of the parser within the grammar.
///
/// `Recovering` is sticky: only reaching a statement boundary moves the parser back to
/// `AtStatementStart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseState {
    #[default]
    AtStatementStart,
    InExpression,
    InArgumentList,
    InBlock,
    Recovering,
}

#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Trivia tokens are buffered and flushed when starting a new node.
pub(crate) struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    pub(super) last_diagnostic_pos: Option<TextSize>,
    pub(super) delimiter_stack: Vec<OpenDelimiter>,
    pub(super) debug_fuel: std::cell::Cell<u32>,
    state: ParseState,
    recursion_limit: u32,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            last_diagnostic_pos: None,
            delimiter_stack: Vec::with_capacity(8),
            debug_fuel: std::cell::Cell::new(256),
            state: ParseState::AtStatementStart,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub(super) fn finish(mut self) -> (GreenNode, Diagnostics, ParseState) {
        self.drain_trivia();
        self.assert_finished();
        (self.builder.finish(), self.diagnostics, self.state)
    }

    pub(super) fn state(&self) -> ParseState {
        self.state
    }

    /// Moves the state machine. While recovering, only `AtStatementStart` is accepted.
    pub(super) fn transition(&mut self, next: ParseState) {
        if self.state == next {
            return;
        }
        if self.state == ParseState::Recovering && next != ParseState::AtStatementStart {
            return;
        }
        tracing::trace!(from = ?self.state, to = ?next, pos = self.pos, "parser state");
        self.state = next;
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.nth_raw(0)
    }

    fn reset_debug_fuel(&self) {
        self.debug_fuel.set(256);
    }

    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.ensure_progress();
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Eof, |t| t.kind)
    }

    pub(super) fn current_span(&mut self) -> TextRange {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.skip_trivia_to_buffer();
        self.tokens
            .get(self.pos)
            .map_or("", |t| token_text(self.source, t))
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn should_stop(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        self.eof()
    }

    pub(super) fn currently_is(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn currently_is_one_of(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// Index of the `n`-th significant token at or after `from`.
    fn significant_after(&self, from: usize, n: usize) -> Option<usize> {
        self.tokens[from.min(self.tokens.len())..]
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.kind.is_trivia())
            .nth(n)
            .map(|(i, _)| from + i)
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            self.trivia_buffer.push(self.tokens[self.pos]);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        self.skip_trivia_to_buffer();
        assert!(!self.eof(), "bump called at EOF");
        self.reset_debug_fuel();

        self.drain_trivia();

        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn eat_token(&mut self, kind: SyntaxKind) -> bool {
        if self.currently_is(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    // --- Layout predicates ---

    /// True when a line break separates the current token from the previous significant
    /// one. The first significant token of the input is always on a new line.
    pub(super) fn at_new_line(&mut self) -> bool {
        self.skip_trivia_to_buffer();
        for token in self.tokens[..self.pos].iter().rev() {
            if !token.kind.is_trivia() {
                return false;
            }
            if self.is_line_break(token) {
                return true;
            }
        }
        true
    }

    pub(super) fn at_same_line(&mut self) -> bool {
        !self.at_new_line()
    }

    /// The next significant token is `(` on the same line. Never consumes.
    pub(super) fn lparen_follows(&mut self) -> bool {
        self.next_on_same_line_is(SyntaxKind::ParenOpen)
    }

    pub(super) fn not_before_lparen(&mut self) -> bool {
        !self.lparen_follows()
    }

    /// The next significant token is `kind` on the same line. Never consumes.
    pub(super) fn next_on_same_line_is(&mut self, kind: SyntaxKind) -> bool {
        self.skip_trivia_to_buffer();
        let Some(next) = self.significant_after(self.pos, 1) else {
            return false;
        };
        self.tokens[next].kind == kind
            && !self.tokens[self.pos + 1..next]
                .iter()
                .any(|t| self.is_line_break(t))
    }

    fn is_line_break(&self, token: &Token) -> bool {
        match token.kind {
            SyntaxKind::Newline => true,
            SyntaxKind::BlockComment => token_text(self.source, token).contains(['\n', '\r']),
            _ => false,
        }
    }

    // --- Diagnostics ---

    fn should_report(&mut self, pos: TextSize) -> bool {
        if self.last_diagnostic_pos == Some(pos) {
            return false;
        }
        self.last_diagnostic_pos = Some(pos);
        true
    }

    pub(super) fn bump_as_error(&mut self) {
        if !self.should_stop() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        let range = self.current_span();
        self.emit_at(kind, range, None);
    }

    pub(super) fn error_msg(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        let range = self.current_span();
        self.emit_at(kind, range, Some(message.into()));
    }

    pub(super) fn error_at(&mut self, kind: DiagnosticKind, range: TextRange) {
        self.emit_at(kind, range, None);
    }

    pub(super) fn error_at_msg(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        message: impl Into<String>,
    ) {
        self.emit_at(kind, range, Some(message.into()));
    }

    fn emit_at(&mut self, kind: DiagnosticKind, range: TextRange, message: Option<String>) {
        self.transition(ParseState::Recovering);
        if !self.should_report(range.start()) {
            return;
        }
        let builder = self.diagnostics.report(kind, range);
        match message {
            Some(message) => builder.message(message).emit(),
            None => builder.emit(),
        }
    }

    /// Reports the current token, preferring `UnexpectedCharacter` for lexer garbage.
    pub(super) fn error_unexpected(&mut self, kind: DiagnosticKind) {
        if self.currently_is(SyntaxKind::BadCharacter) {
            let text = self.current_text();
            self.error_msg(DiagnosticKind::UnexpectedCharacter, text);
        } else {
            self.error(kind);
        }
    }

    pub(super) fn error_and_bump(&mut self, kind: DiagnosticKind) {
        self.error(kind);
        self.bump_as_error();
    }

    /// Wraps everything up to a token in `recovery` (or EOF) in one `Error` node.
    pub(super) fn error_recover(&mut self, kind: DiagnosticKind, recovery: TokenSet) {
        if self.currently_is_one_of(recovery) || self.should_stop() {
            self.error(kind);
            return;
        }

        self.start_node(SyntaxKind::Error);
        self.error(kind);
        while !self.currently_is_one_of(recovery) && !self.should_stop() {
            self.bump();
        }
        self.finish_node();
    }

    // --- Nesting ---

    /// Returns false past the recursion limit, after moving the rest of the input into
    /// one `Error` node.
    pub(super) fn enter_recursion(&mut self) -> bool {
        if self.depth >= self.recursion_limit {
            tracing::debug!(depth = self.depth, "recursion limit reached");
            self.error_recover(DiagnosticKind::NestingTooDeep, TokenSet::EMPTY);
            // everything left is inside the Error node, unclosed delimiters included
            self.last_diagnostic_pos = Some(self.eof_offset());
            return false;
        }
        self.depth += 1;
        self.reset_debug_fuel();
        true
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.reset_debug_fuel();
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.delimiter_stack.push(OpenDelimiter { kind, span });
    }

    pub(super) fn pop_delimiter(&mut self, kind: SyntaxKind) -> Option<OpenDelimiter> {
        let open = self.delimiter_stack.pop();
        self.assert_popped(open, kind);
        open
    }

    /// Reports `open` as never closed. The range runs from the opener to the failure
    /// point, with a related label on the opener itself.
    pub(super) fn error_unclosed_delimiter(&mut self, open: OpenDelimiter) {
        let (kind, related_msg) = match open.kind {
            SyntaxKind::ParenOpen => (DiagnosticKind::UnclosedParen, "argument list starts here"),
            _ => (DiagnosticKind::UnclosedBrace, "block starts here"),
        };
        let current = self.current_span();
        self.transition(ParseState::Recovering);
        if !self.should_report(current.start()) {
            return;
        }
        let full_range = TextRange::new(open.span.start(), current.end());
        self.diagnostics
            .report(kind, full_range)
            .related_to(related_msg, open.span)
            .emit();
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.pos]
            .iter()
            .rev()
            .find(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }
}
