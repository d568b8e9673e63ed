//! Invariant checks excluded from coverage reports.
//!
//! A failure here is a bug in the grammar, never a property of the input.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::{OpenDelimiter, Parser};
use super::cst::SyntaxKind;

impl Parser<'_> {
    /// Lookahead budget between two consumed tokens. A loop that peeks without bumping
    /// runs it dry.
    #[inline]
    pub(super) fn ensure_progress(&self) {
        let fuel = self.debug_fuel.get();
        assert!(
            fuel != 0,
            "parser is stuck at token {}: too many lookaheads without a bump",
            self.pos
        );
        self.debug_fuel.set(fuel - 1);
    }

    #[inline]
    pub(super) fn assert_current(&mut self, expected: SyntaxKind) {
        let found = self.current();
        assert_eq!(
            found, expected,
            "production entered at {found:?}, callers must check for {expected:?} first"
        );
    }

    /// Argument lists pop the `(` they pushed, block bodies the `{`.
    pub(super) fn assert_popped(&self, open: Option<OpenDelimiter>, expected: SyntaxKind) {
        let popped = open.map(|open| open.kind);
        assert_eq!(
            popped,
            Some(expected),
            "delimiter stack out of sync, still open: {:?}",
            self.delimiter_stack
        );
    }

    /// Once the root node is closed, every opener has been popped, every nesting level
    /// left and every token consumed.
    pub(super) fn assert_finished(&self) {
        assert!(
            self.delimiter_stack.is_empty(),
            "delimiters left open: {:?}",
            self.delimiter_stack
        );
        assert_eq!(self.depth, 0, "nesting depth not restored");
        assert_eq!(
            self.pos,
            self.tokens.len(),
            "tokens left after the root was closed"
        );
    }
}
