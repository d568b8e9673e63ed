//! Spacing policy for an external pretty-printer.
//!
//! Rules are declared in priority order with a small builder and expanded once into a
//! table keyed by `(left, right)` kinds of adjacent CST elements. The first rule that
//! covers a pair wins. Pairs no rule covers get [`SpacingConstraint::NONE`], which a
//! formatter must read as "keep the original spacing".

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::parser::SyntaxKind;

/// Constraint on the whitespace between two adjacent elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpacingConstraint {
    pub min_spaces: u32,
    pub max_spaces: u32,
    pub min_line_breaks: u32,
    /// Existing line breaks may stay even when the rule asks for spaces.
    pub keep_line_breaks: bool,
}

impl SpacingConstraint {
    /// No constraint: preserve whatever is there.
    pub const NONE: SpacingConstraint = SpacingConstraint {
        min_spaces: 0,
        max_spaces: u32::MAX,
        min_line_breaks: 0,
        keep_line_breaks: true,
    };

    /// Exactly `n` spaces on one line.
    pub const fn spaces(n: u32) -> Self {
        SpacingConstraint {
            min_spaces: n,
            max_spaces: n,
            min_line_breaks: 0,
            keep_line_breaks: false,
        }
    }

    /// Exactly `n` spaces, but a line break already there is kept.
    pub const fn spaces_keeping_breaks(n: u32) -> Self {
        SpacingConstraint {
            keep_line_breaks: true,
            ..Self::spaces(n)
        }
    }

    /// At least `n` line breaks.
    pub const fn line_breaks(n: u32) -> Self {
        SpacingConstraint {
            min_spaces: 0,
            max_spaces: 0,
            min_line_breaks: n,
            keep_line_breaks: true,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl std::fmt::Display for SpacingConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            return f.write_str("preserve");
        }
        write!(f, "spaces {}..=", self.min_spaces)?;
        if self.max_spaces == u32::MAX {
            f.write_str("any")?;
        } else {
            write!(f, "{}", self.max_spaces)?;
        }
        write!(
            f,
            ", line breaks >= {}, keep line breaks: {}",
            self.min_line_breaks, self.keep_line_breaks
        )
    }
}

/// Kinds that can appear as adjacent siblings in a tree. Trivia is what the formatter
/// rewrites, so it never keys a rule.
fn significant_kinds() -> impl Iterator<Item = SyntaxKind> {
    SyntaxKind::all().filter(|k| !k.is_trivia() && *k != SyntaxKind::Eof)
}

const STATEMENT_KINDS: &[SyntaxKind] = &[
    SyntaxKind::Assignment,
    SyntaxKind::Block,
    SyntaxKind::FactoryCall,
    SyntaxKind::ReceiverCall,
    SyntaxKind::QualifiedReference,
    SyntaxKind::Property,
    SyntaxKind::Literal,
    SyntaxKind::Parameter,
];

/// Ordered rule builder. Earlier rules shadow later ones on overlapping pairs.
#[derive(Default)]
struct SpacingBuilder {
    table: IndexMap<(SyntaxKind, SyntaxKind), SpacingConstraint>,
}

struct RuleTarget<'b> {
    builder: &'b mut SpacingBuilder,
    pairs: Vec<(SyntaxKind, SyntaxKind)>,
}

impl SpacingBuilder {
    fn between(&mut self, left: SyntaxKind, right: SyntaxKind) -> RuleTarget<'_> {
        RuleTarget {
            builder: self,
            pairs: vec![(left, right)],
        }
    }

    fn before(&mut self, right: SyntaxKind) -> RuleTarget<'_> {
        let pairs = significant_kinds().map(|left| (left, right)).collect();
        RuleTarget {
            builder: self,
            pairs,
        }
    }

    fn after(&mut self, left: SyntaxKind) -> RuleTarget<'_> {
        let pairs = significant_kinds().map(|right| (left, right)).collect();
        RuleTarget {
            builder: self,
            pairs,
        }
    }

    fn around(&mut self, kind: SyntaxKind) -> RuleTarget<'_> {
        let pairs = significant_kinds()
            .flat_map(|other| [(other, kind), (kind, other)])
            .collect();
        RuleTarget {
            builder: self,
            pairs,
        }
    }

    fn between_any(&mut self, kinds: &[SyntaxKind]) -> RuleTarget<'_> {
        let pairs = kinds
            .iter()
            .flat_map(|&left| kinds.iter().map(move |&right| (left, right)))
            .collect();
        RuleTarget {
            builder: self,
            pairs,
        }
    }

    fn build(self) -> IndexMap<(SyntaxKind, SyntaxKind), SpacingConstraint> {
        self.table
    }
}

impl RuleTarget<'_> {
    fn apply(self, constraint: SpacingConstraint) {
        for pair in self.pairs {
            self.builder.table.entry(pair).or_insert(constraint);
        }
    }

    fn spaces(self, n: u32) {
        self.apply(SpacingConstraint::spaces(n));
    }

    fn none(self) {
        self.spaces(0);
    }

    fn line_breaks(self, n: u32) {
        self.apply(SpacingConstraint::line_breaks(n));
    }
}

fn build_rules() -> IndexMap<(SyntaxKind, SyntaxKind), SpacingConstraint> {
    use SyntaxKind::*;

    let mut b = SpacingBuilder::default();

    // empty bodies and argument lists
    b.between(BraceOpen, BraceClose).none();
    b.between(ParenOpen, ParenClose).none();

    // `name(args)`
    b.between(Identifier, ArgumentList).none();
    b.after(ParenOpen).none();
    b.before(ParenClose).none();

    // `name {` and `name(args) {`
    b.between(Identifier, BlockBody).spaces(1);
    b.between(FactoryCall, BlockBody).spaces(1);
    b.after(BraceOpen).line_breaks(1);
    b.before(BraceClose).line_breaks(1);

    b.around(Equals).spaces(1);
    b.around(PlusEquals).spaces(1);

    b.before(Comma).none();
    b.after(Comma).apply(SpacingConstraint::spaces_keeping_breaks(1));

    // chains may be split before the dot
    b.before(Dot).apply(SpacingConstraint::spaces_keeping_breaks(0));
    b.after(Dot).none();

    b.before(Semicolon).none();
    b.after(Semicolon).spaces(1);

    b.between_any(STATEMENT_KINDS).line_breaks(1);

    b.build()
}

static RULES: LazyLock<IndexMap<(SyntaxKind, SyntaxKind), SpacingConstraint>> =
    LazyLock::new(build_rules);

/// Spacing between adjacent elements of kinds `left` and `right`.
pub fn spacing_rule(left: SyntaxKind, right: SyntaxKind) -> SpacingConstraint {
    RULES
        .get(&(left, right))
        .copied()
        .unwrap_or(SpacingConstraint::NONE)
}

/// Every `(left, right)` pair with an explicit rule, in declaration order.
pub fn spacing_rules() -> impl Iterator<Item = ((SyntaxKind, SyntaxKind), SpacingConstraint)> {
    RULES.iter().map(|(pair, constraint)| (*pair, *constraint))
}
