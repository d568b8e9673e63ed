//! Typed AST wrappers over CST nodes.
//!
//! Each struct wraps a `SyntaxNode` and provides typed accessors.
//! Cast is infallible for correct `SyntaxKind` - validation happens elsewhere.
//! Accessors return `Option` because recovered trees may lack any child.

use super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Root, Root);
ast_node!(ExprRoot, ExprRoot);
ast_node!(Assignment, Assignment);
ast_node!(Block, Block);
ast_node!(BlockBody, BlockBody);
ast_node!(FactoryCall, FactoryCall);
ast_node!(ReceiverCall, ReceiverCall);
ast_node!(ArgumentList, ArgumentList);
ast_node!(Argument, Argument);
ast_node!(QualifiedReference, QualifiedReference);
ast_node!(Property, Property);
ast_node!(Literal, Literal);
ast_node!(Parameter, Parameter);

/// Value-producing expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    FactoryCall(FactoryCall),
    ReceiverCall(ReceiverCall),
    QualifiedReference(QualifiedReference),
    Property(Property),
    Literal(Literal),
    Parameter(Parameter),
}

impl Expr {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::FactoryCall => FactoryCall::cast(node).map(Expr::FactoryCall),
            SyntaxKind::ReceiverCall => ReceiverCall::cast(node).map(Expr::ReceiverCall),
            SyntaxKind::QualifiedReference => {
                QualifiedReference::cast(node).map(Expr::QualifiedReference)
            }
            SyntaxKind::Property => Property::cast(node).map(Expr::Property),
            SyntaxKind::Literal => Literal::cast(node).map(Expr::Literal),
            SyntaxKind::Parameter => Parameter::cast(node).map(Expr::Parameter),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Expr::FactoryCall(n) => n.as_cst(),
            Expr::ReceiverCall(n) => n.as_cst(),
            Expr::QualifiedReference(n) => n.as_cst(),
            Expr::Property(n) => n.as_cst(),
            Expr::Literal(n) => n.as_cst(),
            Expr::Parameter(n) => n.as_cst(),
        }
    }

    /// Assignable expressions: `name` and `a.b.name`.
    pub fn is_lvalue(&self) -> bool {
        matches!(self, Expr::Property(_) | Expr::QualifiedReference(_))
    }
}

/// Top-level or block-level statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Assignment(Assignment),
    Block(Block),
    Expr(Expr),
}

impl Statement {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Assignment => Assignment::cast(node).map(Statement::Assignment),
            SyntaxKind::Block => Block::cast(node).map(Statement::Block),
            _ => Expr::cast(node).map(Statement::Expr),
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Statement::Assignment(n) => n.as_cst(),
            Statement::Block(n) => n.as_cst(),
            Statement::Expr(n) => n.as_cst(),
        }
    }
}

/// `=` replaces a value, `+=` appends to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentKind {
    Assign,
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    MultilineString,
    Integer,
    Long,
    UnsignedInteger,
    UnsignedLong,
    Boolean,
    Null,
}

impl LiteralKind {
    pub fn from_token(kind: SyntaxKind) -> Option<Self> {
        Some(match kind {
            SyntaxKind::StringLiteral => Self::String,
            SyntaxKind::MultilineStringLiteral => Self::MultilineString,
            SyntaxKind::IntegerLiteral => Self::Integer,
            SyntaxKind::LongLiteral => Self::Long,
            SyntaxKind::UnsignedInteger => Self::UnsignedInteger,
            SyntaxKind::UnsignedLong => Self::UnsignedLong,
            SyntaxKind::KwTrue | SyntaxKind::KwFalse => Self::Boolean,
            SyntaxKind::KwNull => Self::Null,
            _ => return None,
        })
    }
}

fn first_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
}

fn first_significant_token(node: &SyntaxNode) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| !t.kind().is_trivia())
}

impl Root {
    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.0.children().filter_map(Statement::cast)
    }
}

impl ExprRoot {
    /// The single statement: an assignment or a bare expression.
    pub fn body(&self) -> Option<Statement> {
        self.0.children().find_map(Statement::cast)
    }

    pub fn expr(&self) -> Option<Expr> {
        match self.body()? {
            Statement::Expr(expr) => Some(expr),
            _ => None,
        }
    }

    pub fn assignment(&self) -> Option<Assignment> {
        match self.body()? {
            Statement::Assignment(assignment) => Some(assignment),
            _ => None,
        }
    }
}

impl Assignment {
    pub fn target(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn value(&self) -> Option<Expr> {
        self.0.children().filter_map(Expr::cast).nth(1)
    }

    pub fn operator(&self) -> Option<SyntaxToken> {
        self.0
            .children_with_tokens()
            .filter_map(|it| it.into_token())
            .find(|t| matches!(t.kind(), SyntaxKind::Equals | SyntaxKind::PlusEquals))
    }

    pub fn kind(&self) -> Option<AssignmentKind> {
        self.operator().map(|op| match op.kind() {
            SyntaxKind::PlusEquals => AssignmentKind::Append,
            _ => AssignmentKind::Assign,
        })
    }
}

impl Block {
    /// Block name, either the bare head identifier or the factory's name.
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Identifier)
            .or_else(|| self.factory().and_then(|f| f.name()))
    }

    /// Head expression of a factory block `name(args) { ... }` or an invalid head.
    pub fn head(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn factory(&self) -> Option<FactoryCall> {
        match self.head()? {
            Expr::FactoryCall(call) => Some(call),
            _ => None,
        }
    }

    pub fn body(&self) -> Option<BlockBody> {
        self.0.children().find_map(BlockBody::cast)
    }

    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.body()
            .into_iter()
            .flat_map(|body| body.0.children().filter_map(Statement::cast))
    }
}

impl BlockBody {
    pub fn statements(&self) -> impl Iterator<Item = Statement> + '_ {
        self.0.children().filter_map(Statement::cast)
    }

    pub fn is_closed(&self) -> bool {
        first_token(&self.0, SyntaxKind::BraceClose).is_some()
    }
}

impl FactoryCall {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Identifier)
    }

    pub fn arguments(&self) -> Option<ArgumentList> {
        self.0.children().find_map(ArgumentList::cast)
    }
}

impl ReceiverCall {
    pub fn receiver(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Identifier)
    }

    pub fn arguments(&self) -> Option<ArgumentList> {
        self.0.children().find_map(ArgumentList::cast)
    }
}

impl ArgumentList {
    pub fn arguments(&self) -> impl Iterator<Item = Argument> + '_ {
        self.0.children().filter_map(Argument::cast)
    }

    pub fn values(&self) -> impl Iterator<Item = Expr> + '_ {
        self.arguments().filter_map(|arg| arg.value())
    }
}

impl Argument {
    pub fn value(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }
}

impl QualifiedReference {
    pub fn receiver(&self) -> Option<Expr> {
        self.0.children().find_map(Expr::cast)
    }

    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Identifier)
    }

    /// Dotted path from the innermost property outwards, names unquoted.
    ///
    /// `None` if any segment is not a plain name (e.g. `f(x).y`) or is missing.
    pub fn path(&self) -> Option<Vec<String>> {
        let mut segments = match self.receiver()? {
            Expr::Property(property) => vec![property.text()?],
            Expr::QualifiedReference(inner) => inner.path()?,
            _ => return None,
        };
        segments.push(crate::validity::unquote(self.name()?.text()));
        Some(segments)
    }
}

impl Property {
    pub fn name(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::Identifier)
    }

    /// Name with identifier quoting removed.
    pub fn text(&self) -> Option<String> {
        self.name().map(|t| crate::validity::unquote(t.text()))
    }
}

impl Literal {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_significant_token(&self.0)
    }

    pub fn kind(&self) -> Option<LiteralKind> {
        self.token().and_then(|t| LiteralKind::from_token(t.kind()))
    }
}

impl Parameter {
    pub fn token(&self) -> Option<SyntaxToken> {
        first_token(&self.0, SyntaxKind::ParamName)
    }

    /// `name` for `:name`, `None` for positional `?` and `?N`.
    pub fn name(&self) -> Option<String> {
        let token = self.token()?;
        token.text().strip_prefix(':').map(str::to_string)
    }
}
