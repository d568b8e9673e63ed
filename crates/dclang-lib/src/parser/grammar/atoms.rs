use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::LITERALS;

impl Parser<'_> {
    /// `Literal | Parameter | FactoryCall | Property`
    pub(crate) fn parse_primary(&mut self) -> Option<SyntaxKind> {
        let kind = match self.current() {
            SyntaxKind::Identifier if self.not_before_lparen() => SyntaxKind::Property,
            SyntaxKind::Identifier => {
                self.parse_factory_call();
                return Some(SyntaxKind::FactoryCall);
            }
            SyntaxKind::ParamName => SyntaxKind::Parameter,
            kind if LITERALS.contains(kind) => SyntaxKind::Literal,
            _ => return None,
        };

        self.start_node(kind);
        self.bump();
        self.finish_node();
        Some(kind)
    }

    /// `name(args)` with `(` on the same line as the name.
    fn parse_factory_call(&mut self) {
        self.start_node(SyntaxKind::FactoryCall);
        self.bump(); // name
        self.parse_argument_list();
        self.finish_node();
    }
}
