//! Deterministic text dumps of parse trees, used by tests and the CLI.

use std::fmt::Write;

use rowan::NodeOrToken;

use crate::parser::{Expr, Parse, Statement, SyntaxNode, SyntaxToken};

/// Builder for dumping a parse either as the raw CST or as a typed outline.
pub struct CstPrinter<'p> {
    parse: &'p Parse,
    raw: bool,
    trivia: bool,
    spans: bool,
}

impl<'p> CstPrinter<'p> {
    pub fn new(parse: &'p Parse) -> Self {
        Self {
            parse,
            raw: false,
            trivia: false,
            spans: false,
        }
    }

    /// Dump every node and token instead of the typed outline.
    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    /// Include whitespace and comment tokens (raw mode only).
    pub fn with_trivia(mut self, value: bool) -> Self {
        self.trivia = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let root = self.parse.syntax();
        if self.raw {
            return self.format_cst(&root, 0, w);
        }

        let span = self.span_str(root.text_range());
        writeln!(w, "{:?}{}", root.kind(), span)?;
        for child in root.children() {
            if let Some(stmt) = Statement::cast(child) {
                self.format_statement(&stmt, 1, w)?;
            }
        }
        Ok(())
    }

    fn format_cst(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());

        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_cst(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    if self.trivia || !t.kind().is_trivia() {
                        let child_prefix = "  ".repeat(indent + 1);
                        let child_span = self.span_str(t.text_range());
                        writeln!(
                            w,
                            "{}{:?}{} {:?}",
                            child_prefix,
                            t.kind(),
                            child_span,
                            t.text()
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    fn format_statement(
        &self,
        stmt: &Statement,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        match stmt {
            Statement::Expr(expr) => self.format_expr(expr, indent, w),
            Statement::Assignment(assignment) => {
                let op = assignment
                    .operator()
                    .map(|t| t.text().to_string())
                    .unwrap_or_default();
                self.line(w, indent, assignment.as_cst(), &op)?;
                for expr in assignment.as_cst().children().filter_map(Expr::cast) {
                    self.format_expr(&expr, indent + 1, w)?;
                }
                Ok(())
            }
            Statement::Block(block) => {
                let name = block
                    .name()
                    .map(|t| t.text().to_string())
                    .unwrap_or_default();
                self.line(w, indent, block.as_cst(), &name)?;
                if let Some(args) = block.factory().and_then(|f| f.arguments()) {
                    for arg in args.values() {
                        self.format_expr(&arg, indent + 1, w)?;
                    }
                }
                for stmt in block.statements() {
                    self.format_statement(&stmt, indent + 1, w)?;
                }
                Ok(())
            }
        }
    }

    fn format_expr(&self, expr: &Expr, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let token_text = |t: Option<SyntaxToken>| {
            t.map(|t| t.text().to_string()).unwrap_or_default()
        };

        match expr {
            Expr::Property(p) => self.line(w, indent, p.as_cst(), &token_text(p.name())),
            Expr::Literal(l) => self.line(w, indent, l.as_cst(), &token_text(l.token())),
            Expr::Parameter(p) => self.line(w, indent, p.as_cst(), &token_text(p.token())),
            Expr::QualifiedReference(q) => {
                self.line(w, indent, q.as_cst(), &token_text(q.name()))?;
                if let Some(receiver) = q.receiver() {
                    self.format_expr(&receiver, indent + 1, w)?;
                }
                Ok(())
            }
            Expr::FactoryCall(call) => {
                self.line(w, indent, call.as_cst(), &token_text(call.name()))?;
                if let Some(args) = call.arguments() {
                    for arg in args.values() {
                        self.format_expr(&arg, indent + 1, w)?;
                    }
                }
                Ok(())
            }
            Expr::ReceiverCall(call) => {
                self.line(w, indent, call.as_cst(), &token_text(call.name()))?;
                if let Some(receiver) = call.receiver() {
                    self.format_expr(&receiver, indent + 1, w)?;
                }
                if let Some(args) = call.arguments() {
                    for arg in args.values() {
                        self.format_expr(&arg, indent + 1, w)?;
                    }
                }
                Ok(())
            }
        }
    }

    fn line(
        &self,
        w: &mut impl Write,
        indent: usize,
        node: &SyntaxNode,
        detail: &str,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());
        if detail.is_empty() {
            writeln!(w, "{}{:?}{}", prefix, node.kind(), span)
        } else {
            writeln!(w, "{}{:?}{} {}", prefix, node.kind(), span, detail)
        }
    }

    fn span_str(&self, range: rowan::TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}

impl Parse {
    pub fn printer(&self) -> CstPrinter<'_> {
        CstPrinter::new(self)
    }

    /// Raw CST without trivia.
    pub fn dump_cst(&self) -> String {
        self.printer().raw(true).dump()
    }

    pub fn dump_ast(&self) -> String {
        self.printer().dump()
    }
}

