//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{Annotation, AnnotationKind, Level, Renderer, Snippet};
use rowan::TextRange;

use super::{Diagnostics, ParseError};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        if self.diagnostics.is_empty() {
            return Ok(());
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            let report = [Level::ERROR
                .primary_title(diag.message())
                .element(self.snippet(source, diag))];
            write!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    /// The title already carries the message, so the underline only gets the kind's
    /// hint. Related ranges (the opener of an unclosed block or argument list) are
    /// secondary annotations.
    fn snippet<'a>(&self, source: &'a str, diag: &'a ParseError) -> Snippet<'a, Annotation<'a>>
    where
        's: 'a,
    {
        let mut primary = AnnotationKind::Primary.span(underline(diag.range(), source.len()));
        if let Some(hint) = diag.kind().hint() {
            primary = primary.label(hint);
        }

        let mut snippet = Snippet::source(source).line_start(1).annotation(primary);
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }
        for related in diag.related() {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(underline(related.range(), source.len()))
                    .label(related.message()),
            );
        }
        snippet
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", diag)?;
        }
        Ok(())
    }
}

/// Empty ranges (a missing value, a missing `)` at end of input) still get one column
/// of underline.
fn underline(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}

impl Diagnostics {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }
}
