mod grammar;
mod recovery;

use crate::parser::{Parse, ParseOptions};

impl Parse {
    pub(crate) fn expect_valid(src: &str) -> Parse {
        let parse = ParseOptions::new().parse(src);
        if !parse.is_valid() {
            panic!(
                "Expected valid input, got errors:\n{}",
                parse.dump_diagnostics()
            );
        }
        parse
    }

    pub(crate) fn expect_valid_expression(src: &str) -> Parse {
        let parse = ParseOptions::new().parse_expression_root(src);
        if !parse.is_valid() {
            panic!(
                "Expected valid expression, got errors:\n{}",
                parse.dump_diagnostics()
            );
        }
        parse
    }

    /// Raw CST, then the diagnostics after a `---` line.
    pub(crate) fn expect_invalid(src: &str) -> String {
        let parse = ParseOptions::new().parse(src);
        if parse.is_valid() {
            panic!("Expected invalid input, got valid:\n{}", parse.dump_cst());
        }
        parse.snapshot()
    }

    pub(crate) fn snapshot(&self) -> String {
        format!("{}---\n{}", self.dump_cst(), self.dump_diagnostics())
    }

    pub(crate) fn dump_cst_full(&self) -> String {
        self.printer().raw(true).with_trivia(true).dump()
    }

    pub(crate) fn dump_diagnostics(&self) -> String {
        self.diagnostics().printer().render()
    }
}
