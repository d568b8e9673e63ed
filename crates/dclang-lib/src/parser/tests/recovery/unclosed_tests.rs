use crate::diagnostics::DiagnosticKind;
use crate::parser::{Parse, ParseState, parse};
use indoc::indoc;

#[test]
fn missing_closing_paren() {
    let res = Parse::expect_invalid("foo(1, 2");
    insta::assert_snapshot!(res, @r#"
    Root
      FactoryCall
        Identifier "foo"
        ArgumentList
          ParenOpen "("
          Argument
            Literal
              IntegerLiteral "1"
          Comma ","
          Argument
            Literal
              IntegerLiteral "2"
    ---
    error at 3..8: missing closing `)` (related: argument list starts here at 3..4)
    "#);
}

#[test]
fn missing_closing_brace() {
    let input = indoc! {r#"
    a {
      b = 1
    "#};

    let res = Parse::expect_invalid(input);
    insta::assert_snapshot!(res, @r#"
    Root
      Block
        Identifier "a"
        BlockBody
          BraceOpen "{"
          Assignment
            Property
              Identifier "b"
            Equals "="
            Literal
              IntegerLiteral "1"
    ---
    error at 2..12: missing closing `}` (related: block starts here at 2..3)
    "#);
}

#[test]
fn nested_unclosed_reports_innermost_once() {
    let parse = parse("a(b(c");
    assert_eq!(parse.diagnostics().len(), 1);
    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 3..5: missing closing `)` (related: argument list starts here at 3..4)");
}

#[test]
fn brace_ends_unclosed_argument_list() {
    let parse = parse("a(1 {\n}");
    assert_eq!(parse.diagnostics().kinds(), [DiagnosticKind::UnclosedParen]);
    assert_eq!(parse.terminal_state(), ParseState::Recovering);
    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 1..5: missing closing `)` (related: argument list starts here at 1..2)");
}

#[test]
fn unclosed_keeps_source_text() {
    let input = "x { y(1,\n";
    let parse = parse(input);
    assert!(!parse.is_valid());
    assert_eq!(parse.syntax().text().to_string(), input);
}
