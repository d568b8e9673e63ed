use crate::parser::{Parse, ParseState, parse};

#[test]
fn two_statements_on_one_line() {
    let res = Parse::expect_invalid("a = 1 b = 2");
    insta::assert_snapshot!(res, @r#"
    Root
      Assignment
        Property
          Identifier "a"
        Equals "="
        Literal
          IntegerLiteral "1"
      Error
        Identifier "b"
        Equals "="
        IntegerLiteral "2"
    ---
    error at 6..7: expected newline or `;` between statements
    "#);
}

#[test]
fn repeated_semicolons_are_fine() {
    Parse::expect_valid("a = 1;; b = 2;");
}

#[test]
fn missing_value_then_stray_token() {
    let res = Parse::expect_invalid("a = = 1");
    insta::assert_snapshot!(res, @r#"
    Root
      Assignment
        Property
          Identifier "a"
        Equals "="
        Error
          Equals "="
          IntegerLiteral "1"
    ---
    error at 4..5: expected an expression
    "#);
}

#[test]
fn stray_value_token_skips_rest_of_line_only() {
    let parse = parse("a = = 1 2
b = 3");
    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 4..5: expected an expression");
    assert_eq!(parse.root().map(|root| root.statements().count()), Some(2));
}

#[test]
fn recovery_resumes_on_next_line() {
    let parse = parse("a = )\nb = 1");
    insta::assert_snapshot!(parse.snapshot(), @r#"
    Root
      Assignment
        Property
          Identifier "a"
        Equals "="
      Error
        ParenClose ")"
      Assignment
        Property
          Identifier "b"
        Equals "="
        Literal
          IntegerLiteral "1"
    ---
    error at 4..5: expected an expression
    "#);
    assert_eq!(parse.terminal_state(), ParseState::AtStatementStart);
}

#[test]
fn recovery_skips_balanced_brackets() {
    let res = Parse::expect_invalid("a = 1 f(x, { y }) \nb = 2");
    insta::assert_snapshot!(res, @r#"
    Root
      Assignment
        Property
          Identifier "a"
        Equals "="
        Literal
          IntegerLiteral "1"
      Error
        Identifier "f"
        ParenOpen "("
        Identifier "x"
        Comma ","
        BraceOpen "{"
        Identifier "y"
        BraceClose "}"
        ParenClose ")"
      Assignment
        Property
          Identifier "b"
        Equals "="
        Literal
          IntegerLiteral "2"
    ---
    error at 6..7: expected newline or `;` between statements
    "#);
}
