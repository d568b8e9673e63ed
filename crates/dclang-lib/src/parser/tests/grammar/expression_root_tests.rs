use crate::parser::{AssignmentKind, Expr, Parse, ParseState, parse_expression_root};

#[test]
fn dotted_path() {
    let parse = Parse::expect_valid_expression("foo.bar");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    ExprRoot
      QualifiedReference
        Property
          Identifier "foo"
        Dot "."
        Identifier "bar"
    "#);

    let expr = parse.expr_root().unwrap().expr().unwrap();
    let Expr::QualifiedReference(reference) = expr else {
        panic!("expected a qualified reference");
    };
    assert_eq!(reference.path().unwrap(), ["foo", "bar"]);
}

#[test]
fn assignment_to_parameter() {
    let parse = Parse::expect_valid_expression("id = :param");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    ExprRoot
      Assignment
        Property
          Identifier "id"
        Equals "="
        Parameter
          ParamName ":param"
    "#);

    let assignment = parse.expr_root().unwrap().assignment().unwrap();
    assert_eq!(assignment.kind(), Some(AssignmentKind::Assign));
    let Some(Expr::Parameter(param)) = assignment.value() else {
        panic!("expected a parameter");
    };
    assert_eq!(param.name().as_deref(), Some("param"));
    assert_eq!(parse.terminal_state(), ParseState::AtStatementStart);
}

#[test]
fn expression_root_has_no_file_root() {
    let parse = parse_expression_root("a");
    assert!(parse.root().is_none());
    assert!(parse.expr_root().is_some());
}

#[test]
fn trailing_input() {
    let parse = parse_expression_root("a b");
    insta::assert_snapshot!(parse.snapshot(), @r#"
    ExprRoot
      Property
        Identifier "a"
      Error
        Identifier "b"
    ---
    error at 2..3: unexpected input after expression
    "#);
}

#[test]
fn second_statement_is_trailing_input() {
    let parse = parse_expression_root("a = 1; b = 2");
    insta::assert_snapshot!(parse.snapshot(), @r#"
    ExprRoot
      Assignment
        Property
          Identifier "a"
        Equals "="
        Literal
          IntegerLiteral "1"
      Error
        Semicolon ";"
        Identifier "b"
        Equals "="
        IntegerLiteral "2"
    ---
    error at 5..6: unexpected input after expression
    "#);
}

#[test]
fn empty_expression() {
    let parse = parse_expression_root("");
    insta::assert_snapshot!(parse.snapshot(), @r"
    ExprRoot
    ---
    error at 0..0: expected an expression
    ");
    assert_eq!(parse.terminal_state(), ParseState::Recovering);
}

#[test]
fn parameter_has_no_members() {
    let parse = parse_expression_root("id = :param.value");
    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 5..11: cannot access members of a parameter");
    assert_eq!(parse.terminal_state(), ParseState::Recovering);
}

#[test]
fn stray_value_token_is_one_error() {
    let parse = parse_expression_root("id = = 1");
    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 5..6: expected an expression");
}
