use crate::parser::{AssignmentKind, Parse, Statement};
use indoc::indoc;

#[test]
fn simple_assignment() {
    let parse = Parse::expect_valid("a = 1");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Root
      Assignment
        Property
          Identifier "a"
        Equals "="
        Literal
          IntegerLiteral "1"
    "#);
}

#[test]
fn append_assignment() {
    let parse = Parse::expect_valid(r#"dependencies += listOf("a")"#);
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Root
      Assignment
        Property
          Identifier "dependencies"
        PlusEquals "+="
        FactoryCall
          Identifier "listOf"
          ArgumentList
            ParenOpen "("
            Argument
              Literal
                StringLiteral "\"a\""
            ParenClose ")"
    "#);

    let root = parse.root().unwrap();
    let Some(Statement::Assignment(assignment)) = root.statements().next() else {
        panic!("expected an assignment");
    };
    assert_eq!(assignment.kind(), Some(AssignmentKind::Append));
}

#[test]
fn qualified_target() {
    let parse = Parse::expect_valid("a.b.c = 1");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Root
      Assignment
        QualifiedReference
          QualifiedReference
            Property
              Identifier "a"
            Dot "."
            Identifier "b"
          Dot "."
          Identifier "c"
        Equals "="
        Literal
          IntegerLiteral "1"
    "#);
}

#[test]
fn value_on_next_line() {
    let input = indoc! {r#"
    version =
        "1.0"
    "#};

    let parse = Parse::expect_valid(input);
    insta::assert_snapshot!(parse.dump_ast(), @r#"
    Root
      Assignment =
        Property version
        Literal "1.0"
    "#);
}

#[test]
fn literal_values() {
    let input = indoc! {r#"
    a = 1L
    b = 2u
    c = 3UL
    d = 0xFF
    e = 0b1010
    f = true
    g = null
    h = """
    multi
    line"""
    "#};

    let parse = Parse::expect_valid(input);
    insta::assert_snapshot!(parse.dump_ast(), @r#"
    Root
      Assignment =
        Property a
        Literal 1L
      Assignment =
        Property b
        Literal 2u
      Assignment =
        Property c
        Literal 3UL
      Assignment =
        Property d
        Literal 0xFF
      Assignment =
        Property e
        Literal 0b1010
      Assignment =
        Property f
        Literal true
      Assignment =
        Property g
        Literal null
      Assignment =
        Property h
        Literal """
    multi
    line"""
    "#);
}

#[test]
fn parameter_value() {
    let parse = Parse::expect_valid("a = :name; b = ?1; c = ?");
    insta::assert_snapshot!(parse.dump_ast(), @r"
    Root
      Assignment =
        Property a
        Parameter :name
      Assignment =
        Property b
        Parameter ?1
      Assignment =
        Property c
        Parameter ?
    ");
}
