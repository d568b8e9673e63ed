use crate::parser::Parse;
use indoc::indoc;

#[test]
fn paren_on_next_line_is_not_a_call() {
    let res = Parse::expect_invalid("foo\n(1)");
    insta::assert_snapshot!(res, @r#"
    Root
      Property
        Identifier "foo"
      Error
        ParenOpen "("
        IntegerLiteral "1"
        ParenClose ")"
    ---
    error at 4..5: expected an assignment, block or call
    "#);
}

#[test]
fn brace_on_next_line_is_not_a_block() {
    let res = Parse::expect_invalid("a\n{ }");
    insta::assert_snapshot!(res, @r#"
    Root
      Property
        Identifier "a"
      Error
        BraceOpen "{"
        BraceClose "}"
    ---
    error at 2..3: expected an assignment, block or call
    "#);
}

#[test]
fn operator_on_next_line_starts_a_statement() {
    let res = Parse::expect_invalid("a\n= 1");
    insta::assert_snapshot!(res, @r#"
    Root
      Property
        Identifier "a"
      Error
        Equals "="
        IntegerLiteral "1"
    ---
    error at 2..3: expected an assignment, block or call
    "#);
}

#[test]
fn chain_continues_across_lines() {
    let input = indoc! {r#"
    x = a
      .b
      .c(1)
    "#};

    let parse = Parse::expect_valid(input);
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Root
      Assignment
        Property
          Identifier "x"
        Equals "="
        ReceiverCall
          QualifiedReference
            Property
              Identifier "a"
            Dot "."
            Identifier "b"
          Dot "."
          Identifier "c"
          ArgumentList
            ParenOpen "("
            Argument
              Literal
                IntegerLiteral "1"
            ParenClose ")"
    "#);
}

#[test]
fn multiline_block_comment_separates_statements() {
    Parse::expect_valid("a = 1 /*\n*/ b = 2");
}

#[test]
fn inline_block_comment_does_not_separate_statements() {
    let res = Parse::expect_invalid("a = 1 /* c */ b = 2");
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
    error at 14..15: expected newline or `;` between statements
    "#);
}

#[test]
fn arguments_may_span_lines() {
    let input = indoc! {r#"
    listOf(
        "a",
        "b"
    )
    "#};

    let parse = Parse::expect_valid(input);
    insta::assert_snapshot!(parse.dump_ast(), @r#"
    Root
      FactoryCall listOf
        Literal "a"
        Literal "b"
    "#);
}
