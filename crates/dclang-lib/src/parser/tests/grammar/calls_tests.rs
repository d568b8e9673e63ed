use crate::parser::{Expr, Parse, Statement};

#[test]
fn factory_call() {
    let parse = Parse::expect_valid("foo(1, 2)");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
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
          ParenClose ")"
    "#);
}

#[test]
fn empty_arguments() {
    let parse = Parse::expect_valid("foo()");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Root
      FactoryCall
        Identifier "foo"
        ArgumentList
          ParenOpen "("
          ParenClose ")"
    "#);
}

#[test]
fn receiver_call() {
    let parse = Parse::expect_valid("a.b(1)");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Root
      ReceiverCall
        Property
          Identifier "a"
        Dot "."
        Identifier "b"
        ArgumentList
          ParenOpen "("
          Argument
            Literal
              IntegerLiteral "1"
          ParenClose ")"
    "#);

    let root = parse.root().unwrap();
    let Some(Statement::Expr(Expr::ReceiverCall(call))) = root.statements().next() else {
        panic!("expected a receiver call");
    };
    assert_eq!(call.name().unwrap().text(), "b");
    assert!(matches!(call.receiver(), Some(Expr::Property(_))));
}

#[test]
fn call_on_call_result() {
    let parse = Parse::expect_valid(r#"files("a").filter("b").size"#);
    insta::assert_snapshot!(parse.dump_ast(), @r#"
    Root
      QualifiedReference size
        ReceiverCall filter
          FactoryCall files
            Literal "a"
          Literal "b"
    "#);
}

#[test]
fn nested_calls() {
    let parse = Parse::expect_valid(r#"implementation(project(":core"), 2)"#);
    insta::assert_snapshot!(parse.dump_ast(), @r#"
    Root
      FactoryCall implementation
        FactoryCall project
          Literal ":core"
        Literal 2
    "#);
}

#[test]
fn space_before_paren_on_same_line() {
    let parse = Parse::expect_valid("foo (1)");
    insta::assert_snapshot!(parse.dump_ast(), @r"
    Root
      FactoryCall foo
        Literal 1
    ");
}
