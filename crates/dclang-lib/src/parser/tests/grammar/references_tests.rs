use crate::parser::{Expr, Parse, Statement};

#[test]
fn bare_property() {
    let parse = Parse::expect_valid("enabled");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Root
      Property
        Identifier "enabled"
    "#);
}

#[test]
fn dotted_path_is_left_associative() {
    let parse = Parse::expect_valid("a.b.c");
    insta::assert_snapshot!(parse.dump_ast(), @r"
    Root
      QualifiedReference c
        QualifiedReference b
          Property a
    ");

    let root = parse.root().unwrap();
    let Some(Statement::Expr(Expr::QualifiedReference(reference))) = root.statements().next()
    else {
        panic!("expected a qualified reference");
    };
    assert_eq!(reference.path().unwrap(), ["a", "b", "c"]);
}

#[test]
fn quoted_identifiers() {
    let parse = Parse::expect_valid("`my project`.`a``b` = 1");

    let root = parse.root().unwrap();
    let Some(Statement::Assignment(assignment)) = root.statements().next() else {
        panic!("expected an assignment");
    };
    let Some(Expr::QualifiedReference(target)) = assignment.target() else {
        panic!("expected a qualified target");
    };
    assert!(assignment.target().unwrap().is_lvalue());
    assert_eq!(target.path().unwrap(), ["my project", "a`b"]);
}

#[test]
fn path_through_call_has_no_plain_path() {
    let parse = Parse::expect_valid("f().x");

    let root = parse.root().unwrap();
    let Some(Statement::Expr(Expr::QualifiedReference(reference))) = root.statements().next()
    else {
        panic!("expected a qualified reference");
    };
    assert!(reference.path().is_none());
    assert!(matches!(reference.receiver(), Some(Expr::FactoryCall(_))));
}
