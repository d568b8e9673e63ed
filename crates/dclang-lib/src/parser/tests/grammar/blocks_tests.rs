use crate::parser::{Parse, Statement};
use indoc::indoc;

#[test]
fn block_with_two_assignments() {
    let parse = Parse::expect_valid("block { a = 1 \n b = 2 }");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Root
      Block
        Identifier "block"
        BlockBody
          BraceOpen "{"
          Assignment
            Property
              Identifier "a"
            Equals "="
            Literal
              IntegerLiteral "1"
          Assignment
            Property
              Identifier "b"
            Equals "="
            Literal
              IntegerLiteral "2"
          BraceClose "}"
    "#);

    let root = parse.root().unwrap();
    let Some(Statement::Block(block)) = root.statements().next() else {
        panic!("expected a block");
    };
    assert_eq!(block.name().unwrap().text(), "block");
    assert_eq!(block.statements().count(), 2);
    assert!(
        block
            .statements()
            .all(|s| matches!(s, Statement::Assignment(_)))
    );
}

#[test]
fn empty_block() {
    let parse = Parse::expect_valid("android {}");
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Root
      Block
        Identifier "android"
        BlockBody
          BraceOpen "{"
          BraceClose "}"
    "#);
}

#[test]
fn nested_blocks() {
    let input = indoc! {r#"
    android {
        defaultConfig {
            minSdk = 21
        }
        namespace = "org.example"
    }
    "#};

    let parse = Parse::expect_valid(input);
    insta::assert_snapshot!(parse.dump_ast(), @r#"
    Root
      Block android
        Block defaultConfig
          Assignment =
            Property minSdk
            Literal 21
        Assignment =
          Property namespace
          Literal "org.example"
    "#);
}

#[test]
fn factory_block() {
    let parse = Parse::expect_valid(r#"create("debug") { minify = true }"#);
    insta::assert_snapshot!(parse.dump_cst(), @r#"
    Root
      Block
        FactoryCall
          Identifier "create"
          ArgumentList
            ParenOpen "("
            Argument
              Literal
                StringLiteral "\"debug\""
            ParenClose ")"
        BlockBody
          BraceOpen "{"
          Assignment
            Property
              Identifier "minify"
            Equals "="
            Literal
              KwTrue "true"
          BraceClose "}"
    "#);

    let root = parse.root().unwrap();
    let Some(Statement::Block(block)) = root.statements().next() else {
        panic!("expected a block");
    };
    assert_eq!(block.name().unwrap().text(), "create");
    assert!(block.factory().is_some());
}

#[test]
fn statements_separated_by_semicolons() {
    let parse = Parse::expect_valid("a { x = 1; y = 2; }");
    insta::assert_snapshot!(parse.dump_ast(), @r"
    Root
      Block a
        Assignment =
          Property x
          Literal 1
        Assignment =
          Property y
          Literal 2
    ");
}
