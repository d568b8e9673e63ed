use crate::parser::Parse;
use indoc::indoc;

#[test]
fn comment_and_newlines_preserved() {
    let input = indoc! {r#"
    // config
    a = 1
    "#};

    let parse = Parse::expect_valid(input);
    insta::assert_snapshot!(parse.dump_cst_full(), @r#"
    Root
      LineComment "// config"
      Newline "\n"
      Assignment
        Property
          Identifier "a"
        Whitespace " "
        Equals "="
        Whitespace " "
        Literal
          IntegerLiteral "1"
      Newline "\n"
    "#);
}

#[test]
fn comment_inside_block() {
    let parse = Parse::expect_valid("a { // c\n}");
    insta::assert_snapshot!(parse.dump_cst_full(), @r#"
    Root
      Block
        Identifier "a"
        Whitespace " "
        BlockBody
          BraceOpen "{"
          Whitespace " "
          LineComment "// c"
          Newline "\n"
          BraceClose "}"
    "#);
}

#[test]
fn round_trips_source_text() {
    let input = indoc! {r#"
    /* header */
    plugins {
        id("com.android.application") // app
    }

    android { namespace = "x"; compileSdk = 34 }
    "#};

    let parse = Parse::expect_valid(input);
    assert_eq!(parse.syntax().text().to_string(), input);
}
