use crate::parser::{ParseOptions, ParseState, parse};

#[test]
fn nesting_limit_in_arguments() {
    let parse = ParseOptions::new()
        .with_recursion_limit(3)
        .parse("a(b(c(d(e))))");
    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 6..7: nesting too deep");
    assert_eq!(parse.terminal_state(), ParseState::Recovering);
}

#[test]
fn nesting_limit_in_blocks() {
    let parse = ParseOptions::new()
        .with_recursion_limit(2)
        .parse("a { b { c { } } }");
    assert_eq!(parse.diagnostics().len(), 1);
    insta::assert_snapshot!(parse.dump_diagnostics(), @"error at 10..11: nesting too deep");
}

#[test]
fn nesting_limit_keeps_source_text() {
    let input = "a { b(c(d(e)))\n}";
    let parse = ParseOptions::new().with_recursion_limit(2).parse(input);
    assert!(!parse.is_valid());
    assert_eq!(parse.syntax().text().to_string(), input);
}

#[test]
fn garbage_inputs_terminate_and_keep_text() {
    let inputs = [
        "",
        "(",
        "{",
        "}}}",
        ")))",
        "= = =",
        "a(((",
        "a.{",
        "a..b",
        "a = ;",
        "f(,,,)",
        "f(1,",
        "\"unterminated",
        "\"\"\"open",
        "/* open",
        "`open",
        "a += += b",
        "x { y { z( }",
        "@#$%",
        "a\n.\n.\nb",
    ];

    for input in inputs {
        let parse = parse(input);
        assert_eq!(parse.syntax().text().to_string(), input, "input: {input:?}");
        assert_eq!(
            parse.is_valid(),
            parse.diagnostics().is_empty(),
            "input: {input:?}"
        );
    }
}

#[test]
fn valid_input_ends_at_statement_start() {
    let parse = parse("a { b = 1 }\nc(2)");
    assert!(parse.is_valid());
    assert_eq!(parse.terminal_state(), ParseState::AtStatementStart);
}
