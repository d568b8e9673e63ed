//! Command builders for the CLI.
//!
//! Every command that reads input shares the same input and parser flags.

use clap::Command;

use super::args::*;

/// Input source plus the parser knobs.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg())
        .arg(input_text_arg())
        .arg(identifiers_arg())
        .arg(recursion_limit_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("dclang")
        .about("Lexer and error-tolerant parser for declarative configuration files")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(ast_command())
        .subcommand(tokens_command())
        .subcommand(quote_command())
        .subcommand(spacing_command())
}

/// Validate a file or expression.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report syntax errors")
        .override_usage(
            "\
  dclang check <FILE>
  dclang check -e <TEXT> [--expr]",
        )
        .after_help(
            r#"EXAMPLES:
  dclang check build.gradle.dcl     # silent on success, exit 1 on errors
  dclang check -e 'a = 1 b = 2'     # inline text
  dclang check --expr -e 'x = :p'   # single expression"#,
        )
        .arg(expr_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Show the syntax tree.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the syntax tree")
        .override_usage(
            "\
  dclang ast <FILE> [--raw] [--trivia] [--spans]
  dclang ast -e <TEXT> [--expr]",
        )
        .after_help(
            r#"EXAMPLES:
  dclang ast build.gradle.dcl           # typed outline
  dclang ast build.gradle.dcl --raw     # every node and token
  dclang ast -e 'a = 1' --trivia        # CST with whitespace and comments"#,
        )
        .arg(expr_arg())
        .arg(raw_arg())
        .arg(trivia_arg())
        .arg(spans_arg())
        .arg(color_arg());

    with_input_args(cmd)
}

/// Show the token stream.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Show the token stream")
        .override_usage(
            "\
  dclang tokens <FILE>
  dclang tokens -e <TEXT> [--identifiers]",
        );

    with_input_args(cmd)
}

/// Print names as valid identifiers.
pub fn quote_command() -> Command {
    Command::new("quote")
        .about("Quote names that are not valid identifiers")
        .after_help(
            r#"EXAMPLES:
  dclang quote compileSdk 'my name'   # compileSdk, `my name`
  dclang quote --unquote '`a``b`'     # a`b"#,
        )
        .arg(names_arg())
        .arg(unquote_arg())
}

/// Show the spacing constraint between two kinds.
pub fn spacing_command() -> Command {
    Command::new("spacing")
        .about("Show formatter spacing rules")
        .override_usage(
            "\
  dclang spacing <LEFT> <RIGHT>
  dclang spacing --all",
        )
        .arg(left_kind_arg())
        .arg(right_kind_arg())
        .arg(all_rules_arg())
}
