//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be composed into
//! several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input file (positional). `-` reads stdin.
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("input_text")
        .help("Input file, or - for stdin")
}

/// Inline input text (-e/--text).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('e')
        .long("text")
        .value_name("TEXT")
        .help("Inline input text")
}

/// Parse with the expression entry point (--expr).
pub fn expr_arg() -> Arg {
    Arg::new("expr")
        .long("expr")
        .action(ArgAction::SetTrue)
        .help("Parse a single expression instead of a file")
}

/// Host-language identifiers (--identifiers).
pub fn identifiers_arg() -> Arg {
    Arg::new("identifiers")
        .long("identifiers")
        .action(ArgAction::SetTrue)
        .help("Accept Java/Kotlin identifiers and treat keywords as names")
}

/// Nesting limit (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting depth before the rest of the input is skipped")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Dump the raw CST instead of the outline (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Show the raw CST (every node and token)")
}

/// Include whitespace and comments (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include whitespace and comments (implies --raw)")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Names to quote (positional, one or more).
pub fn names_arg() -> Arg {
    Arg::new("names")
        .value_name("NAME")
        .num_args(1..)
        .required(true)
        .help("Names to make valid identifiers")
}

/// Reverse quoting (--unquote).
pub fn unquote_arg() -> Arg {
    Arg::new("unquote")
        .long("unquote")
        .action(ArgAction::SetTrue)
        .help("Remove identifier quoting instead of adding it")
}

/// Left element kind (positional).
pub fn left_kind_arg() -> Arg {
    Arg::new("left")
        .value_name("LEFT")
        .required_unless_present("all")
        .help("Kind of the left element, e.g. Identifier")
}

/// Right element kind (positional).
pub fn right_kind_arg() -> Arg {
    Arg::new("right")
        .value_name("RIGHT")
        .required_unless_present("all")
        .help("Kind of the right element, e.g. BlockBody")
}

/// List every rule (--all).
pub fn all_rules_arg() -> Arg {
    Arg::new("all")
        .long("all")
        .action(ArgAction::SetTrue)
        .conflicts_with_all(["left", "right"])
        .help("List every explicit rule")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log parser activity to stderr (-v debug, -vv trace)")
}
