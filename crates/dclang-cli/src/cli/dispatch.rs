//! Dispatch logic: extract params from `ArgMatches` and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but hold clap-level values such as
//! `ColorChoice`; the `From` impls resolve those for the command handlers.

use std::path::PathBuf;

use clap::ArgMatches;
use dclang_lib::LexerMode;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::loader::InputArgs;
use crate::commands::quote::QuoteArgs;
use crate::commands::spacing::SpacingArgs;
use crate::commands::tokens::TokensArgs;

/// Input and parser flags shared by `check`, `ast` and `tokens`.
pub struct InputParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub identifiers: bool,
    pub recursion_limit: Option<u32>,
}

impl InputParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            identifiers: m.get_flag("identifiers"),
            recursion_limit: m.get_one::<u32>("recursion_limit").copied(),
        }
    }
}

impl From<InputParams> for InputArgs {
    fn from(p: InputParams) -> Self {
        Self {
            path: p.input_path,
            text: p.input_text,
            lexer_mode: LexerMode::accepting_language_identifiers(p.identifiers),
            recursion_limit: p.recursion_limit,
        }
    }
}

pub struct CheckParams {
    pub input: InputParams,
    pub expr: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            expr: m.get_flag("expr"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input.into(),
            expr: p.expr,
            color: p.color.should_colorize(),
        }
    }
}

pub struct AstParams {
    pub input: InputParams,
    pub expr: bool,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            expr: m.get_flag("expr"),
            raw: m.get_flag("raw"),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: p.input.into(),
            expr: p.expr,
            // trivia only exists in the raw tree
            raw: p.raw || p.trivia,
            trivia: p.trivia,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub input: InputParams,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input: p.input.into(),
        }
    }
}

pub struct QuoteParams {
    pub names: Vec<String>,
    pub unquote: bool,
}

impl QuoteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            names: m
                .get_many::<String>("names")
                .map(|names| names.cloned().collect())
                .unwrap_or_default(),
            unquote: m.get_flag("unquote"),
        }
    }
}

impl From<QuoteParams> for QuoteArgs {
    fn from(p: QuoteParams) -> Self {
        Self {
            names: p.names,
            unquote: p.unquote,
        }
    }
}

pub struct SpacingParams {
    pub left: Option<String>,
    pub right: Option<String>,
    pub all: bool,
}

impl SpacingParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            left: m.get_one::<String>("left").cloned(),
            right: m.get_one::<String>("right").cloned(),
            all: m.get_flag("all"),
        }
    }
}

impl From<SpacingParams> for SpacingArgs {
    fn from(p: SpacingParams) -> Self {
        let pair = match (p.all, p.left, p.right) {
            (false, Some(left), Some(right)) => Some((left, right)),
            _ => None,
        };
        Self { pair }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
