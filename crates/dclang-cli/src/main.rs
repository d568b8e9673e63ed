mod cli;
mod commands;

use tracing_subscriber::EnvFilter;

use cli::{AstParams, CheckParams, QuoteParams, SpacingParams, TokensParams, build_cli};

const LOG_ENV: &str = "DCLANG_LOG";

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("quote", m)) => {
            let params = QuoteParams::from_matches(m);
            commands::quote::run(params.into());
        }
        Some(("spacing", m)) => {
            let params = SpacingParams::from_matches(m);
            commands::spacing::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `DCLANG_LOG` wins; otherwise `-v` selects debug and `-vv` trace.
fn init_logging(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
