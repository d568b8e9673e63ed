use dclang_lib::parser::Lexer;

use super::loader::{InputArgs, load_or_exit};

pub struct TokensArgs {
    pub input: InputArgs,
}

pub fn run(args: TokensArgs) {
    let input = load_or_exit(&args.input);
    print!("{}", dump_tokens(&input.text, &args.input));
}

/// One `Kind [start..end] "text"` line per token, trivia included.
pub fn dump_tokens(text: &str, input: &InputArgs) -> String {
    let mut out = String::new();
    for token in Lexer::with_mode(text, input.lexer_mode) {
        out.push_str(&format!(
            "{:?} [{}..{}] {:?}\n",
            token.kind,
            u32::from(token.span.start()),
            u32::from(token.span.end()),
            token.text(text)
        ));
    }
    out
}
