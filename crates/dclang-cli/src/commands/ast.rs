//! Show the syntax tree of a file or expression.

use super::loader::{InputArgs, load_or_exit};

pub struct AstArgs {
    pub input: InputArgs,
    pub expr: bool,
    pub raw: bool,
    pub trivia: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let input = load_or_exit(&args.input);
    let parse = args.input.parse(&input.text, args.expr);

    let tree = parse
        .printer()
        .raw(args.raw)
        .with_trivia(args.trivia)
        .with_spans(args.spans)
        .dump();
    print!("{}", tree);

    // The tree is printed either way; errors only change the exit code.
    if !parse.is_valid() {
        eprint!(
            "{}",
            parse
                .diagnostics()
                .printer()
                .source(&input.text)
                .path(&input.name)
                .colored(args.color)
                .render()
        );
        eprintln!();
        std::process::exit(1);
    }
}
