use super::loader::{InputArgs, load_or_exit};

pub struct CheckArgs {
    pub input: InputArgs,
    pub expr: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let input = load_or_exit(&args.input);
    let parse = args.input.parse(&input.text, args.expr);

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

    // Silent on success (like cargo check)
}
