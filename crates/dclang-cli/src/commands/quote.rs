use dclang_lib::{get_valid_name, unquote};

pub struct QuoteArgs {
    pub names: Vec<String>,
    pub unquote: bool,
}

pub fn run(args: QuoteArgs) {
    for line in convert(&args) {
        println!("{}", line);
    }
}

pub fn convert(args: &QuoteArgs) -> Vec<String> {
    args.names
        .iter()
        .map(|name| {
            if args.unquote {
                unquote(name)
            } else {
                get_valid_name(name).into_owned()
            }
        })
        .collect()
}
