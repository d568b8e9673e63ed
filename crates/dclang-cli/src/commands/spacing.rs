use dclang_lib::SyntaxKind;
use dclang_lib::spacing::{spacing_rule, spacing_rules};

pub struct SpacingArgs {
    /// `None` lists every rule.
    pub pair: Option<(String, String)>,
}

pub fn run(args: SpacingArgs) {
    match describe(&args) {
        Ok(out) => print!("{}", out),
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}

pub fn describe(args: &SpacingArgs) -> Result<String, String> {
    let Some((left, right)) = &args.pair else {
        return Ok(spacing_rules()
            .map(|((left, right), constraint)| format!("{left:?} {right:?}: {constraint}\n"))
            .collect());
    };

    let left = parse_kind(left)?;
    let right = parse_kind(right)?;
    Ok(format!("{}\n", spacing_rule(left, right)))
}

fn parse_kind(name: &str) -> Result<SyntaxKind, String> {
    SyntaxKind::from_name(name).ok_or_else(|| format!("unknown syntax kind '{}'", name))
}
