//! Input loading and parser configuration shared by the commands that read input.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use dclang_lib::{LexerMode, Parse, ParseOptions};

pub struct InputArgs {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
    pub lexer_mode: LexerMode,
    pub recursion_limit: Option<u32>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("input is required: use a FILE argument, - for stdin, or -e/--text")]
    Missing,
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Loaded input text with the name used in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub name: String,
    pub text: String,
}

impl InputArgs {
    pub fn load(&self) -> Result<Input, LoadError> {
        load_input(self.path.as_deref(), self.text.as_deref())
    }

    pub fn parse_options(&self) -> ParseOptions {
        let options = ParseOptions::new().with_lexer_mode(self.lexer_mode);
        match self.recursion_limit {
            Some(limit) => options.with_recursion_limit(limit),
            None => options,
        }
    }

    pub fn parse(&self, text: &str, expr: bool) -> Parse {
        let options = self.parse_options();
        if expr {
            options.parse_expression_root(text)
        } else {
            options.parse(text)
        }
    }
}

pub fn load_input(path: Option<&Path>, text: Option<&str>) -> Result<Input, LoadError> {
    if let Some(text) = text {
        return Ok(Input {
            name: "<text>".to_string(),
            text: text.to_string(),
        });
    }

    let Some(path) = path else {
        return Err(LoadError::Missing);
    };

    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(LoadError::Stdin)?;
        return Ok(Input {
            name: "<stdin>".to_string(),
            text: buf,
        });
    }

    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), len = text.len(), "loaded input");
    Ok(Input {
        name: path.to_string_lossy().into_owned(),
        text,
    })
}

/// Loads input or exits with the error, the way every command reports bad input.
pub fn load_or_exit(args: &InputArgs) -> Input {
    args.load().unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}
