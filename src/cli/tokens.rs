//! Tokens command implementation.
//!
//! Prints the scanner's output one token per line, prefixed with the
//! token's line and column.

use std::io::{self, Write};

use clap::Args;

use crate::error::SkitError;
use crate::lexer::{Token, TokenKind};
use crate::parser::tokenize;

use super::{with_source, InputArgs};

/// Print the token stream of a deck
#[derive(Args, Debug)]
pub struct TokensArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: TokensArgs) -> miette::Result<()> {
    let (name, source) = args.input.load()?;
    let mut stdout = io::stdout().lock();

    for token in tokenize(&source) {
        writeln!(stdout, "{}", format_token(&token, &source)).map_err(SkitError::from)?;

        if let TokenKind::Error(kind) = token.kind {
            let err = SkitError::lex(kind, token.value, token.span, &source);
            return Err(with_source(err, &name, &source));
        }
    }

    Ok(())
}

/// One listing line: `line:column` padded, then the token.
pub fn format_token(token: &Token, source: &str) -> String {
    let location = token.span.location(source).to_string();
    format!("{:<8}{}", location, token)
}
