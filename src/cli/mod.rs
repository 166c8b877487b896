pub mod check;
pub mod completions;
pub mod dump;
pub mod init;
pub mod tokens;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use miette::{NamedSource, Report};

use crate::error::{Result, SkitError};
use crate::output::display_path;
use crate::parser::read_source;

/// skit - slide markup scanner and parser
#[derive(Parser, Debug)]
#[command(name = "skit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse decks and report errors
    Check(check::CheckArgs),

    /// Print the parsed presentation as JSON or YAML
    Dump(dump::DumpArgs),

    /// Print the token stream of a deck
    Tokens(tokens::TokensArgs),

    /// Initialize a skit project (generates skit.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Where a single deck's markup comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Deck file to read
    #[arg(required_unless_present = "inline", conflicts_with = "inline")]
    pub file: Option<PathBuf>,

    /// Markup passed directly instead of a file
    #[arg(long)]
    pub inline: Option<String>,
}

impl InputArgs {
    /// Read the deck, returning its display name and full text.
    pub fn load(&self) -> Result<(String, String)> {
        match (&self.file, &self.inline) {
            (_, Some(text)) => Ok(("<inline>".to_string(), text.clone())),
            (Some(path), None) => Ok((display_path(path), read_source(path)?)),
            (None, None) => Err(SkitError::Cli {
                message: "No deck given".to_string(),
                help: Some("Pass a deck file or --inline TEXT".to_string()),
            }),
        }
    }
}

/// Set up `env_logger`; `RUST_LOG` overrides the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Attach deck text to an error so source labels render.
pub fn with_source(err: SkitError, name: &str, source: &str) -> Report {
    Report::new(err).with_source_code(NamedSource::new(name, source.to_string()))
}
