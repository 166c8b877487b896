//! Dump command implementation.
//!
//! Parses one deck and writes the presentation to stdout.

use std::io::{self, Write};
use std::path::Path;

use clap::Args;

use crate::discovery::{load_manifest, OutputFormat};
use crate::error::{Result, SkitError};
use crate::parser::parse;
use crate::types::Presentation;

use super::{with_source, InputArgs};

/// Print the parsed presentation as JSON or YAML
#[derive(Args, Debug)]
pub struct DumpArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (default: from skit.yaml, else json)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: DumpArgs) -> miette::Result<()> {
    let (name, source) = args.input.load()?;
    let format = match args.format {
        Some(format) => format,
        None => load_manifest(Path::new("."))?.0.format,
    };

    let presentation = parse(&source).map_err(|e| with_source(e, &name, &source))?;
    let rendered = render(&presentation, format)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end()).map_err(SkitError::from)?;
    Ok(())
}

/// Serialize a presentation in the given format.
pub fn render(presentation: &Presentation, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(presentation).map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::to_string(presentation).map_err(|e| e.to_string()),
    };

    rendered.map_err(|message| SkitError::Cli {
        message: format!("Failed to serialize presentation: {}", message),
        help: None,
    })
}
