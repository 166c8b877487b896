//! Check command implementation.
//!
//! Parses every discovered deck and reports the ones that fail.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::{Result, SkitError};
use crate::output::{display_path, plural, Printer};
use crate::parser::{parse, read_source};
use crate::types::Presentation;

use super::with_source;

/// Parse decks and report errors
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Deck files or directories (default: the current project)
    pub paths: Vec<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.paths.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.paths)?
    };

    let decks = &discovery.scan.decks;
    if decks.is_empty() {
        printer.warning("Warning", "no decks found");
        return Ok(());
    }

    let mut failed = 0;
    for path in decks {
        let display = display_path(path);
        match check_deck(path, &display) {
            Ok(presentation) => {
                let slides = plural(presentation.len(), "slide", "slides");
                printer.status("Checked", &format!("{} ({})", display, slides));
            }
            Err(report) => {
                failed += 1;
                printer.error("Failed", &display);
                eprintln!("{:?}", report);
            }
        }
    }

    let total = plural(decks.len(), "deck", "decks");
    if failed > 0 {
        return Err(SkitError::Cli {
            message: format!("{} of {} failed to parse", failed, total),
            help: None,
        });
    }

    printer.status("Finished", &format!("{} checked", total));
    Ok(())
}

fn check_deck(path: &Path, display: &str) -> std::result::Result<Presentation, miette::Report> {
    let source = read_source(path)?;
    log::info!("checking {}", display);
    parse(&source).map_err(|e| with_source(e, display, &source))
}
