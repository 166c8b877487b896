//! `skit init` - write a starter `skit.yaml` listing the directories that
//! already hold decks.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, Manifest, MANIFEST_FILENAME};
use crate::error::{Result, SkitError};
use crate::output::{display_path, plural, Printer};

/// Initialize a skit project by generating a skit.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scan (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing skit.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() {
        if !args.force {
            return Err(SkitError::Cli {
                message: format!("{} already exists", MANIFEST_FILENAME),
                help: Some("Use --force to overwrite".to_string()),
            });
        }
        // the old sources would narrow the scan below
        fs::remove_file(&manifest_path).map_err(|e| SkitError::Io {
            path: manifest_path.clone(),
            message: format!("Failed to replace manifest: {}", e),
        })?;
    }

    printer.status("Scanning", &display_path(&args.path));
    let discovery = discover(&args.path)?;
    let dirs = source_dirs(&discovery.scan.decks, &discovery.root);

    let manifest = Manifest {
        sources: if dirs.len() == 1 && dirs.contains(".") {
            vec![]
        } else {
            dirs.iter().cloned().collect()
        },
        ..Manifest::default()
    };
    let yaml = serde_yaml::to_string(&manifest).map_err(|e| SkitError::Manifest {
        message: format!("Failed to serialize manifest: {}", e),
        help: None,
    })?;

    fs::write(&manifest_path, yaml).map_err(|e| SkitError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    if !dirs.is_empty() {
        let listed: Vec<&str> = dirs.iter().map(String::as_str).collect();
        printer.info("Discovered", &listed.join(", "));
    }
    printer.status(
        "Created",
        &format!(
            "{} ({} found)",
            MANIFEST_FILENAME,
            plural(discovery.scan.total(), "deck", "decks")
        ),
    );

    Ok(())
}

/// Directories holding decks, relative to `root`, each with a trailing `/`.
/// The root itself is `"."`.
fn source_dirs(decks: &[PathBuf], root: &Path) -> BTreeSet<String> {
    decks
        .iter()
        .filter_map(|deck| deck.parent())
        .map(|parent| {
            let relative = parent.strip_prefix(root).unwrap_or(parent);
            let relative = relative.strip_prefix(".").unwrap_or(relative);
            if relative.as_os_str().is_empty() {
                ".".to_string()
            } else {
                format!("{}/", relative.display())
            }
        })
        .collect()
}
