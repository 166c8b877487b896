//! Deck discovery for skit projects.
//!
//! Finds deck files either by walking a project directory or from a
//! `skit.yaml` manifest's source list.
//!
//! # Example
//!
//! ```ignore
//! use skit::discovery::discover;
//!
//! let result = discover("./talks")?;
//! println!("Found {} decks", result.scan.total());
//! ```

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::{Manifest, OutputFormat, DEFAULT_EXTENSION};
pub use scanner::{scan_directory, scan_sources, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "skit.yaml";

/// Result of discovering decks in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no skit.yaml was found).
    pub manifest: Manifest,

    /// Whether a skit.yaml manifest was found.
    pub has_manifest: bool,

    /// Discovered deck files.
    pub scan: ScanResult,
}

/// Load the manifest in `root`, or the default one if there is none.
pub fn load_manifest(root: &Path) -> Result<(Manifest, bool)> {
    let manifest_path = root.join(MANIFEST_FILENAME);
    if manifest_path.exists() {
        log::debug!("loading manifest {}", manifest_path.display());
        Ok((Manifest::load(&manifest_path)?, true))
    } else {
        Ok((Manifest::default(), false))
    }
}

/// Discover decks in a project directory.
///
/// Uses the source paths of a `skit.yaml` in `root` when present,
/// otherwise scans the whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();
    let (manifest, has_manifest) = load_manifest(&root)?;

    let sources = manifest.effective_sources();
    let scan = scan_sources(&sources, &root, &manifest);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        scan,
    })
}

/// Discover decks from specific paths (no manifest lookup).
///
/// Files are taken as given whatever their extension; directories are
/// scanned for `.skit` files.
pub fn discover_paths(paths: &[PathBuf]) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest));
        } else {
            // Missing files are reported when they are read
            scan.decks.push(path.clone());
        }
    }
    scan.normalize();

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        scan,
    })
}
