//! Walks source directories for deck files.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::manifest::Manifest;

/// Deck files found on disk, in walk order until normalized.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub decks: Vec<PathBuf>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.decks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.is_empty()
    }

    pub fn merge(&mut self, other: ScanResult) {
        self.decks.extend(other.decks);
    }

    /// Sort and drop duplicates so overlapping sources are checked once.
    pub fn normalize(&mut self) {
        self.decks.sort();
        self.decks.dedup();
    }
}

impl FromIterator<PathBuf> for ScanResult {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        Self {
            decks: iter.into_iter().collect(),
        }
    }
}

fn is_deck_entry(entry: &DirEntry, manifest: &Manifest) -> bool {
    let path = entry.path();
    if !entry.file_type().is_file() || !manifest.is_deck(path) {
        return false;
    }
    if manifest.is_excluded(path) {
        log::trace!("excluded {}", path.display());
        return false;
    }
    true
}

/// Collect every deck below `root`. A missing root yields nothing.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> ScanResult {
    if !root.exists() {
        log::debug!("skipping missing source {}", root.display());
        return ScanResult::new();
    }

    WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| is_deck_entry(entry, manifest))
        .map(DirEntry::into_path)
        .collect()
}

/// Scan each manifest source, resolved against `base_path` unless absolute.
pub fn scan_sources(sources: &[String], base_path: &Path, manifest: &Manifest) -> ScanResult {
    let mut result: ScanResult = sources
        .iter()
        .map(|source| base_path.join(source))
        .flat_map(|dir| scan_directory(&dir, manifest).decks)
        .collect();

    result.normalize();
    result
}
