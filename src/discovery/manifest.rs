//! Project manifest (skit.yaml) parsing.
//!
//! The manifest is optional. It tells `skit check` where decks live and
//! sets defaults for the other commands.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SkitError};

/// Serialization format for dumped presentations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Project manifest loaded from skit.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories to scan for decks.
    /// Defaults to the project root if empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,

    /// File extension of deck files, without the dot.
    pub extension: String,

    /// Default format for `skit dump`.
    pub format: OutputFormat,
}

/// Extension used when the manifest does not set one.
pub const DEFAULT_EXTENSION: &str = "skit";

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            excludes: vec![],
            extension: DEFAULT_EXTENSION.to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl Manifest {
    /// Load manifest from a skit.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SkitError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SkitError::Manifest {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check skit.yaml syntax".to_string()),
        })
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.contains(&format!("/{}/", dir)) || path.starts_with(&format!("{}/", dir));
            }
            return path.contains(suffix);
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    /// Whether a file name carries the deck extension.
    pub fn is_deck(&self, path: &Path) -> bool {
        let extension = self.extension.trim_start_matches('.');
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension))
    }
}
