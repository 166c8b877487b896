//! Parsing slide markup into a [`Presentation`].
//!
//! Parsing is all-or-nothing: either every slide is returned or the first
//! failure is.
//!
//! # Usage
//!
//! ```ignore
//! use skit::parser::parse;
//!
//! let presentation = parse("/# Hello\nworld\n\n/@ ./cat.png")?;
//! assert_eq!(presentation.len(), 2);
//! ```

mod builder;

use std::fs;
use std::path::Path;

use crate::error::{Result, SkitError};
use crate::lexer::Scanner;
use crate::types::Presentation;

pub use builder::PresentationBuilder;

/// Parse markup text into a presentation.
pub fn parse(source: &str) -> Result<Presentation> {
    PresentationBuilder::new(source).build()
}

/// Read a deck file and parse it.
pub fn parse_file(path: &Path) -> Result<Presentation> {
    let source = read_source(path)?;
    parse(&source)
}

/// Read a deck file into memory.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SkitError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read deck: {}", e),
    })
}

/// Scan markup text without building slides.
pub fn tokenize(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_is_repeatable() {
        let source = "/# A\ntext\n\n/^ 4\n/@ x.gif";

        assert_eq!(parse(source).unwrap(), parse(source).unwrap());
    }

    #[test]
    fn test_parse_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("talk.skit");
        fs::write(&path, "/# Title\n\nSecond").unwrap();

        let presentation = parse_file(&path).unwrap();

        assert_eq!(presentation.len(), 2);
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_file(Path::new("/nonexistent/talk.skit"));

        assert!(matches!(result, Err(SkitError::Io { .. })));
    }

    #[test]
    fn test_tokenize_ends_with_end_of_input() {
        let last = tokenize("a\n\nb").last().map(|t| t.kind);

        assert_eq!(last, Some(TokenKind::EndOfInput));
    }
}
