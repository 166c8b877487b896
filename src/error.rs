use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::lexer::{LexErrorKind, Location, Span};
use crate::types::ColorChannel;

/// Main error type for skit operations
#[derive(Error, Diagnostic, Debug)]
pub enum SkitError {
    #[error("IO error: {0}")]
    #[diagnostic(code(skit::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(skit::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    /// The scanner rejected the markup.
    #[error("{location}: {message}")]
    #[diagnostic(code(skit::lex))]
    Lex {
        kind: LexErrorKind,
        message: String,
        location: Location,
        #[label("here")]
        span: SourceSpan,
        #[help]
        help: Option<String>,
    },

    /// A color directive held a number outside `[0, 256)`.
    #[error("{location}: invalid {channel} color value '{value}'")]
    #[diagnostic(
        code(skit::color),
        help("Color codes must be between 0 and 255")
    )]
    InvalidColorValue {
        channel: ColorChannel,
        value: String,
        location: Location,
        #[label("not a color code")]
        span: SourceSpan,
    },

    #[error("Manifest error: {message}")]
    #[diagnostic(code(skit::manifest))]
    Manifest {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("{message}")]
    #[diagnostic(code(skit::cli))]
    Cli {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl SkitError {
    /// Build a scanner error for a failure at `span` in `source`.
    pub fn lex(kind: LexErrorKind, message: impl Into<String>, span: Span, source: &str) -> Self {
        SkitError::Lex {
            kind,
            message: message.into(),
            location: span.location(source),
            span: span.into(),
            help: Some(kind.help().to_string()),
        }
    }

    /// The scanner failure behind this error, if any.
    pub fn lex_kind(&self) -> Option<LexErrorKind> {
        match self {
            SkitError::Lex { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Whether this error came from the markup itself rather than I/O or
    /// configuration.
    pub fn is_markup_error(&self) -> bool {
        matches!(
            self,
            SkitError::Lex { .. } | SkitError::InvalidColorValue { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SkitError>;
