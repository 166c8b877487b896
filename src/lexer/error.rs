//! Lexical failure kinds.

use thiserror::Error;

/// Why the scanner stopped.
///
/// The `Display` text is what an error token carries as its value.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("expected a directive character (#, @, _, ^, !) or a second / after /")]
    ExpectedControl,

    #[error("expected title text")]
    ExpectedTitle,

    #[error("expected an image or gif path")]
    ExpectedMediaPath,

    #[error("expected a color code between 0 and 255")]
    ExpectedColor,
}

impl LexErrorKind {
    /// Help text for diagnostics.
    pub fn help(&self) -> &'static str {
        match self {
            LexErrorKind::UnexpectedEndOfInput => "A `/` must be followed by a directive character",
            LexErrorKind::ExpectedControl => {
                "Use /# title, /@ media, /_ background, /^ foreground, /! comment, or // for a literal slash"
            }
            LexErrorKind::ExpectedTitle => "Write the title after /#, e.g. `/# Welcome`",
            LexErrorKind::ExpectedMediaPath => "Write an image path after /@, e.g. `/@ ./cat.png`",
            LexErrorKind::ExpectedColor => "Color codes are plain numbers, e.g. `/_ 222`",
        }
    }
}
