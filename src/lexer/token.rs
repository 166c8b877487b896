//! Token vocabulary shared by the scanner and the presentation builder.

use std::fmt;

use super::error::LexErrorKind;
use super::span::Span;

/// Leading character of every directive line.
pub const CONTROL: char = '/';
/// `/#` - slide title.
pub const TITLE: char = '#';
/// `/@` - image path or URL.
pub const MEDIA: char = '@';
/// `/_` - background color code.
pub const COLOR_BG: char = '_';
/// `/^` - foreground color code.
pub const COLOR_FG: char = '^';
/// `/!` - comment.
pub const COMMENT: char = '!';

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Scanning failed; the token value holds the message.
    Error(LexErrorKind),
    EndOfInput,
    NewSlide,
    Text,
    Title,
    Media,
    ColorBg,
    ColorFg,
    Comment,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Error(_) => "Error",
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::NewSlide => "NewSlide",
            TokenKind::Text => "Text",
            TokenKind::Title => "Title",
            TokenKind::Media => "Media",
            TokenKind::ColorBg => "ColorBg",
            TokenKind::ColorFg => "ColorFg",
            TokenKind::Comment => "Comment",
        }
    }

    /// Map a directive character (the one after `/`) to its token kind.
    ///
    /// The doubled control character is not a directive of its own and
    /// returns `None`, as does anything unrecognised.
    pub fn from_directive(c: char) -> Option<Self> {
        match c {
            TITLE => Some(TokenKind::Title),
            MEDIA => Some(TokenKind::Media),
            COLOR_BG => Some(TokenKind::ColorBg),
            COLOR_FG => Some(TokenKind::ColorFg),
            COMMENT => Some(TokenKind::Comment),
            _ => None,
        }
    }

    /// True for the two kinds that end a token stream.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TokenKind::Error(_) | TokenKind::EndOfInput)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token: kind, raw lexeme and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => f.write_str("EOF"),
            TokenKind::Error(_) => f.write_str(&self.value),
            kind if self.value.is_empty() => write!(f, "{}", kind),
            kind if self.value.chars().count() > 10 => {
                let head: String = self.value.chars().take(10).collect();
                write!(f, "{} {:?}...", kind, head)
            }
            kind => write!(f, "{} {:?}", kind, self.value),
        }
    }
}
