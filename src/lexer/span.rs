//! Source location tracking for tokens and error messages.

use std::fmt;

/// A location in source text (byte offset, line, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Byte offset from start of input
    pub offset: usize,
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, in characters not bytes)
    pub column: u32,
}

impl Location {
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self { offset, line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open byte range in source text.
///
/// Spans are cheap to carry on every token; line and column are only
/// computed when something needs to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start offset (inclusive)
    pub start: usize,
    /// End offset (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// An empty span at a single offset.
    pub fn point(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Byte length of the span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Line/column of the span start within `source`.
    pub fn location(&self, source: &str) -> Location {
        offset_to_location(source, self.start)
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// Convert a byte offset to a Location (line/column).
pub fn offset_to_location(source: &str, offset: usize) -> Location {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];

    let line = before.bytes().filter(|&b| b == b'\n').count() as u32 + 1;
    let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[last_newline..].chars().count() as u32 + 1;

    Location { offset, line, column }
}
