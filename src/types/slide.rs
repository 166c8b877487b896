//! A single slide.

use serde::{Deserialize, Serialize};

/// One screen of content.
///
/// All fields are optional. A slide with media is rendered as an image and
/// its text is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slide {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Text lines in source order, joined with `\n`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Path or URL of an image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,

    /// Background color code (0 when unset).
    pub color_bg: u8,

    /// Foreground color code (0 when unset).
    pub color_fg: u8,
}

/// What a renderer should draw for a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideBody<'a> {
    /// Convert this image to text and show it.
    Media(&'a str),
    /// Show the text, if any.
    Text(Option<&'a str>),
}

impl Slide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text line, separated from earlier lines by a newline.
    pub fn push_text(&mut self, line: &str) {
        match &mut self.text {
            Some(text) if !text.is_empty() => {
                text.push('\n');
                text.push_str(line);
            }
            _ => self.text = Some(line.to_string()),
        }
    }

    /// The slide's renderable body: media wins over text.
    pub fn body(&self) -> SlideBody<'_> {
        match self.media.as_deref() {
            Some(media) if !media.is_empty() => SlideBody::Media(media),
            _ => SlideBody::Text(self.text.as_deref()),
        }
    }

    /// Check if nothing has been set on this slide.
    pub fn is_empty(&self) -> bool {
        *self == Slide::default()
    }
}
