//! Presentation assembly from a token stream.

use crate::error::{Result, SkitError};
use crate::lexer::{Scanner, Token, TokenKind};
use crate::types::{parse_color_code, ColorChannel, Presentation, Slide};

/// Drives a [`Scanner`] to completion, collecting slides.
///
/// The builder keeps one slide in progress. Every `NewSlide` token closes it
/// and starts a fresh one; `EndOfInput` closes the last one. Any failure
/// discards everything collected so far.
#[derive(Debug)]
pub struct PresentationBuilder<'a> {
    scanner: Scanner<'a>,
    slides: Vec<Slide>,
    current: Slide,
}

impl<'a> PresentationBuilder<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::from_scanner(Scanner::new(source))
    }

    pub fn from_scanner(scanner: Scanner<'a>) -> Self {
        Self {
            scanner,
            slides: Vec::new(),
            current: Slide::new(),
        }
    }

    /// Consume tokens until the input ends or fails.
    pub fn build(mut self) -> Result<Presentation> {
        log::debug!("parsing {} bytes of slide markup", self.scanner.source().len());

        loop {
            let token = self.scanner.next_token();
            log::trace!("token {}", token);

            match token.kind {
                TokenKind::Error(kind) => {
                    let source = self.scanner.source();
                    return Err(SkitError::lex(kind, token.value, token.span, source));
                }
                TokenKind::EndOfInput => {
                    self.finish_slide();
                    break;
                }
                TokenKind::NewSlide => self.finish_slide(),
                TokenKind::Text => self.current.push_text(&token.value),
                TokenKind::Title => self.current.title = Some(token.value),
                TokenKind::Media => self.current.media = Some(token.value),
                TokenKind::ColorBg => {
                    self.current.color_bg = self.color(ColorChannel::Background, token)?
                }
                TokenKind::ColorFg => {
                    self.current.color_fg = self.color(ColorChannel::Foreground, token)?
                }
                TokenKind::Comment => {}
            }
        }

        log::debug!("parsed {} slide(s)", self.slides.len());
        Ok(Presentation::new(self.slides))
    }

    fn finish_slide(&mut self) {
        let slide = std::mem::take(&mut self.current);
        self.slides.push(slide);
    }

    fn color(&self, channel: ColorChannel, token: Token) -> Result<u8> {
        parse_color_code(&token.value).ok_or_else(|| SkitError::InvalidColorValue {
            channel,
            location: token.span.location(self.scanner.source()),
            span: token.span.into(),
            value: token.value,
        })
    }
}
