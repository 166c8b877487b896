//! The scanner: slide markup in, tokens out.
//!
//! The scanner is a small state machine. Each call to
//! [`Scanner::next_token`] runs state steps until one of them produces a
//! token, then hands that token back. Nothing is buffered: the caller pulls
//! one token at a time, and the stream ends with exactly one
//! [`TokenKind::EndOfInput`] or [`TokenKind::Error`].
//!
//! # Grammar
//!
//! ```text
//! /# title        title of the current slide
//! /@ path         image shown instead of the text
//! /_ 222          background color code
//! /^ 39           foreground color code
//! /! note         comment, ignored
//! //text          text line starting with a literal /
//! (blank line)    slide boundary
//! anything else   text line
//! ```

use std::iter::FusedIterator;

use super::error::LexErrorKind;
use super::span::Span;
use super::token::{Token, TokenKind, CONTROL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Skip whitespace, then decide what kind of line follows.
    Begin,
    /// A `/` was consumed; the next character selects the directive.
    Control,
    /// Scan the rest of the line as a token of this kind.
    Line(TokenKind),
    /// A line was emitted; blank lines after it are slide boundaries.
    Boundary,
    /// A terminal token was emitted.
    Done,
}

enum Step {
    Emit(Token, State),
    Goto(State),
}

/// Pull-based scanner over an in-memory markup string.
///
/// Positions are byte offsets that always sit on character boundaries;
/// `width` is the byte length of the last character read so the scanner
/// can step back over it once.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    state: State,
    start: usize,
    pos: usize,
    width: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            state: State::Begin,
            start: 0,
            pos: 0,
            width: 0,
        }
    }

    /// The text being scanned.
    pub fn source(&self) -> &'a str {
        self.input
    }

    /// Whether a terminal token has been produced.
    pub fn is_finished(&self) -> bool {
        self.state == State::Done
    }

    /// Produce the next token.
    ///
    /// Once the stream has ended (after `EndOfInput` or an error) every
    /// further call returns `EndOfInput`.
    pub fn next_token(&mut self) -> Token {
        loop {
            let step = match self.state {
                State::Begin => self.lex_begin(),
                State::Control => self.lex_control(),
                State::Line(kind) => self.lex_line(kind),
                State::Boundary => self.lex_boundary(),
                State::Done => {
                    return Token::new(TokenKind::EndOfInput, "", Span::point(self.input.len()))
                }
            };

            match step {
                Step::Emit(token, next) => {
                    self.state = next;
                    return token;
                }
                Step::Goto(next) => self.state = next,
            }
        }
    }

    fn lex_begin(&mut self) -> Step {
        self.skip_whitespace();
        self.ignore();

        match self.next_char() {
            None => Step::Emit(
                Token::new(TokenKind::EndOfInput, "", self.span()),
                State::Done,
            ),
            Some(CONTROL) => {
                self.ignore();
                Step::Goto(State::Control)
            }
            Some(_) => {
                self.backup();
                Step::Goto(State::Line(TokenKind::Text))
            }
        }
    }

    fn lex_control(&mut self) -> Step {
        match self.next_char() {
            None => self.fail(LexErrorKind::UnexpectedEndOfInput),
            Some(CONTROL) => {
                // `//` is text that keeps one literal slash
                self.backup();
                self.ignore();
                Step::Goto(State::Line(TokenKind::Text))
            }
            Some(c) => match TokenKind::from_directive(c) {
                Some(kind) => {
                    self.ignore();
                    Step::Goto(State::Line(kind))
                }
                None => self.fail(LexErrorKind::ExpectedControl),
            },
        }
    }

    fn lex_line(&mut self, kind: TokenKind) -> Step {
        self.skip_inline_whitespace();
        self.ignore();
        self.scan_to_line_end();

        let input = self.input;
        let lexeme = &input[self.start..self.pos];
        let lexeme = lexeme.strip_suffix('\r').unwrap_or(lexeme);

        let value = match kind {
            TokenKind::Title if lexeme.trim().is_empty() => {
                return self.fail(LexErrorKind::ExpectedTitle)
            }
            TokenKind::Media if lexeme.trim().is_empty() => {
                return self.fail(LexErrorKind::ExpectedMediaPath)
            }
            TokenKind::ColorBg | TokenKind::ColorFg => {
                let digits = lexeme.trim_end();
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return self.fail(LexErrorKind::ExpectedColor);
                }
                digits
            }
            _ => lexeme,
        };

        let token = Token::new(kind, value, Span::new(self.start, self.start + value.len()));
        self.ignore();
        Step::Emit(token, State::Boundary)
    }

    fn lex_boundary(&mut self) -> Step {
        if self.next_char() != Some('\n') {
            // end of input; Begin emits the terminal token
            return Step::Goto(State::Begin);
        }
        self.ignore();
        self.skip_inline_whitespace();

        if self.peek() == Some('\n') {
            let token = Token::new(TokenKind::NewSlide, "", self.span());
            self.ignore();
            return Step::Emit(token, State::Boundary);
        }

        Step::Goto(State::Begin)
    }

    fn fail(&mut self, kind: LexErrorKind) -> Step {
        let token = Token::new(TokenKind::Error(kind), kind.to_string(), self.span());
        Step::Emit(token, State::Done)
    }

    fn next_char(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    fn backup(&mut self) {
        self.pos -= self.width;
        self.width = 0;
    }

    fn peek(&mut self) -> Option<char> {
        let c = self.next_char();
        self.backup();
        c
    }

    fn ignore(&mut self) {
        self.start = self.pos;
    }

    fn span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.next_char() {
            if !c.is_whitespace() {
                self.backup();
                break;
            }
        }
    }

    fn skip_inline_whitespace(&mut self) {
        while let Some(c) = self.next_char() {
            if c == '\n' || !c.is_whitespace() {
                self.backup();
                break;
            }
        }
    }

    fn scan_to_line_end(&mut self) {
        while let Some(c) = self.next_char() {
            if c == '\n' {
                self.backup();
                break;
            }
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.is_finished() {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl FusedIterator for Scanner<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn scan(input: &str) -> Vec<(TokenKind, String)> {
        Scanner::new(input).map(|t| (t.kind, t.value)).collect()
    }

    fn kinds(input: &str) -> Vec<TokenKind> {
        Scanner::new(input).map(|t| t.kind).collect()
    }

    fn tok(kind: TokenKind, value: &str) -> (TokenKind, String) {
        (kind, value.to_string())
    }

    fn listing(input: &str) -> String {
        Scanner::new(input)
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(kinds(""), vec![TokenKind::EndOfInput]);
    }

    #[test]
    fn test_whitespace_only_input() {
        assert_eq!(kinds("  \n\t\n\n   "), vec![TokenKind::EndOfInput]);
    }

    #[test]
    fn test_text_lines() {
        assert_eq!(
            scan("Line one\nLine two"),
            vec![
                tok(TokenKind::Text, "Line one"),
                tok(TokenKind::Text, "Line two"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_leading_indentation_is_skipped() {
        assert_eq!(
            scan("\n\t\t/# Title\n\t\tbody"),
            vec![
                tok(TokenKind::Title, "Title"),
                tok(TokenKind::Text, "body"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[rstest]
    #[case("/# Hello", TokenKind::Title, "Hello")]
    #[case("/#Hello", TokenKind::Title, "Hello")]
    #[case("/@ pic.png", TokenKind::Media, "pic.png")]
    #[case("/@https://example.com/cat.gif", TokenKind::Media, "https://example.com/cat.gif")]
    #[case("/_ 222", TokenKind::ColorBg, "222")]
    #[case("/_0", TokenKind::ColorBg, "0")]
    #[case("/^ 39  ", TokenKind::ColorFg, "39")]
    #[case("/! first slide", TokenKind::Comment, "first slide")]
    #[case("/!", TokenKind::Comment, "")]
    #[case("//etc/hosts", TokenKind::Text, "/etc/hosts")]
    fn test_directives(#[case] input: &str, #[case] kind: TokenKind, #[case] value: &str) {
        assert_eq!(
            scan(input),
            vec![tok(kind, value), tok(TokenKind::EndOfInput, "")]
        );
    }

    #[rstest]
    #[case("/", LexErrorKind::UnexpectedEndOfInput)]
    #[case("/x", LexErrorKind::ExpectedControl)]
    #[case("/\nText", LexErrorKind::ExpectedControl)]
    #[case("/ # spaced", LexErrorKind::ExpectedControl)]
    #[case("/#", LexErrorKind::ExpectedTitle)]
    #[case("/#   \nbody", LexErrorKind::ExpectedTitle)]
    #[case("/@", LexErrorKind::ExpectedMediaPath)]
    #[case("/@ \t", LexErrorKind::ExpectedMediaPath)]
    #[case("/_", LexErrorKind::ExpectedColor)]
    #[case("/_ abc", LexErrorKind::ExpectedColor)]
    #[case("/_-1", LexErrorKind::ExpectedColor)]
    #[case("/^ 12a", LexErrorKind::ExpectedColor)]
    #[case("/^ 1 2", LexErrorKind::ExpectedColor)]
    fn test_lexical_failures(#[case] input: &str, #[case] expected: LexErrorKind) {
        let tokens: Vec<Token> = Scanner::new(input).collect();

        assert_eq!(tokens.len(), 1, "error must be the only token: {:?}", tokens);
        assert_eq!(tokens[0].kind, TokenKind::Error(expected));
        assert_eq!(tokens[0].value, expected.to_string());
    }

    #[test]
    fn test_error_stops_the_stream() {
        let tokens = scan("/# Fine\n/x\n/# Never reached");

        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Title, "Fine"),
                tok(
                    TokenKind::Error(LexErrorKind::ExpectedControl),
                    &LexErrorKind::ExpectedControl.to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_out_of_range_color_is_lexically_valid() {
        // Range checking happens when the presentation is built
        assert_eq!(
            scan("/_ 300"),
            vec![tok(TokenKind::ColorBg, "300"), tok(TokenKind::EndOfInput, "")]
        );
    }

    #[test]
    fn test_blank_line_separates_slides() {
        assert_eq!(
            kinds("one\n\ntwo"),
            vec![
                TokenKind::Text,
                TokenKind::NewSlide,
                TokenKind::Text,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_whitespace_only_line_is_blank() {
        assert_eq!(
            kinds("one\n  \t \ntwo"),
            vec![
                TokenKind::Text,
                TokenKind::NewSlide,
                TokenKind::Text,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_directive_followed_by_blank_line() {
        assert_eq!(
            scan("/# Title\n\n/@ pic.png"),
            vec![
                tok(TokenKind::Title, "Title"),
                tok(TokenKind::NewSlide, ""),
                tok(TokenKind::Media, "pic.png"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_blank_line_at_end_of_input() {
        assert_eq!(
            kinds("/# Last\n\n"),
            vec![TokenKind::Title, TokenKind::NewSlide, TokenKind::EndOfInput]
        );
    }

    #[test]
    fn test_single_trailing_newline_is_not_a_boundary() {
        assert_eq!(kinds("/# Last\n"), vec![TokenKind::Title, TokenKind::EndOfInput]);
    }

    #[test]
    fn test_trailing_whitespace_without_newline_is_not_a_boundary() {
        assert_eq!(kinds("text\n   "), vec![TokenKind::Text, TokenKind::EndOfInput]);
    }

    #[test]
    fn test_consecutive_blank_lines_give_one_boundary_each() {
        assert_eq!(
            kinds("a\n\n\n\nb"),
            vec![
                TokenKind::Text,
                TokenKind::NewSlide,
                TokenKind::NewSlide,
                TokenKind::NewSlide,
                TokenKind::Text,
                TokenKind::EndOfInput,
            ]
        );
    }

    #[test]
    fn test_leading_blank_lines_are_not_boundaries() {
        assert_eq!(kinds("\n\n\n/# Start"), vec![TokenKind::Title, TokenKind::EndOfInput]);
    }

    #[test]
    fn test_escaped_slash_followed_by_blank_line() {
        assert_eq!(
            scan("//path\n\nnext"),
            vec![
                tok(TokenKind::Text, "/path"),
                tok(TokenKind::NewSlide, ""),
                tok(TokenKind::Text, "next"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            scan("/# Title\r\nbody\r\n\r\n/_ 7\r\n"),
            vec![
                tok(TokenKind::Title, "Title"),
                tok(TokenKind::Text, "body"),
                tok(TokenKind::NewSlide, ""),
                tok(TokenKind::ColorBg, "7"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_unicode_content() {
        assert_eq!(
            scan("/# Grüße 👋\nnaïve café"),
            vec![
                tok(TokenKind::Title, "Grüße 👋"),
                tok(TokenKind::Text, "naïve café"),
                tok(TokenKind::EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn test_token_spans() {
        let source = "/# Hi\n/_ 12";
        let tokens: Vec<Token> = Scanner::new(source).collect();

        assert_eq!(tokens[0].span, Span::new(3, 5));
        assert_eq!(&source[tokens[0].span.start..tokens[0].span.end], "Hi");
        assert_eq!(&source[tokens[1].span.start..tokens[1].span.end], "12");
        assert_eq!(tokens[2].span, Span::point(source.len()));
    }

    #[test]
    fn test_error_span_points_at_directive() {
        let source = "text\n/?";
        let token = Scanner::new(source).last().unwrap();

        assert_eq!(token.kind, TokenKind::Error(LexErrorKind::ExpectedControl));
        assert_eq!(token.span, Span::new(6, 7));
    }

    #[test]
    fn test_pulling_past_the_end() {
        let mut scanner = Scanner::new("x");

        assert_eq!(scanner.next_token().kind, TokenKind::Text);
        assert_eq!(scanner.next_token().kind, TokenKind::EndOfInput);
        assert!(scanner.is_finished());
        assert_eq!(scanner.next_token().kind, TokenKind::EndOfInput);
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_iterator_ends_after_error() {
        let mut scanner = Scanner::new("/%");

        assert!(matches!(scanner.next().map(|t| t.kind), Some(TokenKind::Error(_))));
        assert_eq!(scanner.next(), None);
        assert_eq!(scanner.next(), None);
    }

    #[test]
    fn test_token_listing() {
        let input = "/! first slide\n/_ 222\n/^ 39\n/# Vacation\nCheck out my repos.\n\n/# Best Band!\n/@ ./cat.png\n";

        insta::assert_snapshot!(listing(input), @r###"
        Comment "first slid"...
        ColorBg "222"
        ColorFg "39"
        Title "Vacation"
        Text "Check out "...
        NewSlide
        Title "Best Band!"
        Media "./cat.png"
        EOF
        "###);
    }
}
