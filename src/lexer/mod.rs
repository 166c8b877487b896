//! Lexical analysis for slide markup.
//!
//! The [`Scanner`] turns markup text into a finite stream of [`Token`]s.
//! It is pulled one token at a time, usually by
//! [`PresentationBuilder`](crate::parser::PresentationBuilder).
//!
//! # Usage
//!
//! ```ignore
//! use skit::lexer::{Scanner, TokenKind};
//!
//! for token in Scanner::new("/# Hello\nworld") {
//!     println!("{}", token);
//! }
//! ```

mod error;
mod scanner;
pub mod span;
mod token;

pub use error::LexErrorKind;
pub use scanner::Scanner;
pub use span::{Location, Span};
pub use token::{Token, TokenKind, COLOR_BG, COLOR_FG, COMMENT, CONTROL, MEDIA, TITLE};
