//! skit - slide markup scanner and parser
//!
//! A library for turning a small line-oriented slide markup into an ordered
//! list of slides that a terminal renderer can display.
//!
//! ```ignore
//! let presentation = skit::parse("/# Hello\n/_ 10\nworld\n\n/@ ./cat.png")?;
//!
//! for slide in &presentation {
//!     println!("{:?}", slide.body());
//! }
//! ```

pub mod cli;
pub mod discovery;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod types;

pub use discovery::{discover, discover_paths, DiscoveryResult, Manifest, OutputFormat, ScanResult};
pub use error::{Result, SkitError};
pub use lexer::{LexErrorKind, Location, Scanner, Span, Token, TokenKind};
pub use parser::{parse, parse_file, tokenize, PresentationBuilder};
pub use types::{ColorChannel, Presentation, Slide, SlideBody};
