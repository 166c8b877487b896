//! Document model produced by the parser.
//!
//! - `Presentation` - ordered slides
//! - `Slide` - title, text, media and colors of one screen
//! - `ColorChannel` - background or foreground color code

mod color;
mod presentation;
mod slide;

pub use color::{parse_color_code, ColorChannel, COLOR_CODES};
pub use presentation::Presentation;
pub use slide::{Slide, SlideBody};
