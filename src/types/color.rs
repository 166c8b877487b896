//! Terminal color codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of a slide's two colors a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChannel {
    Background,
    Foreground,
}

impl fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorChannel::Background => write!(f, "background"),
            ColorChannel::Foreground => write!(f, "foreground"),
        }
    }
}

/// Number of codes in the 256-color terminal palette.
pub const COLOR_CODES: u32 = 256;

/// Parse a decimal color code and check it lies in `[0, 256)`.
///
/// Returns `None` for anything that is not a base-10 integer in range,
/// including values too large to represent at all.
pub fn parse_color_code(value: &str) -> Option<u8> {
    let code: u32 = value.trim().parse().ok()?;
    if code >= COLOR_CODES {
        return None;
    }
    u8::try_from(code).ok()
}
