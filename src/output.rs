//! Status lines for the skit CLI.
//!
//! Status goes to stderr with a right-aligned verb, the way cargo reports
//! progress. Stdout carries only dumps and token listings so it can be
//! piped.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const VERB_WIDTH: usize = 12;

/// How a status verb is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Note,
    Warn,
    Bad,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Good => "\x1b[1;32m",
            Tone::Note => "\x1b[1;36m",
            Tone::Warn => "\x1b[1;33m",
            Tone::Bad => "\x1b[1;31m",
        }
    }
}

/// Format one status line, with ANSI highlighting when `color` is set.
pub fn status_line(tone: Tone, verb: &str, message: &str, color: bool) -> String {
    if color {
        format!("{}{:>width$}\x1b[0m {}", tone.ansi(), verb, message, width = VERB_WIDTH)
    } else {
        format!("{:>width$} {}", verb, message, width = VERB_WIDTH)
    }
}

/// Writes status lines to stderr, highlighted only on a terminal.
#[derive(Debug)]
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// e.g. "     Checked intro.skit (4 slides)"
    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tone::Good, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tone::Note, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tone::Warn, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.emit(Tone::Bad, verb, message);
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        let line = status_line(tone, verb, message, self.color);
        let _ = writeln!(io::stderr().lock(), "{}", line);
    }
}

/// `plural(1, "slide", "slides")` is "1 slide".
pub fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

/// A path relative to the working directory when it lies below it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}
