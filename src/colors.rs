//! ANSI color table for log lines. The table is a `'static` constant and is
//! never written to after load.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resets terminal to the default color. Appended after every colored line.
pub const RESET: &str = "\x1b[0m";

/// Every recognized color name, plus the `reset` sentinel, and its escape code.
pub const COLOR_TABLE: &[(&str, &str)] = &[
    entry(Color::Black),
    entry(Color::Blue),
    entry(Color::Cyan),
    entry(Color::Gray),
    entry(Color::Green),
    entry(Color::Magenta),
    entry(Color::Red),
    ("reset", RESET),
    entry(Color::White),
    entry(Color::Yellow),
];

const fn entry(color: Color) -> (&'static str, &'static str) {
    (color.name(), color.ansi())
}

/// A color a log line can be printed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Blue,
    Cyan,
    Gray,
    Green,
    Magenta,
    Red,
    White,
    Yellow,
}

impl Color {
    /// All colors, in table order
    pub const ALL: [Self; 9] = [
        Self::Black,
        Self::Blue,
        Self::Cyan,
        Self::Gray,
        Self::Green,
        Self::Magenta,
        Self::Red,
        Self::White,
        Self::Yellow,
    ];

    /// Used whenever a requested color is unknown or missing.
    pub const DEFAULT: Self = Self::White;

    /// Returns the lowercase name used as the table key
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Gray => "gray",
            Self::Green => "green",
            Self::Magenta => "magenta",
            Self::Red => "red",
            Self::White => "white",
            Self::Yellow => "yellow",
        }
    }

    /// Returns the ANSI escape sequence for this color
    pub const fn ansi(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Blue => "\x1b[34m",
            Self::Cyan => "\x1b[36m",
            Self::Gray => "\x1b[90m",
            Self::Green => "\x1b[32m",
            Self::Magenta => "\x1b[35m",
            Self::Red => "\x1b[31m",
            Self::White => "\x1b[37m",
            Self::Yellow => "\x1b[33m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string is not one of the color names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color: {}", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name() == s)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// Looks up an escape code by exact, case-sensitive name.
///
/// Accepts every `Color` name plus `reset`.
pub fn lookup(name: &str) -> Option<&'static str> {
    if name == "reset" {
        return Some(RESET);
    }
    name.parse::<Color>().ok().map(Color::ansi)
}

/// Resolves an optional color name, falling back to white.
pub fn resolve(name: Option<&str>) -> &'static str {
    name.and_then(lookup).unwrap_or(Color::DEFAULT.ansi())
}
