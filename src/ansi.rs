//! ANSI escape code generation
//!
//! The fixed set of VT100 sequences the animation emits: screen clear,
//! cursor positioning, the four block colors and attribute reset.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Escape sequence that clears the whole screen
pub const CLEAR_SCREEN: &str = "\x1b[2J";

/// Escape sequence that restores default attributes
pub const RESET: &str = "\x1b[0m";

/// Escape sequence that shows the cursor
pub const SHOW_CURSOR: &str = "\x1b[?25h";

/// Filled block drawn by the block renderers
pub const BLOCK_GLYPH: char = '■';

/// Build the cursor positioning sequence for a 1-based cell.
///
/// Coordinates are passed through as-is; out-of-range values are left to
/// the terminal to interpret.
pub fn cursor_position(row: u32, col: u32) -> String {
    format!("\x1b[{};{}H", row, col)
}

/// Foreground colors assigned to block renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Color {
    /// Every recognized color, in task launch order
    pub const ALL: [Color; 4] = [Color::Red, Color::Green, Color::Blue, Color::Yellow];

    /// Map a numeric identity (1 = red, 2 = green, 3 = blue, 4 = yellow).
    ///
    /// Any other value has no color; callers treat `None` as "emit nothing".
    pub fn from_id(id: i32) -> Option<Color> {
        match id {
            1 => Some(Color::Red),
            2 => Some(Color::Green),
            3 => Some(Color::Blue),
            4 => Some(Color::Yellow),
            _ => None,
        }
    }

    /// Numeric identity of this color
    pub fn id(self) -> i32 {
        match self {
            Color::Red => 1,
            Color::Green => 2,
            Color::Blue => 3,
            Color::Yellow => 4,
        }
    }

    /// Foreground escape sequence for this color
    pub fn escape_code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Blue => "\x1b[34m",
            Color::Yellow => "\x1b[33m",
        }
    }

    /// Lowercase name, as used in configuration files and thread names
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownColor {
                name: s.to_string(),
            })
    }
}
