//! Escape Sequence Driver
//!
//! Thin writer wrapper that emits one escape sequence per call and flushes
//! immediately, so writes issued under a channel lock reach the terminal
//! in order and without delay.

use crate::ansi::{self, Color};
use std::io::Write;

/// Emits ANSI control sequences to an output stream
///
/// None of the operations report failure. A write that fails is dropped and
/// traced; the animation has no recovery path for a broken terminal.
#[derive(Debug)]
pub struct TerminalDriver<W: Write> {
    writer: W,
}

impl<W: Write> TerminalDriver<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Clear the full screen
    pub fn clear_screen(&mut self) {
        self.emit(ansi::CLEAR_SCREEN);
    }

    /// Position the cursor at a 1-based (row, col)
    pub fn move_cursor(&mut self, row: u32, col: u32) {
        self.emit(&ansi::cursor_position(row, col));
    }

    /// Set the foreground color
    pub fn set_color(&mut self, color: Color) {
        self.emit(color.escape_code());
    }

    /// Set the foreground color from a numeric identity.
    ///
    /// Identities outside 1..=4 emit nothing.
    pub fn set_color_id(&mut self, id: i32) {
        if let Some(color) = Color::from_id(id) {
            self.set_color(color);
        }
    }

    /// Restore the default foreground color
    pub fn reset_color(&mut self) {
        self.emit(ansi::RESET);
    }

    /// Show the cursor
    pub fn show_cursor(&mut self) {
        self.emit(ansi::SHOW_CURSOR);
    }

    /// Draw a single glyph at the current cursor position
    pub fn write_glyph(&mut self, glyph: char) {
        let mut buf = [0u8; 4];
        self.emit(glyph.encode_utf8(&mut buf));
    }

    /// Write literal text at the current cursor position
    pub fn write_text(&mut self, text: &str) {
        self.emit(text);
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, seq: &str) {
        let result = self
            .writer
            .write_all(seq.as_bytes())
            .and_then(|_| self.writer.flush());
        if let Err(e) = result {
            trace!("Dropped terminal write of {} bytes: {}", seq.len(), e);
        }
    }
}
