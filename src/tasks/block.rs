//! Block Renderer
//!
//! Paints one colored block at a random cell per tick. All block renderers
//! draw through the same channel, so blocks are drawn strictly one at a
//! time across every color.

use super::{Worker, BLOCK_INTERVAL};
use crate::ansi::{Color, BLOCK_GLYPH};
use crate::random::PositionSource;
use crate::terminal::TerminalSink;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// Draws blocks of a single color at random positions
pub struct BlockRenderer<W: Write> {
    sink: Arc<TerminalSink<W>>,
    color: Color,
    positions: PositionSource,
    interval: Duration,
}

impl<W: Write> BlockRenderer<W> {
    /// Create a renderer with the default 250 ms cadence
    pub fn new(sink: Arc<TerminalSink<W>>, color: Color, positions: PositionSource) -> Self {
        Self {
            sink,
            color,
            positions,
            interval: BLOCK_INTERVAL,
        }
    }

    /// Override the pause between draws
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Color this renderer paints with
    pub fn color(&self) -> Color {
        self.color
    }

    /// Draw one block and return the 1-based cell it landed on.
    ///
    /// The cell is drawn while the block channel is held, so the emitted
    /// move/color/glyph/reset sequence is never split by another block.
    pub fn draw(&mut self) -> (u32, u32) {
        let size = self.sink.size();
        let mut term = self.sink.block_channel();

        let (row, col) = self.positions.next_cell(size);
        term.move_cursor(row, col);
        term.set_color(self.color);
        term.write_glyph(BLOCK_GLYPH);
        term.reset_color();

        (row, col)
    }
}

impl<W: Write + Send> Worker for BlockRenderer<W> {
    fn name(&self) -> String {
        format!("block-{}", self.color)
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    fn tick(&mut self) {
        let (row, col) = self.draw();
        trace!("{} block at ({}, {})", self.color, row, col);
    }
}
