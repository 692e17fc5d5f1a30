//! Clock Renderer
//!
//! Overwrites the bottom-left cell with the time elapsed since the renderer
//! first ran.

use super::{Worker, CLOCK_INTERVAL};
use crate::clock::Elapsed;
use crate::terminal::TerminalSink;
use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Draws the elapsed running time as `HH:MM:SS`
pub struct ClockRenderer<W: Write> {
    sink: Arc<TerminalSink<W>>,
    started: Option<Instant>,
    interval: Duration,
}

impl<W: Write> ClockRenderer<W> {
    /// Create a renderer; the clock starts on its first tick
    pub fn new(sink: Arc<TerminalSink<W>>) -> Self {
        Self {
            sink,
            started: None,
            interval: CLOCK_INTERVAL,
        }
    }

    /// Override the pause between updates
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Time since the first tick, zero before it
    pub fn elapsed(&self) -> Elapsed {
        self.started
            .map(|started| Elapsed::from(started.elapsed()))
            .unwrap_or_default()
    }

    /// Draw `elapsed` at (rows, 1)
    pub fn draw(&self, elapsed: Elapsed) {
        let row = self.sink.size().rows;
        let text = elapsed.to_string();

        let mut term = self.sink.clock_channel();
        term.move_cursor(row, 1);
        term.write_text(&text);
    }
}

impl<W: Write + Send> Worker for ClockRenderer<W> {
    fn name(&self) -> String {
        "clock".to_string()
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    fn tick(&mut self) {
        self.started.get_or_insert_with(Instant::now);
        let elapsed = self.elapsed();
        self.draw(elapsed);
        trace!("clock at {}", elapsed);
    }
}
