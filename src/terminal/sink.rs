//! Terminal Sink
//!
//! The shared terminal split into two write channels. Block renderers all
//! share the block channel, so only one block is ever drawn at a time. The
//! clock renderer uses the clock channel, which is locked independently:
//! block and clock writes never wait on each other and may interleave on
//! the physical stream.

use super::driver::TerminalDriver;
use super::TerminalSize;
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Owner of the output stream and its two lockable channels
#[derive(Debug)]
pub struct TerminalSink<W: Write> {
    /// Screen dimensions, fixed at construction
    size: TerminalSize,
    /// Channel for block drawing
    block: Mutex<TerminalDriver<W>>,
    /// Channel for clock drawing
    clock: Mutex<TerminalDriver<W>>,
}

impl<W: Write + Clone> TerminalSink<W> {
    /// Create a sink whose two channels write to clones of `writer`
    pub fn new(writer: W, size: TerminalSize) -> Self {
        Self {
            size,
            block: Mutex::new(TerminalDriver::new(writer.clone())),
            clock: Mutex::new(TerminalDriver::new(writer)),
        }
    }
}

impl<W: Write> TerminalSink<W> {
    /// Screen dimensions
    pub fn size(&self) -> TerminalSize {
        self.size
    }

    /// Lock the block channel.
    ///
    /// The lock is released when the guard drops. A panic in another holder
    /// does not make the channel unusable.
    pub fn block_channel(&self) -> MutexGuard<'_, TerminalDriver<W>> {
        self.block.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Lock the clock channel
    pub fn clock_channel(&self) -> MutexGuard<'_, TerminalDriver<W>> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
