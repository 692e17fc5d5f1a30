//! Renderer Tasks
//!
//! Each renderer is a [`Worker`]: one `tick` draws one frame of its part of
//! the screen, and [`run_until_cancelled`] repeats ticks at the worker's
//! cadence on a dedicated thread.

pub mod block;
pub mod clock;

pub use block::BlockRenderer;
pub use clock::ClockRenderer;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Default pause between block draws
pub const BLOCK_INTERVAL: Duration = Duration::from_millis(250);

/// Default pause between clock updates
pub const CLOCK_INTERVAL: Duration = Duration::from_millis(1000);

/// A periodic unit of drawing work
pub trait Worker: Send {
    /// Thread name for this worker
    fn name(&self) -> String;

    /// Pause between ticks
    fn interval(&self) -> Duration;

    /// Draw one frame. Must not hold a channel lock on return.
    fn tick(&mut self);
}

/// Shared stop flag for a group of workers
///
/// Nothing sets it unless asked to; an untouched token means the workers run
/// for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request every worker holding this token to stop
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether a stop was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Run `worker` until `token` is cancelled, returning the number of ticks.
///
/// The token is checked once per iteration, after the sleep, so a worker
/// always finishes the frame and pause it started.
pub fn run_until_cancelled<T: Worker>(mut worker: T, token: CancellationToken) -> u64 {
    let name = worker.name();
    let interval = worker.interval();
    debug!("Task '{}' started ({:?} cadence)", name, interval);

    let mut ticks = 0u64;
    loop {
        worker.tick();
        ticks += 1;

        thread::sleep(interval);
        if token.is_cancelled() {
            break;
        }
    }

    debug!("Task '{}' stopped after {} ticks", name, ticks);
    ticks
}
