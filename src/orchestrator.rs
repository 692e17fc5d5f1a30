//! Process Orchestration
//!
//! Owns the terminal sink, prepares the screen and launches one OS thread
//! per renderer: a block renderer for every configured color plus the clock.
//! The threads run until their shared cancellation token is set, which only
//! happens on request; by default [`RunningTasks::join`] never returns.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::random::PositionSource;
use crate::tasks::{run_until_cancelled, BlockRenderer, CancellationToken, ClockRenderer, Worker};
use crate::terminal::TerminalSink;
use std::io::Write;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Launches and owns the renderer threads' shared state
pub struct Orchestrator<W: Write> {
    config: Config,
    sink: Arc<TerminalSink<W>>,
}

impl<W: Write + Clone + Send + 'static> Orchestrator<W> {
    /// Create an orchestrator drawing to `writer`
    pub fn new(config: Config, writer: W) -> Self {
        let sink = Arc::new(TerminalSink::new(writer, config.terminal));
        Self { config, sink }
    }

    /// Clear the screen, home the cursor and start every renderer thread.
    ///
    /// Fails only if the OS refuses to create a thread; any threads already
    /// started are told to stop.
    pub fn launch(&self) -> Result<RunningTasks> {
        {
            let mut term = self.sink.block_channel();
            term.clear_screen();
            term.move_cursor(1, 1);
        }

        let token = CancellationToken::new();
        let mut running = RunningTasks {
            handles: Vec::with_capacity(self.config.blocks.colors.len() + 1),
            token: token.clone(),
        };

        for (index, color) in self.config.blocks.colors.iter().enumerate() {
            let positions = PositionSource::for_task(self.config.random.seed, index);
            let renderer = BlockRenderer::new(self.sink.clone(), *color, positions)
                .with_interval(self.config.block_interval());
            running.push(renderer)?;
        }

        let clock =
            ClockRenderer::new(self.sink.clone()).with_interval(self.config.clock_interval());
        running.push(clock)?;

        info!(
            "Launched {} block renderers and the clock on a {}x{} screen",
            self.config.blocks.colors.len(),
            self.config.terminal.rows,
            self.config.terminal.cols
        );
        Ok(running)
    }

    /// Put the terminal back in a usable state after the tasks stop.
    ///
    /// Resets the color, shows the cursor and leaves it on a fresh line
    /// below the clock.
    pub fn restore_terminal(&self) {
        let rows = self.sink.size().rows;
        let mut block = self.sink.block_channel();
        let _clock = self.sink.clock_channel();

        block.reset_color();
        block.show_cursor();
        block.move_cursor(rows, 1);
        block.write_text("\r\n");
    }
}

/// Handle to a launched renderer thread
struct TaskHandle {
    name: String,
    handle: JoinHandle<u64>,
}

/// The set of running renderer threads
pub struct RunningTasks {
    handles: Vec<TaskHandle>,
    token: CancellationToken,
}

impl RunningTasks {
    /// Spawn `worker` on its own named thread
    fn push<T: Worker + 'static>(&mut self, worker: T) -> Result<()> {
        let name = worker.name();
        let token = self.token.clone();
        let spawned = thread::Builder::new()
            .name(name.clone())
            .spawn(move || run_until_cancelled(worker, token));

        match spawned {
            Ok(handle) => {
                self.handles.push(TaskHandle { name, handle });
                Ok(())
            }
            Err(e) => {
                error!("Failed to spawn thread '{}': {}", name, e);
                self.token.cancel();
                Err(Error::ThreadSpawn {
                    name,
                    reason: e.to_string(),
                })
            }
        }
    }

    /// Token shared by every running task
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Names of the running threads, in launch order
    pub fn names(&self) -> Vec<&str> {
        self.handles.iter().map(|t| t.name.as_str()).collect()
    }

    /// Number of running threads
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether no threads were launched
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Cancel every task once `duration` has passed
    pub fn cancel_after(&self, duration: Duration) -> Result<()> {
        let token = self.token.clone();
        thread::Builder::new()
            .name("deadline".to_string())
            .spawn(move || {
                thread::sleep(duration);
                debug!("Run time of {:?} reached", duration);
                token.cancel();
            })
            .map(|_| ())
            .map_err(|e| Error::ThreadSpawn {
                name: "deadline".to_string(),
                reason: e.to_string(),
            })
    }

    /// Block until every task has stopped, returning the total tick count.
    ///
    /// Without a cancellation this waits forever.
    pub fn join(self) -> Result<u64> {
        let mut total = 0;
        let mut panicked = None;

        for task in self.handles {
            match task.handle.join() {
                Ok(ticks) => total += ticks,
                Err(_) => {
                    error!("Task '{}' panicked", task.name);
                    panicked.get_or_insert(task.name);
                }
            }
        }

        match panicked {
            Some(name) => Err(Error::TaskPanicked { name }),
            None => Ok(total),
        }
    }

    /// Cancel every task and wait for them to stop
    pub fn shutdown(self) -> Result<u64> {
        self.token.cancel();
        self.join()
    }
}
