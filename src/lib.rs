//! blockclock - a multi-threaded terminal animation
//!
//! Four worker threads paint colored blocks at random cells of the terminal
//! while a fifth keeps an elapsed-time clock in the bottom-left corner. All
//! output is plain ANSI/VT100 escape sequences on standard output.
//!
//! ## Module Organization
//!
//! - [`ansi`] - Escape sequences and the block [`Color`] palette
//! - [`terminal`] - Escape sequence driver, the two-channel [`TerminalSink`], writers
//! - [`random`] - Seedable random cell source
//! - [`clock`] - Elapsed time decomposition and `HH:MM:SS` formatting
//! - [`tasks`] - Block and clock renderers, the worker loop, cancellation
//! - [`orchestrator`] - Screen setup and thread launch
//! - [`config`] - Configuration defaults, file loading and validation
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use blockclock::{Config, Orchestrator, StdoutWriter};
//!
//! # fn main() -> blockclock::Result<()> {
//! let orchestrator = Orchestrator::new(Config::default(), StdoutWriter);
//! let running = orchestrator.launch()?;
//!
//! // Runs until the process is killed
//! running.join()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Threading
//!
//! - **Block renderers:** one OS thread per color, drawing every 250 ms.
//!   They share the block channel, so exactly one block is drawn at a time.
//! - **Clock renderer:** one OS thread, updating every second through the
//!   clock channel, which is locked independently of the block channel.
//! - **Main thread:** launches the renderers, then only joins them.
//!
//! No lock is held across a sleep and no thread ever holds both channels,
//! so the renderers cannot deadlock.

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod clock;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod random;
pub mod tasks;
pub mod terminal;

// Re-exports for core functionality
pub use ansi::Color;
pub use clock::Elapsed;
pub use config::loader::ConfigLoader;
pub use config::Config;
pub use error::{Error, Result};
pub use orchestrator::{Orchestrator, RunningTasks};
pub use random::PositionSource;
pub use tasks::{BlockRenderer, CancellationToken, ClockRenderer, Worker};
pub use terminal::{SharedBuffer, StdoutWriter, TerminalDriver, TerminalSink, TerminalSize};

/// The current version of blockclock from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
