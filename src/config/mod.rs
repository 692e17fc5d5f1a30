//! Configuration management for blockclock
//!
//! Every setting defaults to the built-in animation: a 24x80 screen, four
//! block renderers (red, green, blue, yellow) drawing every 250 ms and a clock
//! updating every second. A configuration file or command-line flags may
//! override these at startup; nothing changes once the tasks are running.

pub mod loader;

use crate::ansi::Color;
use crate::terminal::TerminalSize;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main configuration structure for blockclock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Screen dimensions
    pub terminal: TerminalSize,

    /// Block renderer configuration
    pub blocks: BlockConfig,

    /// Clock renderer configuration
    pub clock: ClockConfig,

    /// Random position configuration
    pub random: RandomConfig,
}

impl Config {
    /// Pause between block draws
    pub fn block_interval(&self) -> Duration {
        Duration::from_millis(self.blocks.interval_ms)
    }

    /// Pause between clock updates
    pub fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.clock.interval_ms)
    }
}

/// Block renderer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfig {
    /// One block renderer is launched per entry, in order
    pub colors: Vec<Color>,

    /// Pause between draws in milliseconds
    pub interval_ms: u64,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            colors: Color::ALL.to_vec(),
            interval_ms: 250,
        }
    }
}

/// Clock renderer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Pause between updates in milliseconds
    pub interval_ms: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { interval_ms: 1000 }
    }
}

/// Random position configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RandomConfig {
    /// Base seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}
