//! Terminal Output
//!
//! Everything visible goes through this module: the escape-sequence
//! driver, the sink that partitions the shared output stream into two
//! independently locked channels, and the writers the sink can sit on.

pub mod driver;
pub mod output;
pub mod sink;

// Re-exports for convenience
pub use driver::TerminalDriver;
pub use output::{SharedBuffer, StdoutWriter};
pub use sink::TerminalSink;

use serde::{Deserialize, Serialize};

/// Default number of terminal rows
pub const DEFAULT_ROWS: u32 = 24;

/// Default number of terminal columns
pub const DEFAULT_COLS: u32 = 80;

/// Terminal dimensions, fixed for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalSize {
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub cols: u32,
}

impl TerminalSize {
    /// Create a size from explicit dimensions
    pub fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Whether (row, col) is a 1-based cell inside the screen
    pub fn contains(&self, row: u32, col: u32) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.cols).contains(&col)
    }
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}
