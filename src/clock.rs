//! Elapsed Time
//!
//! Decomposes a running time in whole seconds into hours, minutes and
//! seconds. Hours are unbounded; a run longer than a day shows `25:00:00`,
//! not `01:00:00`.

use std::fmt;
use std::time::Duration;

const SECS_PER_HOUR: u64 = 3600;
const SECS_PER_MINUTE: u64 = 60;

/// Elapsed running time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Elapsed {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Elapsed {
    /// Decompose whole seconds
    pub fn from_secs(secs: u64) -> Self {
        Self {
            hours: secs / SECS_PER_HOUR,
            minutes: (secs % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: secs % SECS_PER_MINUTE,
        }
    }

    /// Decompose a duration, dropping the sub-second part
    pub fn from_duration(duration: Duration) -> Self {
        Self::from_secs(duration.as_secs())
    }

    /// Total seconds represented
    pub fn total_secs(&self) -> u64 {
        self.hours * SECS_PER_HOUR + self.minutes * SECS_PER_MINUTE + self.seconds
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        Self::from_duration(duration)
    }
}
