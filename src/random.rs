//! Random Position Source
//!
//! Cosmetic randomness for block placement. Each block renderer owns its own
//! generator so draws never contend on a shared lock; seeding one makes a
//! run reproducible.

use crate::terminal::TerminalSize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bounded pseudo-random integer source
#[derive(Debug, Clone)]
pub struct PositionSource {
    rng: StdRng,
}

impl PositionSource {
    /// Deterministic source
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Source seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Source for the block renderer at `index`.
    ///
    /// With a base seed every task gets a distinct but reproducible stream.
    pub fn for_task(seed: Option<u64>, index: usize) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed.wrapping_add(index as u64)),
            None => Self::from_entropy(),
        }
    }

    /// Value in `[0, limit)`; a zero limit yields 0
    pub fn get_random(&mut self, limit: u32) -> u32 {
        if limit == 0 {
            return 0;
        }
        self.rng.gen_range(0..limit)
    }

    /// Random 1-based cell inside `size`, row drawn before column
    pub fn next_cell(&mut self, size: TerminalSize) -> (u32, u32) {
        let row = self.get_random(size.rows) + 1;
        let col = self.get_random(size.cols) + 1;
        (row, col)
    }
}
