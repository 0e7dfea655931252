//! RNG module - seeded Park-Miller generator
//!
//! A multiplicative linear congruential generator (`a = 16807`,
//! `m = 2^31 - 1`). The seed is derived from the grid size, so the layout of
//! a garden is a pure function of its dimensions: two surfaces of the same
//! size show the same landscape.

use crate::types::GridSize;

const MULTIPLIER: u64 = 16_807;
const MODULUS: u64 = 2_147_483_647;

/// Seeded generator producing floats in `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneRng {
    state: u64,
}

impl SceneRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        // A state congruent to 0 would emit zeros forever.
        let state = match seed % MODULUS {
            0 => 1,
            s => s,
        };
        Self { state }
    }

    /// Seed for a grid: `cols * 7 + rows * 13`.
    pub fn seed_for(size: GridSize) -> u64 {
        (size.cols as u64) * 7 + (size.rows as u64) * 13
    }

    pub fn for_size(size: GridSize) -> Self {
        Self::new(Self::seed_for(size))
    }

    /// Advance and return the raw state in `[1, 2^31 - 2]`.
    pub fn next_u32(&mut self) -> u32 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.state as u32
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / MODULUS as f64
    }

    /// `floor(next_f64() * n)`, i.e. a value in `[0, n)` (0 when `n == 0`).
    pub fn next_below(&mut self, n: usize) -> usize {
        (self.next_f64() * n as f64).floor() as usize
    }

    /// Value in `[lo, lo + span)`.
    pub fn next_in(&mut self, lo: f64, span: f64) -> f64 {
        lo + self.next_f64() * span
    }
}
