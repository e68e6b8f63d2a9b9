//! RNG module - uniform tile kind generation
//!
//! Spawned tiles draw their kind uniformly from the alphabet. The engine only
//! sees the [`TileSource`] trait; [`SimpleRng`] is the seeded default so that
//! the same seed always produces the same board.
//!
//! [`Sequence`] replays a fixed list of kinds, for scripted boards and tests.

use crate::types::TileKind;

/// A source of tile kinds for spawning.
pub trait TileSource {
    fn next_kind(&mut self) -> TileKind;
}

impl<T: TileSource + ?Sized> TileSource for Box<T> {
    fn next_kind(&mut self) -> TileKind {
        (**self).next_kind()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with a
    /// short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TileSource for SimpleRng {
    fn next_kind(&mut self) -> TileKind {
        let idx = self.next_range(TileKind::COUNT as u32) as usize;
        TileKind::ALL[idx]
    }
}

/// Replays `kinds` in order, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct Sequence {
    kinds: Vec<TileKind>,
    pos: usize,
}

impl Sequence {
    /// An empty list behaves like a single-kind list of `TileKind::Red`.
    pub fn new(kinds: Vec<TileKind>) -> Self {
        Self { kinds, pos: 0 }
    }
}

impl TileSource for Sequence {
    fn next_kind(&mut self) -> TileKind {
        let Some(&kind) = self.kinds.get(self.pos) else {
            return TileKind::Red;
        };
        self.pos = (self.pos + 1) % self.kinds.len();
        kind
    }
}
