//! Scoring module - per-kind removal tallies
//!
//! Two counters per kind: `turn` collects everything removed since the player
//! last released a shift (including chain reactions), and `total` holds all
//! completed turns. When a cascade settles the turn is merged into the total
//! and cleared.

use crate::types::{MatchEvent, TileKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    turn: [u32; TileKind::COUNT],
    total: [u32; TileKind::COUNT],
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one match pass to the running turn.
    pub fn record(&mut self, event: &MatchEvent) {
        for (kind, n) in event.removed() {
            let slot = &mut self.turn[kind.index()];
            *slot = slot.saturating_add(n);
        }
    }

    /// Fold the turn into the total. Returns what the turn held.
    pub fn merge_turn(&mut self) -> [u32; TileKind::COUNT] {
        let turn = std::mem::take(&mut self.turn);
        for (total, n) in self.total.iter_mut().zip(turn) {
            *total = total.saturating_add(n);
        }
        turn
    }

    pub fn turn(&self, kind: TileKind) -> u32 {
        self.turn[kind.index()]
    }

    pub fn total(&self, kind: TileKind) -> u32 {
        self.total[kind.index()]
    }

    pub fn turn_sum(&self) -> u32 {
        self.turn.iter().sum()
    }

    pub fn total_sum(&self) -> u32 {
        self.total.iter().sum()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
