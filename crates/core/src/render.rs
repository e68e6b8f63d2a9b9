//! Render adapter - the core's only contract with whatever draws the board
//!
//! The core never renders. It tells the adapter when a tile joins the board,
//! when it should animate from one cell to another, and when it goes away.
//! Durations are the same values the resolution loop waits for, so an adapter
//! that honours them finishes each animation exactly when the next step runs.
//! The one exception is [`RenderAdapter::merge_tally`], which plays after the
//! cascade is already done.

use crate::tile::Tile;
use crate::types::{Coord, TileKind};

pub trait RenderAdapter {
    /// A tile was placed on the board for the first time.
    ///
    /// Called at most once per tile id by the core; adapters may still
    /// treat it as idempotent.
    fn attach(&mut self, tile: &Tile);

    /// Animate `tile` from `from` to `to` over `duration_ms`.
    ///
    /// `from` may lie outside the board (spawns start one row above it).
    fn request_move(&mut self, tile: &Tile, from: Coord, to: Coord, duration_ms: u32);

    /// The tile left the board; play its removal over `duration_ms`.
    fn despawn(&mut self, tile: &Tile, duration_ms: u32);

    /// A cascade settled and `turn` (per-kind counts, by [`TileKind::index`])
    /// was folded into the totals. Only called for a non-empty turn.
    fn merge_tally(&mut self, _turn: &[u32; TileKind::COUNT], _duration_ms: u32) {}
}

/// Adapter that draws nothing (headless runs, benchmarks).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl RenderAdapter for NullRenderer {
    fn attach(&mut self, _tile: &Tile) {}

    fn request_move(&mut self, _tile: &Tile, _from: Coord, _to: Coord, _duration_ms: u32) {}

    fn despawn(&mut self, _tile: &Tile, _duration_ms: u32) {}
}

/// One adapter call as seen by [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Attach(Tile),
    Move {
        tile: Tile,
        from: Coord,
        to: Coord,
        duration_ms: u32,
    },
    Despawn {
        tile: Tile,
        duration_ms: u32,
    },
    Merge {
        turn: [u32; TileKind::COUNT],
        duration_ms: u32,
    },
}

/// Adapter that records every call, for headless inspection.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Vec<RenderCall>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<RenderCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn moves(&self) -> impl Iterator<Item = &RenderCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, RenderCall::Move { .. }))
    }

    pub fn despawns(&self) -> impl Iterator<Item = &RenderCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, RenderCall::Despawn { .. }))
    }
}

impl RenderAdapter for Recorder {
    fn attach(&mut self, tile: &Tile) {
        self.calls.push(RenderCall::Attach(tile.clone()));
    }

    fn request_move(&mut self, tile: &Tile, from: Coord, to: Coord, duration_ms: u32) {
        self.calls.push(RenderCall::Move {
            tile: tile.clone(),
            from,
            to,
            duration_ms,
        });
    }

    fn despawn(&mut self, tile: &Tile, duration_ms: u32) {
        self.calls.push(RenderCall::Despawn {
            tile: tile.clone(),
            duration_ms,
        });
    }

    fn merge_tally(&mut self, turn: &[u32; TileKind::COUNT], duration_ms: u32) {
        self.calls.push(RenderCall::Merge {
            turn: *turn,
            duration_ms,
        });
    }
}
