//! Animator: the terminal's render adapter.
//!
//! Keeps one sprite per tile on the board and interpolates its position
//! between the cells the core asks it to move between. Despawned tiles linger
//! as fading sprites for the requested duration. A settled turn drains from
//! the turn column into the totals over the merge duration. The animator has
//! its own clock; the run loop advances it alongside the game.

use std::collections::BTreeMap;

use crate::core::{RenderAdapter, Tile, TileId};
use crate::types::{Coord, TileKind};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Motion {
    kind: TileKind,
    from: Coord,
    to: Coord,
    start_ms: u64,
    duration_ms: u32,
}

/// Fraction of `duration_ms` elapsed since `start_ms`, in `0.0..=1.0`.
fn progress(start_ms: u64, duration_ms: u32, now_ms: u64) -> f32 {
    if duration_ms == 0 {
        return 1.0;
    }
    let elapsed = now_ms.saturating_sub(start_ms) as f32;
    (elapsed / duration_ms as f32).min(1.0)
}

impl Motion {
    fn progress(&self, now_ms: u64) -> f32 {
        progress(self.start_ms, self.duration_ms, now_ms)
    }

    fn position(&self, now_ms: u64) -> (f32, f32) {
        let t = self.progress(now_ms);
        let lerp = |a: i8, b: i8| a as f32 + (b as f32 - a as f32) * t;
        (lerp(self.from.x, self.to.x), lerp(self.from.y, self.to.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Fade {
    kind: TileKind,
    at: Coord,
    start_ms: u64,
    duration_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Merge {
    turn: [u32; TileKind::COUNT],
    start_ms: u64,
    duration_ms: u32,
}

/// One drawable tile in board cell units (`y` grows up).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub kind: TileKind,
    pub x: f32,
    pub y: f32,
    /// 0.0 is solid, 1.0 is gone
    pub fade: f32,
    /// Still travelling toward its cell
    pub moving: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Animator {
    now_ms: u64,
    tiles: BTreeMap<TileId, Motion>,
    fades: Vec<Fade>,
    merge: Option<Merge>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn advance(&mut self, elapsed_ms: u32) {
        self.now_ms += elapsed_ms as u64;
        let now = self.now_ms;
        self.fades
            .retain(|f| now < f.start_ms + f.duration_ms as u64);
        if self
            .merge
            .is_some_and(|m| now >= m.start_ms + m.duration_ms as u64)
        {
            self.merge = None;
        }
    }

    /// True while any sprite is moving or fading, or a merge is draining
    pub fn is_animating(&self) -> bool {
        !self.fades.is_empty()
            || self.merge.is_some()
            || self.tiles.values().any(|m| m.progress(self.now_ms) < 1.0)
    }

    /// Per-kind counts of the last merge that have not yet reached the
    /// totals on screen. All zero once the merge has played out.
    pub fn pending_merge(&self) -> [u32; TileKind::COUNT] {
        let mut pending = [0; TileKind::COUNT];
        if let Some(m) = &self.merge {
            let left = 1.0 - progress(m.start_ms, m.duration_ms, self.now_ms);
            for (slot, n) in pending.iter_mut().zip(m.turn) {
                *slot = (n as f32 * left).round() as u32;
            }
        }
        pending
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Interpolated position of a tile on the board
    pub fn position(&self, id: TileId) -> Option<(f32, f32)> {
        self.tiles.get(&id).map(|m| m.position(self.now_ms))
    }

    /// Fading sprites first, then board tiles in id order
    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        let now = self.now_ms;
        let fading = self.fades.iter().map(move |f| Sprite {
            kind: f.kind,
            x: f.at.x as f32,
            y: f.at.y as f32,
            fade: progress(f.start_ms, f.duration_ms, now),
            moving: false,
        });
        let live = self.tiles.values().map(move |m| {
            let (x, y) = m.position(now);
            Sprite {
                kind: m.kind,
                x,
                y,
                fade: 0.0,
                moving: m.progress(now) < 1.0,
            }
        });
        fading.chain(live)
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
        self.fades.clear();
        self.merge = None;
    }
}

impl RenderAdapter for Animator {
    fn attach(&mut self, tile: &Tile) {
        self.tiles.entry(tile.id()).or_insert(Motion {
            kind: tile.kind(),
            from: tile.coord(),
            to: tile.coord(),
            start_ms: self.now_ms,
            duration_ms: 0,
        });
    }

    fn request_move(&mut self, tile: &Tile, from: Coord, to: Coord, duration_ms: u32) {
        self.tiles.insert(
            tile.id(),
            Motion {
                kind: tile.kind(),
                from,
                to,
                start_ms: self.now_ms,
                duration_ms,
            },
        );
    }

    fn despawn(&mut self, tile: &Tile, duration_ms: u32) {
        self.tiles.remove(&tile.id());
        if duration_ms > 0 {
            self.fades.push(Fade {
                kind: tile.kind(),
                at: tile.coord(),
                start_ms: self.now_ms,
                duration_ms,
            });
        }
    }

    fn merge_tally(&mut self, turn: &[u32; TileKind::COUNT], duration_ms: u32) {
        self.merge = (duration_ms > 0).then_some(Merge {
            turn: *turn,
            start_ms: self.now_ms,
            duration_ms,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Sequence, TileIds, Timing};

    #[test]
    fn move_interpolates_over_duration() {
        let mut ids = TileIds::new();
        let tile = ids.make(TileKind::Blue, Coord::new(2, 3));
        let mut anim = Animator::new();

        anim.attach(&tile);
        anim.request_move(&tile, Coord::new(2, 4), Coord::new(2, 3), 100);
        assert_eq!(anim.position(tile.id()), Some((2.0, 4.0)));
        assert!(anim.is_animating());

        anim.advance(50);
        assert_eq!(anim.position(tile.id()), Some((2.0, 3.5)));

        anim.advance(60);
        assert_eq!(anim.position(tile.id()), Some((2.0, 3.0)));
        assert!(!anim.is_animating());
    }

    #[test]
    fn despawn_fades_then_disappears() {
        let mut ids = TileIds::new();
        let tile = ids.make(TileKind::Red, Coord::new(0, 0));
        let mut anim = Animator::new();

        anim.attach(&tile);
        anim.despawn(&tile, 200);
        assert!(anim.is_empty());
        let fading: Vec<_> = anim.sprites().collect();
        assert_eq!(fading.len(), 1);
        assert_eq!(fading[0].fade, 0.0);

        anim.advance(100);
        assert_eq!(anim.sprites().next().map(|s| s.fade), Some(0.5));

        anim.advance(100);
        assert_eq!(anim.sprites().count(), 0);
        assert!(!anim.is_animating());
    }

    #[test]
    fn zero_duration_snaps() {
        let mut ids = TileIds::new();
        let tile = ids.make(TileKind::Green, Coord::new(1, 1));
        let mut anim = Animator::new();

        anim.request_move(&tile, Coord::new(4, 1), Coord::new(1, 1), 0);
        assert_eq!(anim.position(tile.id()), Some((1.0, 1.0)));
        anim.despawn(&tile, 0);
        assert_eq!(anim.sprites().count(), 0);
    }

    #[test]
    fn merge_drains_turn_into_total() {
        let mut anim = Animator::new();
        let mut turn = [0; TileKind::COUNT];
        turn[TileKind::Red.index()] = 4;
        turn[TileKind::Blue.index()] = 2;

        anim.merge_tally(&turn, 400);
        assert_eq!(anim.pending_merge(), turn);
        assert!(anim.is_animating());

        anim.advance(200);
        let pending = anim.pending_merge();
        assert_eq!(pending[TileKind::Red.index()], 2);
        assert_eq!(pending[TileKind::Blue.index()], 1);

        anim.advance(200);
        assert_eq!(anim.pending_merge(), [0; TileKind::COUNT]);
        assert!(!anim.is_animating());

        anim.merge_tally(&turn, 0);
        assert_eq!(anim.pending_merge(), [0; TileKind::COUNT]);
    }

    #[test]
    fn relocated_tile_sprite_follows_the_board() {
        let mut game = GameState::with_renderer(
            3,
            3,
            Sequence::new(vec![TileKind::Yellow]),
            Animator::new(),
            Timing::default(),
        );
        let tile = game.new_tile(TileKind::Orange);
        game.set(0, 0, Some(tile.clone()));
        assert_eq!(game.renderer().position(tile.id()), Some((0.0, 0.0)));

        game.set(2, 2, Some(tile.clone()));
        assert_eq!(game.renderer().position(tile.id()), Some((2.0, 2.0)));
        assert_eq!(game.renderer().len(), 1);
        assert!(!game.renderer().is_animating());
    }
}
