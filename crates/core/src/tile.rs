//! Tile module - a single typed tile on the board

use crate::types::{Coord, TileKind};

/// Engine-unique tile identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

/// A tile: identity, kind and the cell it currently occupies.
///
/// The coordinate is owned by the grid: whenever a tile is stored in a cell
/// the grid rewrites `coord` to that cell. Tiles that are not on the grid
/// (freshly spawned or just removed) keep their last coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    kind: TileKind,
    coord: Coord,
}

impl Tile {
    pub fn new(id: TileId, kind: TileKind, coord: Coord) -> Self {
        Self { id, kind, coord }
    }

    pub fn id(&self) -> TileId {
        self.id
    }

    pub fn kind(&self) -> TileKind {
        self.kind
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Matching compares kinds only
    pub fn same_kind(&self, other: &Tile) -> bool {
        self.kind == other.kind
    }

    pub(crate) fn place(&mut self, coord: Coord) {
        self.coord = coord;
    }
}

/// Hands out tiles with fresh ids.
#[derive(Debug, Clone, Default)]
pub struct TileIds {
    next: u32,
}

impl TileIds {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Create a tile with a fresh id at `coord`
    pub fn make(&mut self, kind: TileKind, coord: Coord) -> Tile {
        let id = TileId(self.next);
        self.next = self.next.wrapping_add(1);
        Tile::new(id, kind, coord)
    }

    /// Number of tiles handed out so far
    pub fn issued(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_sequential() {
        let mut ids = TileIds::new();
        let a = ids.make(TileKind::Red, Coord::new(0, 0));
        let b = ids.make(TileKind::Red, Coord::new(0, 0));
        assert_ne!(a.id(), b.id());
        assert_eq!(b.id(), TileId(1));
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn same_kind_ignores_identity_and_position() {
        let mut ids = TileIds::new();
        let a = ids.make(TileKind::Blue, Coord::new(0, 0));
        let b = ids.make(TileKind::Blue, Coord::new(4, 7));
        let c = ids.make(TileKind::Green, Coord::new(0, 0));
        assert!(a.same_kind(&b));
        assert!(!a.same_kind(&c));
        assert_ne!(a, b);
    }
}
