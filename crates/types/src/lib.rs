//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Geometry
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 10 rows (indexed 0-9, **bottom to top**)
//! - New tiles spawn one row above the board (`y == height`) and fall into place.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `FALL_MS` | 90 | Duration of one gravity sweep (one row of fall) |
//! | `REMOVE_MS` | 220 | Duration of a match removal |
//! | `SLIDE_MS` | 0 | Snap duration when a committed shift lands |
//! | `MERGE_MS` | 400 | Turn tally flowing into the total after a cascade |
//!
//! # Examples
//!
//! ```
//! use tui_tiles_types::{Axis, TileKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let kind = TileKind::from_str("blue").unwrap();
//! assert_eq!(kind, TileKind::Blue);
//! assert_eq!(TileKind::from_index(kind.index()), Some(kind));
//!
//! assert_eq!(Axis::Horizontal.other(), Axis::Vertical);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 10);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (10 rows)
pub const BOARD_HEIGHT: u8 = 10;

/// Largest supported board side. Keeps coordinates inside `i8` with headroom
/// for the spawn row and two-cell lookahead.
pub const MAX_GRID_DIM: u8 = 32;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// One gravity sweep moves every falling tile by one row in this time.
pub const FALL_MS: u32 = 90;

/// Time a matched tile takes to disappear.
pub const REMOVE_MS: u32 = 220;

/// A committed shift snaps into place; the gesture preview already animated it.
pub const SLIDE_MS: u32 = 0;

/// The settled turn's counts take this long to fold into the totals on screen.
pub const MERGE_MS: u32 = 400;

/// Board-local distance units per cell.
pub const CELL_SIZE: f32 = 32.0;

/// Minimum cumulative pointer travel (board-local units) before a drag turns
/// into a line shift.
pub const SHIFT_THRESHOLD: f32 = 2.0;

/// The tile categories.
///
/// The order is stable and doubles as the index into per-kind tables
/// (tallies, [`MatchEvent::counts`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl TileKind {
    /// Number of kinds in the alphabet
    pub const COUNT: usize = 6;

    /// All kinds in index order
    pub const ALL: [TileKind; Self::COUNT] = [
        TileKind::Red,
        TileKind::Orange,
        TileKind::Yellow,
        TileKind::Green,
        TileKind::Blue,
        TileKind::Purple,
    ];

    /// Stable index in `0..COUNT`
    pub fn index(self) -> usize {
        match self {
            TileKind::Red => 0,
            TileKind::Orange => 1,
            TileKind::Yellow => 2,
            TileKind::Green => 3,
            TileKind::Blue => 4,
            TileKind::Purple => 5,
        }
    }

    /// Inverse of [`TileKind::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tiles_types::TileKind;
    ///
    /// assert_eq!(TileKind::from_str("RED"), Some(TileKind::Red));
    /// assert_eq!(TileKind::from_str("purple"), Some(TileKind::Purple));
    /// assert_eq!(TileKind::from_str("teal"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(TileKind::Red),
            "orange" => Some(TileKind::Orange),
            "yellow" => Some(TileKind::Yellow),
            "green" => Some(TileKind::Green),
            "blue" => Some(TileKind::Blue),
            "purple" => Some(TileKind::Purple),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Red => "red",
            TileKind::Orange => "orange",
            TileKind::Yellow => "yellow",
            TileKind::Green => "green",
            TileKind::Blue => "blue",
            TileKind::Purple => "purple",
        }
    }

    /// Distinguishing display color as `(r, g, b)`
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            TileKind::Red => (220, 80, 80),
            TileKind::Orange => (255, 165, 0),
            TileKind::Yellow => (240, 220, 80),
            TileKind::Green => (100, 220, 120),
            TileKind::Blue => (80, 120, 220),
            TileKind::Purple => (200, 120, 220),
        }
    }
}

/// Line orientation for a shift gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Shift a row (tiles move along x)
    Horizontal,
    /// Shift a column (tiles move along y)
    Vertical,
}

impl Axis {
    pub fn other(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Integer cell coordinate. `y == 0` is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// Continuous board-local point. Origin at the bottom-left corner of cell
/// (0, 0); x grows right, y grows up; one cell is [`CELL_SIZE`] units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Cell under this point for the given cell size.
    ///
    /// Returns `None` for points left of or below the board; the caller still
    /// has to bounds-check against the board's width and height.
    pub fn to_coord(self, cell_size: f32) -> Option<Coord> {
        if !(self.x >= 0.0 && self.y >= 0.0) || cell_size <= 0.0 {
            return None;
        }
        let x = (self.x / cell_size).floor();
        let y = (self.y / cell_size).floor();
        if x > i8::MAX as f32 || y > i8::MAX as f32 {
            return None;
        }
        Some(Coord::new(x as i8, y as i8))
    }
}

/// Identifies one pointer (mouse button, touch id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u8);

/// Raised whenever a match pass removes tiles.
///
/// `counts` is indexed by [`TileKind::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchEvent {
    pub counts: [u32; TileKind::COUNT],
    pub total: u32,
}

impl MatchEvent {
    pub fn add(&mut self, kind: TileKind) {
        self.counts[kind.index()] += 1;
        self.total += 1;
    }

    pub fn count(&self, kind: TileKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Kinds that were removed, with their counts
    pub fn removed(&self) -> impl Iterator<Item = (TileKind, u32)> + '_ {
        TileKind::ALL
            .iter()
            .map(move |&k| (k, self.counts[k.index()]))
            .filter(|&(_, n)| n > 0)
    }
}

/// Maps terminal character cells to board-local points.
///
/// The board is drawn with `cell_w × cell_h` characters per tile inside a
/// one-character border whose top-left corner is at (`origin_x`, `origin_y`).
/// Terminal rows grow downward, board rows grow upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub origin_x: u16,
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    pub width: u8,
    pub height: u8,
}

impl BoardLayout {
    /// Terminal column/row of the top-left character of board cell (x, y).
    pub fn cell_origin(&self, x: u16, y: u16) -> (u16, u16) {
        let row_from_top = (self.height as u16).saturating_sub(1).saturating_sub(y);
        (
            self.origin_x + 1 + x * self.cell_w,
            self.origin_y + 1 + row_from_top * self.cell_h,
        )
    }

    /// Board-local point at the center of terminal cell (`col`, `row`).
    ///
    /// Positions outside the play area map to points outside
    /// `[0, width*CELL_SIZE) × [0, height*CELL_SIZE)`.
    pub fn to_point(&self, col: u16, row: u16) -> Point {
        let cw = self.cell_w.max(1) as f32;
        let ch = self.cell_h.max(1) as f32;
        let local_x = col as f32 - (self.origin_x as f32 + 1.0) + 0.5;
        let local_row = row as f32 - (self.origin_y as f32 + 1.0) + 0.5;
        let board_h = self.height as f32 * ch;
        Point::new(
            local_x / cw * CELL_SIZE,
            (board_h - local_row) / ch * CELL_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_index_roundtrip_covers_alphabet() {
        for (i, kind) in TileKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(TileKind::from_index(i), Some(*kind));
            assert_eq!(TileKind::from_str(kind.as_str()), Some(*kind));
        }
        assert_eq!(TileKind::from_index(TileKind::COUNT), None);
    }

    #[test]
    fn kind_colors_are_distinct() {
        for a in TileKind::ALL {
            for b in TileKind::ALL {
                if a != b {
                    assert_ne!(a.color(), b.color());
                }
            }
        }
    }

    #[test]
    fn point_maps_to_cell() {
        assert_eq!(Point::new(0.0, 0.0).to_coord(CELL_SIZE), Some(Coord::new(0, 0)));
        assert_eq!(
            Point::new(CELL_SIZE * 2.5, CELL_SIZE * 9.99).to_coord(CELL_SIZE),
            Some(Coord::new(2, 9))
        );
        assert_eq!(Point::new(-0.1, 5.0).to_coord(CELL_SIZE), None);
        assert_eq!(Point::new(5.0, -3.0).to_coord(CELL_SIZE), None);
        assert_eq!(Point::new(f32::NAN, 5.0).to_coord(CELL_SIZE), None);
    }

    #[test]
    fn match_event_counts() {
        let mut ev = MatchEvent::default();
        ev.add(TileKind::Red);
        ev.add(TileKind::Red);
        ev.add(TileKind::Blue);
        assert_eq!(ev.total, 3);
        assert_eq!(ev.count(TileKind::Red), 2);
        let removed: Vec<_> = ev.removed().collect();
        assert_eq!(removed, vec![(TileKind::Red, 2), (TileKind::Blue, 1)]);
    }

    #[test]
    fn layout_flips_rows() {
        let layout = BoardLayout {
            origin_x: 0,
            origin_y: 0,
            cell_w: 2,
            cell_h: 1,
            width: 10,
            height: 10,
        };
        // Bottom-left board cell sits on the last play-area row.
        assert_eq!(layout.cell_origin(0, 0), (1, 10));
        assert_eq!(layout.cell_origin(9, 9), (19, 1));

        let p = layout.to_point(1, 10);
        assert_eq!(p.to_coord(CELL_SIZE), Some(Coord::new(0, 0)));
        let p = layout.to_point(20, 1);
        assert_eq!(p.to_coord(CELL_SIZE), Some(Coord::new(9, 9)));
    }
}
