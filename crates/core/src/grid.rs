//! Grid module - fixed W×H storage of optional tiles
//!
//! Coordinates: (x, y) where x ranges 0..width (left to right) and y ranges
//! 0..height (bottom to top). Row `height - 1` is the top row where gravity
//! spawns new tiles. Uses a flat row-major vector (`y * width + x`).
//!
//! The grid has no business logic. It enforces exactly one rule: a stored
//! tile's coordinate equals the cell that holds it.

use arrayvec::ArrayVec;

use crate::tile::{Tile, TileId};
use crate::types::{Axis, Coord, BOARD_HEIGHT, BOARD_WIDTH, MAX_GRID_DIM};

/// One row or column worth of cells.
pub type Line = ArrayVec<Option<Tile>, { MAX_GRID_DIM as usize }>;

/// The board grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Option<Tile>>,
}

impl Grid {
    /// Create an empty grid. Each side is clamped to `1..=MAX_GRID_DIM`.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.clamp(1, MAX_GRID_DIM);
        let height = height.clamp(1, MAX_GRID_DIM);
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![None; len],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Index of the top row
    pub fn top(&self) -> i8 {
        self.height as i8 - 1
    }

    pub fn contains(&self, x: i8, y: i8) -> bool {
        self.index(x, y).is_some()
    }

    /// Tile at (x, y); `None` if the cell is empty or out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<&Tile> {
        self.index(x, y).and_then(|idx| self.cells[idx].as_ref())
    }

    /// Store `tile` at (x, y), replacing whatever was there.
    ///
    /// Returns false (and drops `tile`) if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, tile: Option<Tile>) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = tile.map(|mut t| {
                    t.place(Coord::new(x, y));
                    t
                });
                true
            }
            None => false,
        }
    }

    /// Remove and return the tile at (x, y)
    pub fn take(&mut self, x: i8, y: i8) -> Option<Tile> {
        let idx = self.index(x, y)?;
        self.cells[idx].take()
    }

    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).is_some()
    }

    /// Cell currently holding the tile with this id
    pub fn find(&self, id: TileId) -> Option<Coord> {
        self.iter().find(|t| t.id() == id).map(Tile::coord)
    }

    /// Occupied tiles in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.cells.iter().filter_map(Option::as_ref)
    }

    /// Number of occupied cells
    pub fn occupied(&self) -> usize {
        self.iter().count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Length of a line along `axis`
    pub fn line_len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.width as usize,
            Axis::Vertical => self.height as usize,
        }
    }

    /// Take every cell of row `index` (Horizontal) or column `index`
    /// (Vertical) out of the grid, in increasing x / y order.
    pub fn take_line(&mut self, axis: Axis, index: i8) -> Line {
        let mut line = Line::new();
        for i in 0..self.line_len(axis) as i8 {
            let (x, y) = line_cell(axis, index, i);
            line.push(self.take(x, y));
        }
        line
    }

    /// Put a line back, slot `i` landing at position `i` of the line.
    pub fn put_line(&mut self, axis: Axis, index: i8, line: Line) {
        for (i, tile) in line.into_iter().enumerate() {
            let (x, y) = line_cell(axis, index, i as i8);
            self.set(x, y, tile);
        }
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

/// Cell of position `i` along line `index`.
fn line_cell(axis: Axis, index: i8, i: i8) -> (i8, i8) {
    match axis {
        Axis::Horizontal => (i, index),
        Axis::Vertical => (index, i),
    }
}
