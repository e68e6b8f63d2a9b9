use crate::types::{Axis, TileKind, MAX_GRID_DIM};

const DIM: usize = MAX_GRID_DIM as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftSnapshot {
    pub axis: Axis,
    pub line: i8,
    /// Offset in hundredths of a cell
    pub offset_centi: i32,
}

/// Plain-data copy of everything a view needs to draw one frame.
///
/// `board` is indexed `[y][x]` with `y == 0` the bottom row; only the first
/// `height` rows and `width` columns are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Option<TileKind>; DIM]; DIM],
    pub width: u8,
    pub height: u8,
    pub resolving: bool,
    pub input_enabled: bool,
    pub shift: Option<ShiftSnapshot>,
    pub turn: [u32; TileKind::COUNT],
    pub total: [u32; TileKind::COUNT],
    pub cascades: u32,
    pub chain: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn kind_at(&self, x: i8, y: i8) -> Option<TileKind> {
        if x < 0 || y < 0 || x as u8 >= self.width || y as u8 >= self.height {
            return None;
        }
        self.board[y as usize][x as usize]
    }

    /// FNV-1a fingerprint of the board contents alone. Empty cells hash as
    /// 0, kinds as `index + 1`.
    pub fn board_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        let mut feed = |b: u8| {
            h ^= b as u64;
            h = h.wrapping_mul(0x00000100000001B3);
        };
        feed(self.width);
        feed(self.height);
        for row in &self.board[..self.height as usize] {
            for cell in &row[..self.width as usize] {
                feed(cell.map_or(0, |k| k.index() as u8 + 1));
            }
        }
        h
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; DIM]; DIM],
            width: 0,
            height: 0,
            resolving: false,
            input_enabled: true,
            shift: None,
            turn: [0; TileKind::COUNT],
            total: [0; TileKind::COUNT],
            cascades: 0,
            chain: 0,
        }
    }
}
