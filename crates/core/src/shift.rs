//! Shift session - a drag in progress along one row or column
//!
//! The session is created with its axis locked. While the drag continues it
//! only accumulates a continuous offset (the view uses it to slide the line).
//! On release, [`ShiftSession::commit`] rounds the offset to whole cells and
//! rotates the anchor's line by that many positions, wrapping at the ends.

use crate::grid::Grid;
use crate::tile::TileId;
use crate::types::{Axis, Coord};

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftSession {
    axis: Axis,
    anchor: Coord,
    anchor_id: TileId,
    offset: f32,
    cell_size: f32,
    committed: Option<i32>,
}

impl ShiftSession {
    pub fn new(anchor: Coord, anchor_id: TileId, axis: Axis, cell_size: f32) -> Self {
        Self {
            axis,
            anchor,
            anchor_id,
            offset: 0.0,
            cell_size,
            committed: None,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn anchor_id(&self) -> TileId {
        self.anchor_id
    }

    /// Row index for a horizontal session, column index for a vertical one
    pub fn line_index(&self) -> i8 {
        match self.axis {
            Axis::Horizontal => self.anchor.y,
            Axis::Vertical => self.anchor.x,
        }
    }

    /// True if cell (x, y) lies on the line being shifted
    pub fn covers(&self, x: i8, y: i8) -> bool {
        match self.axis {
            Axis::Horizontal => y == self.anchor.y,
            Axis::Vertical => x == self.anchor.x,
        }
    }

    /// Accumulated displacement along the axis, in board-local units
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Add a pointer delta. Only the component along the axis counts.
    pub fn preview(&mut self, dx: f32, dy: f32) {
        if self.committed.is_some() {
            return;
        }
        let d = match self.axis {
            Axis::Horizontal => dx,
            Axis::Vertical => dy,
        };
        if d.is_finite() {
            self.offset += d;
        }
    }

    /// Current offset in cells (fractional)
    pub fn preview_steps(&self) -> f32 {
        if self.cell_size > 0.0 {
            self.offset / self.cell_size
        } else {
            0.0
        }
    }

    /// Whole-cell step count the offset rounds to (half away from zero)
    pub fn steps(&self) -> i32 {
        self.preview_steps().round() as i32
    }

    /// Step count applied by [`commit`](Self::commit), once it ran
    pub fn committed(&self) -> Option<i32> {
        self.committed
    }

    /// Rotate the anchor's line by the rounded offset and return the step
    /// count. Positive steps move tiles toward +x (Horizontal) or +y
    /// (Vertical). A second commit is a no-op returning the same count.
    ///
    /// If the anchor tile is no longer in the anchor cell the shift is
    /// dropped and commits as 0 steps.
    pub fn commit(&mut self, grid: &mut Grid) -> i32 {
        if let Some(k) = self.committed {
            return k;
        }
        if grid.find(self.anchor_id) != Some(self.anchor) {
            tracing::debug!(anchor = ?self.anchor, "shift dropped, anchor tile moved");
            self.committed = Some(0);
            return 0;
        }
        let k = self.steps();
        self.committed = Some(k);

        let len = grid.line_len(self.axis);
        let shift = k.rem_euclid(len as i32) as usize;
        let index = self.line_index();
        let in_bounds = match self.axis {
            Axis::Horizontal => index >= 0 && index < grid.height() as i8,
            Axis::Vertical => index >= 0 && index < grid.width() as i8,
        };
        if shift == 0 || !in_bounds {
            return k;
        }

        let mut line = grid.take_line(self.axis, index);
        line.rotate_right(shift);
        grid.put_line(self.axis, index, line);

        tracing::debug!(axis = ?self.axis, index, steps = k, "shift committed");
        k
    }
}
