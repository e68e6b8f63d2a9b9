//! Gesture controller - pointer begin/drag/end into a shift session
//!
//! One pointer is tracked at a time. A gesture must start over an occupied
//! cell. Nothing happens until the cumulative displacement exceeds the
//! threshold on either axis; at that moment the dominant axis is locked, a
//! [`ShiftSession`] is opened, and everything dragged so far is fed to it.
//! Later motion is forwarded as per-event deltas.

use crate::grid::Grid;
use crate::shift::ShiftSession;
use crate::tile::TileId;
use crate::types::{Axis, Coord, Point, PointerId, CELL_SIZE, SHIFT_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tracked {
    id: PointerId,
    start: Point,
    last: Point,
    anchor: Coord,
    anchor_id: TileId,
}

#[derive(Debug, Clone)]
pub struct InputController {
    tracked: Option<Tracked>,
    session: Option<ShiftSession>,
    threshold: f32,
    cell_size: f32,
}

impl InputController {
    pub fn new(threshold: f32, cell_size: f32) -> Self {
        Self {
            tracked: None,
            session: None,
            threshold,
            cell_size,
        }
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub fn is_tracking(&self) -> bool {
        self.tracked.is_some()
    }

    pub fn session(&self) -> Option<&ShiftSession> {
        self.session.as_ref()
    }

    /// Start tracking `id` if nothing is tracked, input is enabled and the
    /// point lies over an occupied cell. Returns whether the pointer is now
    /// tracked.
    pub fn begin(&mut self, id: PointerId, point: Point, grid: &Grid, enabled: bool) -> bool {
        if self.tracked.is_some() || !enabled {
            return false;
        }
        let Some(cell) = point.to_coord(self.cell_size) else {
            return false;
        };
        let Some(tile) = grid.get(cell.x, cell.y) else {
            return false;
        };

        self.tracked = Some(Tracked {
            id,
            start: point,
            last: point,
            anchor: cell,
            anchor_id: tile.id(),
        });
        true
    }

    /// Feed a pointer position. Ignored for untracked ids.
    pub fn drag(&mut self, id: PointerId, point: Point) {
        let Some(tracked) = self.tracked.as_mut().filter(|t| t.id == id) else {
            return;
        };

        match self.session.as_mut() {
            Some(session) => {
                session.preview(point.x - tracked.last.x, point.y - tracked.last.y);
            }
            None => {
                let dx = point.x - tracked.start.x;
                let dy = point.y - tracked.start.y;
                if dx.abs().max(dy.abs()) > self.threshold {
                    let axis = if dx.abs() > dy.abs() {
                        Axis::Horizontal
                    } else {
                        Axis::Vertical
                    };
                    let mut session =
                        ShiftSession::new(tracked.anchor, tracked.anchor_id, axis, self.cell_size);
                    session.preview(dx, dy);
                    tracing::trace!(?axis, anchor = ?tracked.anchor, "shift session opened");
                    self.session = Some(session);
                }
            }
        }
        tracked.last = point;
    }

    /// Finish the gesture for `id`. Returns the session to commit, if the
    /// drag ever crossed the threshold. Ignored (returns `None`, keeps
    /// tracking) for other ids.
    pub fn end(&mut self, id: PointerId) -> Option<ShiftSession> {
        if self.tracked.map(|t| t.id) != Some(id) {
            return None;
        }
        self.tracked = None;
        self.session.take()
    }

    /// Drop the tracked pointer and any open session without committing.
    pub fn cancel(&mut self) {
        self.tracked = None;
        self.session = None;
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new(SHIFT_THRESHOLD, CELL_SIZE)
    }
}
