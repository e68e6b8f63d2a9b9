//! Gravity - one downward sweep over the grid
//!
//! A sweep visits columns left to right and, within a column, rows bottom to
//! top. Every empty cell pulls the tile directly above it down by one row; an
//! empty top cell gets a freshly spawned tile that starts one row above the
//! board. Each tile moves at most one row per sweep, so a gap of N rows closes
//! over N sweeps and the caller keeps sweeping until nothing moves.

use crate::grid::Grid;
use crate::render::RenderAdapter;
use crate::rng::TileSource;
use crate::tile::TileIds;
use crate::types::Coord;

/// Run one gravity sweep.
///
/// Returns `fall_ms` if any tile moved or spawned, else 0 (the column set is
/// gravity-stable).
pub fn sweep<S, R>(
    grid: &mut Grid,
    ids: &mut TileIds,
    source: &mut S,
    render: &mut R,
    fall_ms: u32,
) -> u32
where
    S: TileSource + ?Sized,
    R: RenderAdapter + ?Sized,
{
    let top = grid.top();
    let mut moved = false;

    for x in 0..grid.width() as i8 {
        for y in 0..grid.height() as i8 {
            if grid.is_occupied(x, y) {
                continue;
            }

            if y == top {
                let from = Coord::new(x, y + 1);
                let tile = ids.make(source.next_kind(), from);
                grid.set(x, y, Some(tile));
                if let Some(tile) = grid.get(x, y) {
                    render.attach(tile);
                    render.request_move(tile, from, Coord::new(x, y), fall_ms);
                }
                moved = true;
            } else if let Some(above) = grid.take(x, y + 1) {
                let from = above.coord();
                grid.set(x, y, Some(above));
                if let Some(tile) = grid.get(x, y) {
                    render.request_move(tile, from, Coord::new(x, y), fall_ms);
                }
                moved = true;
            }
        }
    }

    tracing::trace!(moved, "gravity sweep");
    if moved {
        fall_ms.max(1)
    } else {
        0
    }
}

/// True if no sweep would move anything: every column is packed from the
/// bottom with no gaps and the top row is full.
pub fn is_stable(grid: &Grid) -> bool {
    grid.is_full()
}
