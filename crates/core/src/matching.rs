//! Matching - one detect-then-remove pass over the grid
//!
//! Every occupied cell checks the two cells to its right and the two cells
//! above it. Three tiles of one kind in either direction are marked. Marks go
//! into a per-cell mask, so overlapping windows of a longer run mark each tile
//! once and the whole run disappears in the same pass. Removal happens only
//! after the full scan; the pass never re-scans (the cascade does that after
//! gravity has closed the gaps).

use crate::grid::Grid;
use crate::render::RenderAdapter;
use crate::types::MatchEvent;

/// Mark every tile that belongs to a horizontal or vertical run of three or
/// more. The mask is row-major (`y * width + x`).
fn mark_runs(grid: &Grid) -> Vec<bool> {
    let w = grid.width() as i8;
    let h = grid.height() as i8;
    let mut mask = vec![false; w as usize * h as usize];
    let mut mark = |x: i8, y: i8| mask[y as usize * w as usize + x as usize] = true;

    for y in 0..h {
        for x in 0..w {
            let Some(tile) = grid.get(x, y) else {
                continue;
            };

            if let (Some(t1), Some(t2)) = (grid.get(x + 1, y), grid.get(x + 2, y)) {
                if tile.same_kind(t1) && t1.same_kind(t2) {
                    mark(x, y);
                    mark(x + 1, y);
                    mark(x + 2, y);
                }
            }

            if y > h - 3 {
                continue;
            }
            if let (Some(t1), Some(t2)) = (grid.get(x, y + 1), grid.get(x, y + 2)) {
                if tile.same_kind(t1) && t1.same_kind(t2) {
                    mark(x, y);
                    mark(x, y + 1);
                    mark(x, y + 2);
                }
            }
        }
    }

    mask
}

/// Run one match pass.
///
/// Every tile in a run is taken off the grid and despawned through `render`.
/// If anything was removed, `on_match` receives the per-kind counts and the
/// pass returns `remove_ms`; otherwise it returns 0.
pub fn pass<R, F>(grid: &mut Grid, render: &mut R, remove_ms: u32, mut on_match: F) -> u32
where
    R: RenderAdapter + ?Sized,
    F: FnMut(MatchEvent),
{
    let mask = mark_runs(grid);
    let w = grid.width() as usize;
    let mut event = MatchEvent::default();

    for (idx, &marked) in mask.iter().enumerate() {
        if !marked {
            continue;
        }
        let x = (idx % w) as i8;
        let y = (idx / w) as i8;
        if let Some(tile) = grid.take(x, y) {
            event.add(tile.kind());
            render.despawn(&tile, remove_ms);
        }
    }

    tracing::trace!(removed = event.total, "match pass");
    if event.total == 0 {
        return 0;
    }
    on_match(event);
    remove_ms.max(1)
}

/// True if the grid holds at least one run of three or more.
pub fn has_run(grid: &Grid) -> bool {
    mark_runs(grid).into_iter().any(|m| m)
}
