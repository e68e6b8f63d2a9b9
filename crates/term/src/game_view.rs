//! GameView: maps a `core::GameSnapshot` (and optionally the animator's
//! sprites) into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Board rows grow upward, terminal rows grow downward: board row `y` is drawn
//! `height - 1 - y` rows below the top border.

use crate::animator::{Animator, Sprite};
use crate::core::{GameSnapshot, ShiftSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Axis, BoardLayout, TileKind};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the tile board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Where a `width × height` board lands in `viewport` (centered).
    ///
    /// The same layout maps mouse positions back to board points.
    pub fn layout(&self, width: u8, height: u8, viewport: Viewport) -> BoardLayout {
        let frame_w = width as u16 * self.cell_w + 2;
        let frame_h = height as u16 * self.cell_h + 2;
        BoardLayout {
            origin_x: viewport.width.saturating_sub(frame_w) / 2,
            origin_y: viewport.height.saturating_sub(frame_h) / 2,
            cell_w: self.cell_w,
            cell_h: self.cell_h,
            width,
            height,
        }
    }

    /// Render into an existing framebuffer (the allocation-free hot path).
    ///
    /// With an animator, tiles are drawn at their interpolated positions and
    /// removed tiles fade out; without one the snapshot's cells are drawn.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        sprites: Option<&Animator>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap.width, snap.height, viewport);
        let board_w = snap.width as u16 * self.cell_w;
        let board_h = snap.height as u16 * self.cell_h;

        fb.fill_rect(
            layout.origin_x + 1,
            layout.origin_y + 1,
            board_w,
            board_h,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        let border = if snap.resolving {
            CellStyle::new(Rgb::new(120, 120, 130), PANEL_BG)
        } else {
            CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG)
        };
        draw_border(fb, layout.origin_x, layout.origin_y, board_w + 2, board_h + 2, border);

        for y in 0..snap.height {
            for x in 0..snap.width {
                self.draw_empty_cell(fb, &layout, x as u16, y as u16);
            }
        }

        match sprites {
            Some(anim) => {
                for sprite in anim.sprites() {
                    self.draw_sprite(fb, &layout, snap.shift, sprite);
                }
            }
            None => {
                for y in 0..snap.height as i8 {
                    for x in 0..snap.width as i8 {
                        if let Some(kind) = snap.kind_at(x, y) {
                            let sprite = Sprite {
                                kind,
                                x: x as f32,
                                y: y as f32,
                                fade: 0.0,
                                moving: false,
                            };
                            self.draw_sprite(fb, &layout, snap.shift, sprite);
                        }
                    }
                }
            }
        }

        let pending = sprites.map(Animator::pending_merge).unwrap_or_default();
        self.draw_side_panel(fb, snap, &pending, viewport, &layout);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, sprites: Option<&Animator>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, sprites, viewport, &mut fb);
        fb
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, layout: &BoardLayout, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
        let (px, py) = layout.cell_origin(x, y);
        fb.put_char(px, py, '·', style);
    }

    /// Draw one tile at a fractional board position, clipped to the board.
    /// Tiles on the line being dragged are offset by the preview and wrap
    /// around the line's ends.
    fn draw_sprite(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        shift: Option<ShiftSnapshot>,
        sprite: Sprite,
    ) {
        let w = layout.width as f32;
        let h = layout.height as f32;
        let mut x = sprite.x;
        let mut y = sprite.y;

        if let Some(shift) = shift.filter(|_| !sprite.moving && sprite.fade == 0.0) {
            let offset = shift.offset_centi as f32 / 100.0;
            match shift.axis {
                Axis::Horizontal if y.round() as i8 == shift.line => {
                    x = (x + offset).rem_euclid(w);
                }
                Axis::Vertical if x.round() as i8 == shift.line => {
                    y = (y + offset).rem_euclid(h);
                }
                _ => {}
            }
        }

        let board_w = layout.width as i32 * self.cell_w as i32;
        let board_h = layout.height as i32 * self.cell_h as i32;
        let left = (x * self.cell_w as f32).round() as i32;
        let top = ((h - 1.0 - y) * self.cell_h as f32).round() as i32;

        let fg = Rgb::of(sprite.kind).lerp(BOARD_BG, sprite.fade);
        let ch = if sprite.fade < 0.5 { '█' } else { '▒' };
        let style = CellStyle::new(fg, BOARD_BG);

        for dy in 0..self.cell_h as i32 {
            let row = top + dy;
            if row < 0 || row >= board_h {
                continue;
            }
            for dx in 0..self.cell_w as i32 {
                // Columns wrap so a tile sliding off one end of a row shows
                // up at the other.
                let col = (left + dx).rem_euclid(board_w);
                fb.put_char(
                    layout.origin_x + 1 + col as u16,
                    layout.origin_y + 1 + row as u16,
                    ch,
                    style,
                );
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        pending: &[u32; TileKind::COUNT],
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let frame_w = layout.width as u16 * self.cell_w + 2;
        let panel_x = layout.origin_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = layout.origin_y;
        let status = if snap.resolving { "RESOLVING" } else { "READY" };
        fb.put_str(panel_x, y, status, label);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TURN", label);
        fb.put_str(panel_x + 7, y, "TOTAL", label);
        y = y.saturating_add(1);
        // A merge in flight still shows its counts in the turn column.
        for kind in TileKind::ALL {
            let i = kind.index();
            let swatch = CellStyle::new(Rgb::of(kind), PANEL_BG);
            fb.put_char(panel_x, y, '■', swatch);
            fb.put_u32(panel_x + 2, y, snap.turn[i].saturating_add(pending[i]), value);
            fb.put_char(panel_x + 7, y, '■', swatch);
            fb.put_u32(panel_x + 9, y, snap.total[i].saturating_sub(pending[i]), value);
            y = y.saturating_add(1);
        }
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "CHAIN", label);
        fb.put_u32(panel_x + 7, y, snap.chain, value);
        y = y.saturating_add(2);

        for line in ["drag  shift", "r     new board", "q     quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}
