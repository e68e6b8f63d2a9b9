use tui_tiles::core::{GameSnapshot, GameState};
use tui_tiles::term::{Animator, GameView, Viewport};
use tui_tiles::types::{Axis, TileKind};

fn screen(fb: &tui_tiles::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10 cells * 2 columns + border => 22 wide, 10 rows + border => 12 tall.
    let fb = view.render(&snap, None, Viewport::new(22, 12));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 11).unwrap().ch, '└');
    assert_eq!(fb.get(21, 11).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_bottom_row_at_the_bottom() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[0][0] = Some(TileKind::Green);

    let fb = GameView::default().render(&snap, None, Viewport::new(22, 12));

    // Board row 0 sits just above the bottom border; each cell is 2 wide.
    assert_eq!(fb.get(1, 10).unwrap().ch, '█');
    assert_eq!(fb.get(2, 10).unwrap().ch, '█');
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
    assert_eq!(fb.get(3, 10).unwrap().ch, '·');
}

#[test]
fn term_view_wraps_row_preview() {
    let mut snap = GameSnapshot {
        width: 3,
        height: 1,
        ..GameSnapshot::default()
    };
    snap.board[0][2] = Some(TileKind::Red);
    snap.shift = Some(tui_tiles::core::ShiftSnapshot {
        axis: Axis::Horizontal,
        line: 0,
        offset_centi: 100,
    });

    let fb = GameView::default().render(&snap, None, Viewport::new(8, 3));

    // The rightmost tile slid one cell right and wrapped to column 0.
    assert_eq!(fb.get(1, 1).unwrap().ch, '█');
    assert_eq!(fb.get(5, 1).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::new(1);
    gs.start();
    gs.settle(10_000);

    let view = GameView::default();
    let narrow = screen(&view.render(&gs.snapshot(), None, Viewport::new(22, 12)));
    assert!(!narrow.contains("TOTAL"));

    let wide = screen(&view.render(&gs.snapshot(), None, Viewport::new(60, 14)));
    assert!(wide.contains("READY"));
    assert!(wide.contains("TOTAL"));
    assert!(wide.contains("CHAIN"));
}

#[test]
fn term_view_uses_animator_positions() {
    let mut gs = GameState::with_renderer(
        4,
        4,
        tui_tiles::core::SimpleRng::new(5),
        Animator::new(),
        tui_tiles::core::Timing::default(),
    );
    gs.start();

    // First sweep: one tile per column, mid-flight from above the board.
    let fb = GameView::default().render(&gs.snapshot(), Some(gs.renderer()), Viewport::new(10, 6));
    let top_row = fb.row_text(1);
    assert!(!top_row.contains('█'), "tiles start above the visible board");

    gs.renderer_mut().advance(tui_tiles::types::FALL_MS);
    let fb = GameView::default().render(&gs.snapshot(), Some(gs.renderer()), Viewport::new(10, 6));
    assert!(fb.row_text(1).contains('█'));
}

#[test]
fn term_view_centers_board_on_large_viewports() {
    let snap = GameState::new(1).snapshot();
    let fb = GameView::default().render(&snap, None, Viewport::new(22, 20));

    // start_y = (20 - 12) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}
