use tui_tiles::core::{GameSnapshot, GameState};
use tui_tiles::types::{Axis, Point, PointerId, CELL_SIZE};

fn fnv1a64_bytes(bytes: impl Iterator<Item = u8>) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

fn fnv1a64_board(snap: &GameSnapshot) -> u64 {
    let w = snap.width as usize;
    let h = snap.height as usize;
    let cells = snap.board[..h]
        .iter()
        .flat_map(move |row| row[..w].iter().map(|c| c.map_or(0, |k| k.index() as u8 + 1)));
    fnv1a64_bytes([snap.width, snap.height].into_iter().chain(cells))
}

#[test]
fn snapshot_board_hash_is_fnv_over_cells() {
    let mut gs = GameState::new(1);
    let mut snap = GameSnapshot::default();

    gs.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash(), fnv1a64_board(&snap));

    gs.start();
    gs.settle(10_000);
    gs.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash(), fnv1a64_board(&snap));
}

#[test]
fn snapshot_meta_does_not_change_board_hash() {
    let mut gs = GameState::new(1);
    gs.start();
    gs.settle(10_000);

    let mut snap = gs.snapshot();
    let before = snap.board_hash();

    snap.total = [9; 6];
    snap.chain = 4;
    snap.resolving = true;
    assert_eq!(snap.board_hash(), before);
}

#[test]
fn snapshot_carries_shift_preview_without_touching_board() {
    let mut gs = GameState::new(8);
    gs.start();
    gs.settle(10_000);
    let before = gs.snapshot();

    let start = Point::new(CELL_SIZE * 0.5, CELL_SIZE * 2.5);
    assert!(gs.pointer_down(PointerId(0), start));
    gs.pointer_move(PointerId(0), Point::new(start.x + CELL_SIZE * 0.75, start.y));

    let snap = gs.snapshot();
    let shift = snap.shift.expect("preview visible");
    assert_eq!(shift.axis, Axis::Horizontal);
    assert_eq!(shift.line, 2);
    assert_eq!(shift.offset_centi, 75);
    assert_eq!(snap.board_hash(), before.board_hash());

    gs.cancel_gesture();
    assert_eq!(gs.snapshot().shift, None);
    assert_eq!(gs.snapshot().board_hash(), before.board_hash());
}
