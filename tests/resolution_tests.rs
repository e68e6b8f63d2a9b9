//! Resolution properties - fixed point, completeness, invariants

use std::collections::HashSet;

use tui_tiles::core::{
    gravity, matching, CoreEvent, GameState, Grid, NullRenderer, Recorder, RenderCall, ShiftSession,
    SimpleRng, TileIds, Timing,
};
use tui_tiles::types::{Axis, Coord, PointerId, TileKind, CELL_SIZE, FALL_MS, TICK_MS};

fn assert_consistent(grid: &Grid) {
    let mut seen = HashSet::new();
    for y in 0..grid.height() as i8 {
        for x in 0..grid.width() as i8 {
            if let Some(tile) = grid.get(x, y) {
                assert_eq!(tile.coord(), Coord::new(x, y), "tile coord out of sync");
                assert!(seen.insert(tile.id()), "tile {:?} on two cells", tile.id());
            }
        }
    }
}

#[test]
fn test_every_seed_reaches_a_full_quiet_board() {
    for seed in 0..64 {
        let mut game = GameState::new(seed);
        game.start();
        assert!(game.settle(10_000), "seed {seed} did not settle");

        assert!(game.grid().is_full(), "seed {seed} left holes");
        assert!(!matching::has_run(game.grid()), "seed {seed} left a run");
        assert!(game.input_enabled());
        assert_consistent(game.grid());

        let events = game.take_events();
        assert!(matches!(events.last(), Some(CoreEvent::Settled { cascade: 1, .. })));
    }
}

#[test]
fn test_settle_and_ticking_agree() {
    let mut jumped = GameState::new(7);
    jumped.start();
    assert!(jumped.settle(10_000));

    let mut ticked = GameState::new(7);
    ticked.start();
    let mut frames = 0;
    while ticked.is_resolving() {
        ticked.advance(TICK_MS);
        frames += 1;
        assert!(frames < 100_000, "ticking never settled");
    }

    assert_eq!(jumped.snapshot().board_hash(), ticked.snapshot().board_hash());
    assert_eq!(jumped.tally().total_sum(), ticked.tally().total_sum());
}

#[test]
fn test_continuation_waits_for_step_duration() {
    let mut game = GameState::new(3);
    game.start();
    assert!(game.is_resolving());
    assert_eq!(game.grid().occupied(), game.width() as usize);

    // The second sweep is due FALL_MS after the first.
    game.advance(FALL_MS - 1);
    assert_eq!(game.grid().occupied(), game.width() as usize);
    game.advance(1);
    assert_eq!(game.grid().occupied(), 2 * game.width() as usize);
}

#[test]
fn test_restart_replays_a_seed() {
    let mut fresh = GameState::new(99);
    fresh.start();
    fresh.settle(10_000);

    let mut game = GameState::new(5);
    game.start();
    game.advance(FALL_MS * 3);
    game.restart(99);
    assert!(game.settle(10_000));

    assert_eq!(game.snapshot().board_hash(), fresh.snapshot().board_hash());
    assert_eq!(game.tally().total_sum(), fresh.tally().total_sum());
}

#[test]
fn test_gravity_fills_an_empty_column_in_height_sweeps() {
    let mut grid = Grid::new(4, 7);
    let mut ids = TileIds::new();
    let mut src = SimpleRng::new(1);
    let mut rec = Recorder::new();

    let mut sweeps = 0;
    while gravity::sweep(&mut grid, &mut ids, &mut src, &mut rec, FALL_MS) > 0 {
        sweeps += 1;
        assert!(sweeps <= 7);
        assert_consistent(&grid);
    }
    assert_eq!(sweeps, 7);
    assert!(gravity::is_stable(&grid));
    assert_eq!(ids.issued(), 28);
}

#[test]
fn test_long_and_crossing_runs_vanish_in_one_pass() {
    use TileKind::*;
    // Rows listed bottom first. Row 0 holds a run of five reds; column 4
    // holds a vertical run of blues crossing a horizontal run of blues.
    let rows: [[TileKind; 6]; 5] = [
        [Red, Red, Red, Red, Red, Green],
        [Green, Yellow, Purple, Yellow, Blue, Green],
        [Yellow, Purple, Orange, Blue, Blue, Blue],
        [Purple, Orange, Yellow, Purple, Blue, Yellow],
        [Green, Yellow, Orange, Green, Yellow, Orange],
    ];
    let mut grid = Grid::new(6, 5);
    let mut ids = TileIds::new();
    for (y, row) in rows.iter().enumerate() {
        for (x, kind) in row.iter().enumerate() {
            grid.set(x as i8, y as i8, Some(ids.make(*kind, Coord::default())));
        }
    }

    let mut events = Vec::new();
    let wait = matching::pass(&mut grid, &mut NullRenderer, 50, |e| events.push(e));

    assert_eq!(wait, 50);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].count(Red), 5);
    assert_eq!(events[0].count(Blue), 5);
    assert_eq!(events[0].total, 10);
    assert!(!matching::has_run(&grid));
    for x in 0..5 {
        assert!(grid.get(x, 0).is_none());
    }
    assert!(grid.get(5, 0).is_some());
}

#[test]
fn test_shift_rotates_by_exactly_k() {
    let mut ids = TileIds::new();
    for axis in [Axis::Horizontal, Axis::Vertical] {
        for k in -13i32..=13 {
            let mut grid = Grid::new(5, 6);
            let mut rng = SimpleRng::new(k as u32);
            for y in 0..6 {
                for x in 0..5 {
                    let kind = TileKind::ALL[rng.next_range(6) as usize];
                    grid.set(x, y, Some(ids.make(kind, Coord::default())));
                }
            }
            let anchor = Coord::new(2, 3);
            let line = |g: &Grid| -> Vec<_> {
                match axis {
                    Axis::Horizontal => (0..5).map(|x| g.get(x, 3).unwrap().id()).collect(),
                    Axis::Vertical => (0..6).map(|y| g.get(2, y).unwrap().id()).collect(),
                }
            };
            let before = line(&grid);
            let untouched: Vec<_> = grid
                .iter()
                .filter(|t| match axis {
                    Axis::Horizontal => t.coord().y != 3,
                    Axis::Vertical => t.coord().x != 2,
                })
                .map(|t| (t.id(), t.coord()))
                .collect();

            let anchor_id = grid.get(anchor.x, anchor.y).unwrap().id();
            let mut session = ShiftSession::new(anchor, anchor_id, axis, CELL_SIZE);
            let d = k as f32 * CELL_SIZE;
            session.preview(d, d);
            assert_eq!(session.commit(&mut grid), k);

            let after = line(&grid);
            let len = before.len() as i32;
            for (i, id) in before.iter().enumerate() {
                let to = (i as i32 + k).rem_euclid(len) as usize;
                assert_eq!(after[to], *id, "{axis:?} k={k}");
            }
            for (id, coord) in untouched {
                assert_eq!(grid.find(id), Some(coord));
            }
            assert_consistent(&grid);
        }
    }
}

#[test]
fn test_set_keeps_board_consistent() {
    let mut game = GameState::with_renderer(
        5,
        5,
        SimpleRng::new(2),
        Recorder::new(),
        Timing::default(),
    );
    let mut rng = SimpleRng::new(77);
    let mut placed = Vec::new();

    for _ in 0..300 {
        let x = rng.next_range(7) as i8 - 1;
        let y = rng.next_range(7) as i8 - 1;
        let tile = match rng.next_range(3) {
            0 => None,
            1 => {
                let t = game.new_tile(TileKind::ALL[rng.next_range(6) as usize]);
                placed.push(t.clone());
                Some(t)
            }
            _ if !placed.is_empty() => {
                let pick = rng.next_range(placed.len() as u32) as usize;
                Some(placed[pick].clone())
            }
            _ => None,
        };
        let in_bounds = (0..5).contains(&x) && (0..5).contains(&y);
        assert_eq!(game.set(x, y, tile), in_bounds);
        assert_consistent(game.grid());
    }

    // Every tile on the board was announced to the renderer.
    let attached: HashSet<_> = game
        .renderer()
        .calls()
        .iter()
        .filter_map(|c| match c {
            RenderCall::Attach(t) => Some(t.id()),
            _ => None,
        })
        .collect();
    assert!(game.grid().iter().all(|t| attached.contains(&t.id())));
}

#[test]
fn test_tally_matches_reported_removals() {
    let mut game = GameState::new(21);
    game.start();
    assert!(game.settle(10_000));

    let mut matched = [0u32; TileKind::COUNT];
    let mut settled_turn = [0u32; TileKind::COUNT];
    for event in game.take_events() {
        match event {
            CoreEvent::Matched(m) => {
                for (kind, n) in m.removed() {
                    matched[kind.index()] += n;
                }
            }
            CoreEvent::Settled { turn, .. } => settled_turn = turn,
            CoreEvent::Shifted { .. } => {}
        }
    }

    assert_eq!(matched, settled_turn);
    for kind in TileKind::ALL {
        assert_eq!(game.tally().total(kind), matched[kind.index()]);
        assert_eq!(game.tally().turn(kind), 0);
    }
}

#[test]
fn test_input_is_gated_while_resolving() {
    let mut game = GameState::new(4);
    game.start();
    assert!(game.is_resolving());
    assert!(!game.input_enabled());

    let p = tui_tiles::types::Point::new(CELL_SIZE * 0.5, CELL_SIZE * 0.5);
    assert!(!game.pointer_down(PointerId(0), p));

    // A tick mid-cascade does not start a second one.
    let before = game.snapshot().board_hash();
    game.tick();
    assert_eq!(game.snapshot().board_hash(), before);

    assert!(game.settle(10_000));
    assert!(game.pointer_down(PointerId(0), p));
}
