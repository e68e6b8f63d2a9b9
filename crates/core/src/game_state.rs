//! Game state module - owns the board and drives everything that changes it
//!
//! `GameState` ties together the grid, the tile source, the resolution loop,
//! the gesture controller and the tally. It is single-threaded and never
//! blocks: the caller feeds elapsed time through [`GameState::advance`] from
//! its fixed-timestep loop, and deferred cascade steps run from there.
//!
//! Input is gated: while a cascade is resolving no gesture can start and a
//! gesture that ends is dropped without touching the board.

use crate::cascade::{Cascade, CascadeStats, Phase, Step, Timing};
use crate::gesture::InputController;
use crate::grid::Grid;
use crate::matching;
use crate::render::{NullRenderer, RenderAdapter};
use crate::rng::{SimpleRng, TileSource};
use crate::scoring::Tally;
use crate::shift::ShiftSession;
use crate::snapshot::{GameSnapshot, ShiftSnapshot};
use crate::tile::{Tile, TileIds};
use crate::timeline::Timeline;
use crate::types::*;

/// Notifications drained with [`GameState::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoreEvent {
    /// One match pass removed tiles
    Matched(MatchEvent),
    /// A committed shift rotated a line
    Shifted { axis: Axis, line: i8, steps: i32 },
    /// A cascade finished; `turn` is what got merged into the total
    Settled {
        cascade: u32,
        stats: CascadeStats,
        turn: [u32; TileKind::COUNT],
    },
}

/// Deferred work on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Continuation {
    Resolve,
}

/// Complete game state
pub struct GameState<R: RenderAdapter = NullRenderer> {
    grid: Grid,
    ids: TileIds,
    source: Box<dyn TileSource>,
    render: R,
    timing: Timing,
    cascade: Cascade,
    timeline: Timeline<Continuation>,
    input: InputController,
    input_enabled: bool,
    tally: Tally,
    events: Vec<CoreEvent>,
    seed: u32,
    started: bool,
}

impl GameState<NullRenderer> {
    /// Headless 10×10 game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_renderer(
            BOARD_WIDTH,
            BOARD_HEIGHT,
            SimpleRng::new(seed),
            NullRenderer,
            Timing::default(),
        )
        .with_seed(seed)
    }
}

impl<R: RenderAdapter> GameState<R> {
    /// Build a game from its collaborators. The board starts empty; call
    /// [`start`](Self::start) to fill it.
    pub fn with_renderer<S>(width: u8, height: u8, source: S, render: R, timing: Timing) -> Self
    where
        S: TileSource + 'static,
    {
        Self {
            grid: Grid::new(width, height),
            ids: TileIds::new(),
            source: Box::new(source),
            render,
            timing,
            cascade: Cascade::new(),
            timeline: Timeline::new(),
            input: InputController::default(),
            input_enabled: true,
            tally: Tally::new(),
            events: Vec::new(),
            seed: 0,
            started: false,
        }
    }

    /// Record the seed the source was built from (reported in logs only)
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the gesture controller (threshold, cell size)
    pub fn with_input(mut self, input: InputController) -> Self {
        self.input = input;
        self
    }

    /// Fill the board and resolve the opening cascade. Idempotent.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        tracing::info!(
            seed = self.seed,
            width = self.grid.width(),
            height = self.grid.height(),
            "game started"
        );
        self.tick();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// Throw the board away and start over with a fresh seeded source.
    ///
    /// Pending continuations, the gesture and both tallies are dropped.
    pub fn restart(&mut self, seed: u32) {
        for y in 0..self.grid.height() as i8 {
            for x in 0..self.grid.width() as i8 {
                if let Some(tile) = self.grid.take(x, y) {
                    self.render.despawn(&tile, 0);
                }
            }
        }
        self.source = Box::new(SimpleRng::new(seed));
        self.seed = seed;
        self.timeline.clear();
        self.cascade = Cascade::new();
        self.input.cancel();
        self.input_enabled = true;
        self.tally.reset();
        self.events.clear();
        self.started = false;
        self.start();
    }

    // ------------------------------------------------------------------
    // Board access
    // ------------------------------------------------------------------

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    /// Tile at (x, y); `None` if empty or out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<&Tile> {
        self.grid.get(x, y)
    }

    /// A fresh tile with an engine-unique id, not yet on the board
    pub fn new_tile(&mut self, kind: TileKind) -> Tile {
        self.ids.make(kind, Coord::default())
    }

    /// Place `tile` at (x, y). Returns false (and does nothing) out of bounds.
    ///
    /// The tile's coordinate is rewritten to (x, y). If the same tile sat in
    /// another cell it moves here (an instant `request_move`); a tile new to
    /// the board is attached to the renderer. A different tile previously in
    /// the cell is despawned.
    pub fn set(&mut self, x: i8, y: i8, tile: Option<Tile>) -> bool {
        if !self.grid.contains(x, y) {
            return false;
        }
        let to = Coord::new(x, y);

        let mut attach = false;
        let mut moved_from = None;
        if let Some(tile) = &tile {
            match self.grid.find(tile.id()) {
                Some(at) if at != to => {
                    self.grid.take(at.x, at.y);
                    moved_from = Some(at);
                }
                Some(_) => {}
                None => attach = true,
            }
        }

        if let Some(old) = self.grid.take(x, y) {
            if tile.as_ref().map(Tile::id) != Some(old.id()) {
                self.render.despawn(&old, 0);
            }
        }

        self.grid.set(x, y, tile);
        if let Some(placed) = self.grid.get(x, y) {
            if attach {
                self.render.attach(placed);
            }
            if let Some(from) = moved_from {
                self.render.request_move(placed, from, to, 0);
            }
        }
        true
    }

    // ------------------------------------------------------------------
    // Resolution loop
    // ------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.cascade.phase()
    }

    pub fn is_resolving(&self) -> bool {
        self.cascade.is_resolving()
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Engine clock in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.timeline.now_ms()
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    /// Start a cascade and run its first step right away.
    ///
    /// A no-op while a cascade is already in flight: its pending step
    /// re-checks the whole board anyway.
    pub fn tick(&mut self) {
        if !self.cascade.begin() {
            tracing::trace!("tick ignored, cascade in flight");
            return;
        }
        self.input_enabled = false;
        self.resolve_step();
    }

    /// Feed `elapsed_ms` of wall time; runs every continuation that falls due.
    pub fn advance(&mut self, elapsed_ms: u32) {
        let until = self.timeline.now_ms() + elapsed_ms as u64;
        while let Some(task) = self.timeline.pop_due(until) {
            match task {
                Continuation::Resolve => self.resolve_step(),
            }
        }
        self.timeline.advance_to(until);
    }

    /// Jump straight from one continuation to the next until the cascade is
    /// done or `max_steps` continuations ran. Returns true if idle.
    pub fn settle(&mut self, max_steps: usize) -> bool {
        for _ in 0..max_steps {
            if !self.cascade.is_resolving() {
                break;
            }
            match self.timeline.next_due_in() {
                Some(wait) => self.advance(wait.min(u32::MAX as u64) as u32),
                None => break,
            }
        }
        !self.cascade.is_resolving()
    }

    fn resolve_step(&mut self) {
        let events = &mut self.events;
        let tally = &mut self.tally;
        let step = self.cascade.step(
            &mut self.grid,
            &mut self.ids,
            &mut *self.source,
            &mut self.render,
            self.timing,
            |event| {
                tally.record(&event);
                events.push(CoreEvent::Matched(event));
            },
        );

        match step {
            Step::ContinueAfter(wait) => self.timeline.schedule(wait, Continuation::Resolve),
            Step::Done => {
                debug_assert!(!matching::has_run(&self.grid));
                let turn = self.tally.merge_turn();
                if turn.iter().any(|&n| n > 0) {
                    self.render.merge_tally(&turn, self.timing.merge_ms);
                }
                self.events.push(CoreEvent::Settled {
                    cascade: self.cascade.id(),
                    stats: self.cascade.stats(),
                    turn,
                });
                self.input_enabled = true;
            }
        }
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    /// Returns true if the pointer is now tracked
    pub fn pointer_down(&mut self, id: PointerId, point: Point) -> bool {
        self.input.begin(id, point, &self.grid, self.input_enabled)
    }

    pub fn pointer_move(&mut self, id: PointerId, point: Point) {
        self.input.drag(id, point);
    }

    /// Finish a gesture at `point`. Returns true if a shift was committed.
    pub fn pointer_up(&mut self, id: PointerId, point: Point) -> bool {
        self.input.drag(id, point);
        let Some(session) = self.input.end(id) else {
            return false;
        };
        if !self.input_enabled || self.cascade.is_resolving() {
            tracing::debug!("shift discarded, cascade in flight");
            return false;
        }
        self.commit_shift(session);
        self.tick();
        true
    }

    /// Abandon the current gesture without committing it
    pub fn cancel_gesture(&mut self) {
        self.input.cancel();
    }

    /// The drag in progress, if it has crossed the threshold
    pub fn session(&self) -> Option<&ShiftSession> {
        self.input.session()
    }

    fn commit_shift(&mut self, mut session: ShiftSession) {
        let steps = session.commit(&mut self.grid);
        let axis = session.axis();
        let line = session.line_index();
        let len = self.grid.line_len(axis) as i32;
        let shift = steps.rem_euclid(len);

        if shift != 0 {
            for i in 0..len {
                let to = line_coord(axis, line, i);
                let from = line_coord(axis, line, (i - shift).rem_euclid(len));
                if let Some(tile) = self.grid.get(to.x, to.y) {
                    self.render.request_move(tile, from, to, self.timing.slide_ms);
                }
            }
        }
        self.events.push(CoreEvent::Shifted { axis, line, steps });
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Drain queued notifications (oldest first)
    pub fn take_events(&mut self) -> Vec<CoreEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn renderer(&self) -> &R {
        &self.render
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.render
    }

    /// Fill `out` with the current state without allocating
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.clear();
        out.width = self.grid.width();
        out.height = self.grid.height();
        for tile in self.grid.iter() {
            let c = tile.coord();
            out.board[c.y as usize][c.x as usize] = Some(tile.kind());
        }
        out.resolving = self.cascade.is_resolving();
        out.input_enabled = self.input_enabled;
        out.shift = self.input.session().map(|s| ShiftSnapshot {
            axis: s.axis(),
            line: s.line_index(),
            offset_centi: (s.preview_steps() * 100.0).round() as i32,
        });
        for kind in TileKind::ALL {
            out.turn[kind.index()] = self.tally.turn(kind);
            out.total[kind.index()] = self.tally.total(kind);
        }
        out.cascades = self.cascade.id();
        out.chain = self.cascade.stats().chain;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

fn line_coord(axis: Axis, line: i8, i: i32) -> Coord {
    match axis {
        Axis::Horizontal => Coord::new(i as i8, line),
        Axis::Vertical => Coord::new(line, i as i8),
    }
}
