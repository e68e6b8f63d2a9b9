//! Cascade - the resolution loop as a step function
//!
//! A cascade alternates gravity and matching until the board is quiet:
//!
//! 1. Sweep gravity. If anything moved, wait for the fall and step again.
//! 2. Run a match pass. If anything was removed, wait for the removal and step
//!    again (gravity gets another look at the gaps).
//! 3. Both quiet: the cascade is done and input may resume.
//!
//! [`Cascade::step`] does exactly one of these and reports how long to wait.
//! The caller owns the clock and schedules the next step; nothing here
//! recurses or blocks.

use crate::grid::Grid;
use crate::render::RenderAdapter;
use crate::rng::TileSource;
use crate::tile::TileIds;
use crate::types::{MatchEvent, FALL_MS, MERGE_MS, REMOVE_MS, SLIDE_MS};
use crate::{gravity, matching};

/// Animation durations the loop waits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub fall_ms: u32,
    pub remove_ms: u32,
    /// Duration of the snap after a shift commit (0 = instant)
    pub slide_ms: u32,
    /// Display-only: nothing waits for the turn to merge into the total
    pub merge_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            fall_ms: FALL_MS,
            remove_ms: REMOVE_MS,
            slide_ms: SLIDE_MS,
            merge_ms: MERGE_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Resolving,
}

/// Outcome of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Board is stable and has no runs
    Done,
    /// Call `step` again after this many milliseconds
    ContinueAfter(u32),
}

/// Counters for a single cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeStats {
    /// Gravity sweeps that moved something
    pub sweeps: u32,
    /// Match passes run, including the final empty one
    pub passes: u32,
    /// Match passes that removed tiles
    pub chain: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Cascade {
    phase: Phase,
    stats: CascadeStats,
    /// Cascades started so far; the current one's id while resolving
    started: u32,
}

impl Cascade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_resolving(&self) -> bool {
        self.phase == Phase::Resolving
    }

    /// Stats of the running cascade, or of the last finished one
    pub fn stats(&self) -> CascadeStats {
        self.stats
    }

    /// Id of the running cascade, or of the last finished one
    pub fn id(&self) -> u32 {
        self.started
    }

    /// Enter `Resolving` with fresh stats. Returns false if a cascade is
    /// already running.
    pub fn begin(&mut self) -> bool {
        if self.is_resolving() {
            return false;
        }
        self.phase = Phase::Resolving;
        self.stats = CascadeStats::default();
        self.started = self.started.wrapping_add(1);
        tracing::debug!(cascade = self.started, "cascade started");
        true
    }

    /// Run one step of the loop. Starts a cascade if none is running.
    pub fn step<S, R, F>(
        &mut self,
        grid: &mut Grid,
        ids: &mut TileIds,
        source: &mut S,
        render: &mut R,
        timing: Timing,
        on_match: F,
    ) -> Step
    where
        S: TileSource + ?Sized,
        R: RenderAdapter + ?Sized,
        F: FnMut(MatchEvent),
    {
        if !self.is_resolving() {
            self.begin();
        }

        let fall = gravity::sweep(grid, ids, source, render, timing.fall_ms);
        if fall > 0 {
            self.stats.sweeps += 1;
            return Step::ContinueAfter(fall);
        }

        self.stats.passes += 1;
        let remove = matching::pass(grid, render, timing.remove_ms, on_match);
        if remove > 0 {
            self.stats.chain += 1;
            return Step::ContinueAfter(remove);
        }

        self.phase = Phase::Idle;
        tracing::debug!(
            cascade = self.started,
            sweeps = self.stats.sweeps,
            chain = self.stats.chain,
            "cascade settled"
        );
        Step::Done
    }
}
