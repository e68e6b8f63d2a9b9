//! Timeline - deferred continuations on a single cooperative clock
//!
//! The engine never sleeps or blocks. Work that must wait for an animation is
//! scheduled here with a delay and handed back by [`Timeline::pop_due`] once
//! enough time has been fed in through the caller's fixed-timestep loop.
//!
//! Tasks scheduled for the same instant run in scheduling order.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct Deferred<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

/// Ordered queue of tasks keyed by due time.
#[derive(Debug, Clone)]
pub struct Timeline<T> {
    now_ms: u64,
    seq: u64,
    pending: VecDeque<Deferred<T>>,
}

impl<T> Timeline<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            seq: 0,
            pending: VecDeque::new(),
        }
    }

    /// Current clock value in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Milliseconds until the earliest pending task, if any
    pub fn next_due_in(&self) -> Option<u64> {
        self.pending
            .front()
            .map(|d| d.due_ms.saturating_sub(self.now_ms))
    }

    /// Schedule `task` to run `delay_ms` after the current clock value.
    pub fn schedule(&mut self, delay_ms: u32, task: T) {
        let due_ms = self.now_ms + delay_ms as u64;
        let seq = self.seq;
        self.seq += 1;

        // Keep sorted by (due, seq); new entries usually land at the back.
        let pos = self
            .pending
            .iter()
            .rposition(|d| (d.due_ms, d.seq) <= (due_ms, seq))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.pending.insert(pos, Deferred { due_ms, seq, task });
    }

    /// Pop the earliest task due at or before `until_ms`, moving the clock to
    /// its due time. Tasks scheduled while handling the result see that clock.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<T> {
        if self.pending.front()?.due_ms > until_ms {
            return None;
        }
        let deferred = self.pending.pop_front()?;
        self.now_ms = self.now_ms.max(deferred.due_ms);
        Some(deferred.task)
    }

    /// Move the clock forward to `until_ms` (never backward).
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    /// Drop every pending task
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self::new()
    }
}
