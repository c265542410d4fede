//! One-shot timers on a virtual clock.
//!
//! The page does not tick in real time. Tests and the CLI advance a
//! [`Duration`] clock explicitly and every timer due inside the advanced
//! window fires, in `(fire_at, id)` order. A callback scheduling a timer
//! that lands inside the same window gets served within that advance too.

use std::fmt;
use std::time::Duration;

use crate::page::Page;

/// Callback run when a timer fires.
pub type TimerCallback = Box<dyn FnOnce(&Page)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

pub struct PendingTimer {
    pub id: TimerId,
    pub fire_at: Duration,
    pub callback: TimerCallback,
}

/// Pending timers plus the clock they fire against.
#[derive(Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn schedule(&mut self, delay: Duration, callback: TimerCallback) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            id,
            fire_at: self.now + delay,
            callback,
        });
        id
    }

    /// Remove and return the earliest timer due at or before `target`,
    /// moving the clock to its fire time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, target: Duration) -> Option<PendingTimer> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.fire_at <= target)
            .min_by_key(|(_, t)| (t.fire_at, t.id.0))
            .map(|(i, _)| i)?;
        let timer = self.pending.remove(idx);
        self.now = self.now.max(timer.fire_at);
        Some(timer)
    }

    /// Move the clock forward without firing anything. Never rewinds.
    pub fn advance_clock(&mut self, target: Duration) {
        self.now = self.now.max(target);
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Fire time of the latest pending timer, for running until idle.
    pub fn last_fire_at(&self) -> Option<Duration> {
        self.pending.iter().map(|t| t.fire_at).max()
    }
}

impl fmt::Debug for TimerQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerQueue")
            .field("now", &self.now)
            .field("pending", &self.pending.len())
            .finish()
    }
}
