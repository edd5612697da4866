//! Delayed transitions.
//!
//! Timers are fire-and-forget: nothing cancels them. The queue never reads a
//! clock; callers pass "now" in milliseconds since the app started.

use crate::{ScreenId, Transition};

/// A transition waiting for its delay to elapse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimer {
    /// Screen that scheduled the timer.
    pub owner: ScreenId,
    /// When the timer fires, in ms since app start.
    pub due_ms: u64,
    /// Transition to apply when it fires.
    pub action: Transition,
    seq: u64,
}

/// Timers ordered by due time, ties broken by scheduling order.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    pending: Vec<PendingTimer>,
    next_seq: u64,
}

impl TimerQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire `delay_ms` after `now_ms` on behalf of `owner`.
    pub fn schedule(&mut self, owner: ScreenId, now_ms: u64, delay_ms: u64, action: Transition) {
        let due_ms = now_ms.saturating_add(delay_ms);
        tracing::debug!("Scheduling {} at {due_ms}ms for {owner}", action.target());
        self.pending.push(PendingTimer {
            owner,
            due_ms,
            action,
            seq: self.next_seq,
        });
        self.next_seq = self.next_seq.wrapping_add(1);
    }

    /// Earliest due time, if any timer is pending.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|t| t.due_ms).min()
    }

    /// Remove and return every timer due at or before `now_ms`, in firing order.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<PendingTimer> {
        let (mut due, rest): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|t| t.due_ms <= now_ms);
        self.pending = rest;
        due.sort_by_key(|t| (t.due_ms, t.seq));
        due
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if no timers are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
