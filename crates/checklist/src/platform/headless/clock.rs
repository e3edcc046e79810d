//! Virtual time clock for deterministic deferred renders.
//!
//! Time only moves when `advance_by()` is called, so tests can step over the
//! removal delay instantly.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::controller::{DeferredRender, RenderTicket};

/// Entry for a pending one-shot timer.
#[derive(Debug, Clone)]
struct TimerEntry {
    fire_at_ms: u64,
    /// Registration order, keeps timers with equal deadlines FIFO.
    sequence: u64,
    ticket: RenderTicket,
}

impl PartialEq for TimerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at_ms == other.fire_at_ms && self.sequence == other.sequence
    }
}

impl Eq for TimerEntry {}

impl PartialOrd for TimerEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap: earliest deadline, then earliest registration
        other
            .fire_at_ms
            .cmp(&self.fire_at_ms)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

#[derive(Debug, Default)]
pub struct VirtualClock {
    current_time_ms: u64,
    next_sequence: u64,
    pending_timers: BinaryHeap<TimerEntry>,
}

impl VirtualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.current_time_ms
    }

    /// Register a deferred render to fire once after its delay.
    pub fn schedule(&mut self, render: DeferredRender) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.pending_timers.push(TimerEntry {
            fire_at_ms: self.current_time_ms + u64::from(render.delay_ms),
            sequence,
            ticket: render.ticket,
        });
    }

    /// Advance virtual time, returning the tickets due by the new time in
    /// firing order. Fired timers are dropped, none repeat.
    pub fn advance_by(&mut self, ms: u64) -> Vec<RenderTicket> {
        let target_time = self.current_time_ms + ms;
        let mut fired = Vec::new();
        while self
            .pending_timers
            .peek()
            .is_some_and(|entry| entry.fire_at_ms <= target_time)
        {
            if let Some(entry) = self.pending_timers.pop() {
                fired.push(entry.ticket);
            }
        }
        self.current_time_ms = target_time;
        fired
    }

    pub fn has_pending_timers(&self) -> bool {
        !self.pending_timers.is_empty()
    }

    /// Time until the next timer fires, if any.
    pub fn time_to_next_timer(&self) -> Option<u64> {
        self.pending_timers
            .peek()
            .map(|entry| entry.fire_at_ms.saturating_sub(self.current_time_ms))
    }
}
