// SPDX-License-Identifier: MPL-2.0
//! Expiry timers, one per toast.
//!
//! Timers are kept in deadline order so firing is a walk from the front of
//! the map. Each toast owns at most one timer; scheduling again for the same
//! id replaces the previous one.

use super::id::ToastId;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Position of a timer in the deadline map: deadline, then scheduling order.
type TimerKey = (Instant, u64);

/// Pending expiry timers keyed by deadline.
#[derive(Debug, Default)]
pub struct ExpiryTimers {
    /// Deadline-ordered timers. The sequence number breaks ties.
    by_deadline: BTreeMap<TimerKey, ToastId>,
    keys: HashMap<ToastId, TimerKey>,
    next_seq: u64,
}

impl ExpiryTimers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `id` to expire at `deadline`.
    pub fn schedule(&mut self, id: ToastId, deadline: Instant) {
        self.cancel(id);

        let key = (deadline, self.next_seq);
        self.next_seq += 1;

        self.by_deadline.insert(key, id);
        self.keys.insert(id, key);
    }

    /// Cancels the timer for `id`. Returns `true` if one was pending.
    pub fn cancel(&mut self, id: ToastId) -> bool {
        match self.keys.remove(&id) {
            Some(key) => {
                self.by_deadline.remove(&key);
                true
            }
            None => false,
        }
    }

    /// Removes and returns every timer whose deadline is at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<ToastId> {
        let mut due = Vec::new();

        while let Some(entry) = self.by_deadline.first_entry() {
            if entry.key().0 > now {
                break;
            }
            let id = entry.remove();
            self.keys.remove(&id);
            due.push(id);
        }

        due
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.by_deadline.keys().next().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.keys.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_deadline.clear();
        self.keys.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn take_due_returns_only_expired_timers() {
        let mut timers = ExpiryTimers::new();
        let start = Instant::now();
        let early = ToastId::new();
        let late = ToastId::new();

        timers.schedule(early, start + Duration::from_millis(100));
        timers.schedule(late, start + Duration::from_millis(200));

        assert!(timers.take_due(start + Duration::from_millis(99)).is_empty());
        assert_eq!(timers.take_due(start + Duration::from_millis(100)), vec![early]);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.take_due(start + Duration::from_secs(1)), vec![late]);
        assert!(timers.is_empty());
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let mut timers = ExpiryTimers::new();
        let deadline = Instant::now();
        let first = ToastId::new();
        let second = ToastId::new();

        // Schedule the newer id first to show ordering follows scheduling.
        timers.schedule(second, deadline);
        timers.schedule(first, deadline);

        assert_eq!(timers.take_due(deadline), vec![second, first]);
    }

    #[test]
    fn cancel_removes_pending_timer() {
        let mut timers = ExpiryTimers::new();
        let id = ToastId::new();
        let deadline = Instant::now();
        timers.schedule(id, deadline);

        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert!(timers.take_due(deadline).is_empty());
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn rescheduling_replaces_previous_timer() {
        let mut timers = ExpiryTimers::new();
        let id = ToastId::new();
        let start = Instant::now();

        timers.schedule(id, start + Duration::from_millis(10));
        timers.schedule(id, start + Duration::from_millis(50));

        assert_eq!(timers.len(), 1);
        assert!(timers.contains(id));
        assert!(timers.take_due(start + Duration::from_millis(10)).is_empty());
        assert_eq!(timers.next_deadline(), Some(start + Duration::from_millis(50)));
    }
}
