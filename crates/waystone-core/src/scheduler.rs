//! Deterministic scheduler — logical clock plus cancellable deferred tasks.
//!
//! All engines run on one logical timeline. The host advances it with
//! [`Scheduler::advance`] and dispatches the fired timer tokens back into
//! the engine that scheduled them. Nothing here reads the wall clock, so
//! tests drive time explicitly.
//!
//! Cancellation is cooperative on two levels: a cancelled timer is never
//! delivered, and engines additionally tag tokens with a session epoch so
//! a fire that slips past cancellation (scheduled by an abandoned session)
//! is recognized and ignored rather than mutating the new session.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::time::Duration;

/// Handle to a scheduled timer, usable to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// A timer delivered by [`Scheduler::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired<T> {
    /// The handle the timer was scheduled under.
    pub id: TimerId,
    /// The caller-supplied token.
    pub token: T,
}

struct Entry<T> {
    due: Duration,
    seq: u64,
    id: TimerId,
    token: T,
}

// Ordering ignores the token: by due time, then insertion order, so timers
// scheduled for the same instant fire FIFO.
impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.due.cmp(&other.due).then(self.seq.cmp(&other.seq))
    }
}

/// Virtual-time scheduler generic over the timer token type.
///
/// The host typically instantiates it with an enum covering every engine's
/// timer kinds and routes fired tokens to their owners.
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    queue: BinaryHeap<Reverse<Entry<T>>>,
    cancelled: HashSet<TimerId>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Creates a scheduler with the logical clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BinaryHeap::new(),
            cancelled: HashSet::new(),
        }
    }

    /// Returns the current logical time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `token` for delivery `after` the current logical time.
    ///
    /// `after` may be zero: the timer fires on the next `advance` call,
    /// including `advance(Duration::ZERO)` — one yield of control.
    pub fn schedule(&mut self, after: Duration, token: T) -> TimerId {
        let id = TimerId(self.next_id);
        let seq = self.next_id;
        self.next_id += 1;
        self.queue.push(Reverse(Entry {
            due: self.now + after,
            seq,
            id,
            token,
        }));
        id
    }

    /// Cancels a pending timer. Returns `true` if the timer was still
    /// pending, `false` if it had already fired or was already cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if id.0 >= self.next_id {
            return false;
        }
        let pending = self.queue.iter().any(|Reverse(e)| e.id == id) && !self.cancelled.contains(&id);
        if pending {
            self.cancelled.insert(id);
        }
        pending
    }

    /// Advances the logical clock by `dt` and returns every timer that came
    /// due, in (due time, insertion) order. Cancelled timers are skipped.
    pub fn advance(&mut self, dt: Duration) -> Vec<Fired<T>> {
        self.now += dt;
        let mut fired = Vec::new();
        while let Some(Reverse(head)) = self.queue.peek() {
            if head.due > self.now {
                break;
            }
            let Some(Reverse(entry)) = self.queue.pop() else {
                break;
            };
            if self.cancelled.remove(&entry.id) {
                continue;
            }
            fired.push(Fired {
                id: entry.id,
                token: entry.token,
            });
        }
        fired
    }

    /// Returns the due time of the earliest pending timer, if any.
    pub fn next_deadline(&mut self) -> Option<Duration> {
        while let Some(Reverse(head)) = self.queue.peek() {
            if self.cancelled.contains(&head.id) {
                let Some(Reverse(entry)) = self.queue.pop() else {
                    break;
                };
                self.cancelled.remove(&entry.id);
                continue;
            }
            return Some(head.due);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_advance_delivers_due_timers_in_order() {
        let mut sched = Scheduler::new();
        sched.schedule(MS * 30, "late");
        sched.schedule(MS * 10, "early");
        sched.schedule(MS * 20, "middle");

        let fired: Vec<&str> = sched.advance(MS * 25).into_iter().map(|f| f.token).collect();
        assert_eq!(fired, vec!["early", "middle"]);

        let fired: Vec<&str> = sched.advance(MS * 5).into_iter().map(|f| f.token).collect();
        assert_eq!(fired, vec!["late"]);
    }

    #[test]
    fn test_same_instant_fires_fifo() {
        let mut sched = Scheduler::new();
        sched.schedule(MS * 10, "first");
        sched.schedule(MS * 10, "second");

        let fired: Vec<&str> = sched.advance(MS * 10).into_iter().map(|f| f.token).collect();
        assert_eq!(fired, vec!["first", "second"]);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut sched = Scheduler::new();
        let keep = sched.schedule(MS * 10, "keep");
        let drop = sched.schedule(MS * 10, "drop");

        assert!(sched.cancel(drop));
        assert!(!sched.cancel(drop));

        let fired: Vec<Fired<&str>> = sched.advance(MS * 10);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].id, keep);
        assert!(!sched.cancel(keep));
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut sched = Scheduler::new();
        sched.schedule(Duration::ZERO, "deferred");
        let fired = sched.advance(Duration::ZERO);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].token, "deferred");
    }

    #[test]
    fn test_next_deadline_skips_cancelled() {
        let mut sched = Scheduler::new();
        let first = sched.schedule(MS * 5, "a");
        sched.schedule(MS * 8, "b");

        assert_eq!(sched.next_deadline(), Some(MS * 5));
        sched.cancel(first);
        assert_eq!(sched.next_deadline(), Some(MS * 8));
    }

    #[test]
    fn test_timers_scheduled_during_advance_wait_for_elapsed_time() {
        let mut sched = Scheduler::new();
        sched.schedule(MS * 10, "tick");
        let fired = sched.advance(MS * 10);
        assert_eq!(fired.len(), 1);

        // Scheduling is relative to the advanced clock.
        sched.schedule(MS * 10, "next");
        assert!(sched.advance(MS * 9).is_empty());
        assert_eq!(sched.advance(MS).len(), 1);
    }
}
