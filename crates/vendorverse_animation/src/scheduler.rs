//! Timer scheduler
//!
//! Holds fixed-delay steps on a host-supplied clock. The host advances the
//! queue by asking for due steps; nothing here sleeps or spawns. Steps are
//! grouped so a whole sequence can be cancelled at once.

use slotmap::{new_key_type, SlotMap};
use std::time::Duration;

new_key_type! {
    pub struct TimerId;
}

/// Handle shared by every step of one timed sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerGroup(u64);

impl TimerGroup {
    /// Raw group number (monotonic per queue)
    pub fn get(self) -> u64 {
        self.0
    }
}

struct TimerEntry<T> {
    deadline: Duration,
    /// Tie-breaker so equal deadlines fire in schedule order
    seq: u64,
    group: TimerGroup,
    payload: T,
}

/// A step whose deadline has passed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Due<T> {
    /// When the step was due (not when it was popped)
    pub deadline: Duration,
    pub group: TimerGroup,
    pub payload: T,
}

/// Queue of pending timed steps
pub struct TimerQueue<T> {
    timers: SlotMap<TimerId, TimerEntry<T>>,
    next_seq: u64,
    next_group: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            next_seq: 0,
            next_group: 0,
        }
    }

    /// Allocate a fresh group for a new sequence
    pub fn group(&mut self) -> TimerGroup {
        self.next_group += 1;
        TimerGroup(self.next_group)
    }

    /// Schedule `payload` to become due `delay` after `now`
    pub fn schedule(
        &mut self,
        now: Duration,
        delay: Duration,
        group: TimerGroup,
        payload: T,
    ) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(TimerEntry {
            deadline: now + delay,
            seq,
            group,
            payload,
        })
    }

    /// Cancel a single step
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        self.timers.remove(id).map(|e| e.payload)
    }

    /// Cancel every pending step of a group, returning how many were dropped
    pub fn cancel_group(&mut self, group: TimerGroup) -> usize {
        let before = self.timers.len();
        self.timers.retain(|_, e| e.group != group);
        let dropped = before - self.timers.len();
        if dropped > 0 {
            tracing::trace!("timer group {} cancelled ({} steps)", group.0, dropped);
        }
        dropped
    }

    /// Whether any step of `group` is still pending
    pub fn has_group(&self, group: TimerGroup) -> bool {
        self.timers.values().any(|e| e.group == group)
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.values().map(|e| e.deadline).min()
    }

    fn earliest(&self) -> Option<(TimerId, Duration)> {
        self.timers
            .iter()
            .min_by_key(|(_, e)| (e.deadline, e.seq))
            .map(|(id, e)| (id, e.deadline))
    }

    /// Remove and return the earliest step due at `now`.
    ///
    /// Call in a loop: handling a step may schedule further steps that are
    /// already due.
    pub fn pop_due(&mut self, now: Duration) -> Option<Due<T>> {
        let (id, deadline) = self.earliest()?;
        if deadline > now {
            return None;
        }
        let entry = self.timers.remove(id)?;
        Some(Due {
            deadline: entry.deadline,
            group: entry.group,
            payload: entry.payload,
        })
    }

    /// Remove every step due at `now`, in firing order
    pub fn drain_due(&mut self, now: Duration) -> Vec<Due<T>> {
        std::iter::from_fn(|| self.pop_due(now)).collect()
    }

    /// Number of pending steps
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Drop every pending step
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn steps_fire_in_deadline_order() {
        let mut q = TimerQueue::new();
        let g = q.group();
        q.schedule(ms(0), ms(300), g, "settle");
        q.schedule(ms(0), ms(100), g, "commit");
        q.schedule(ms(0), ms(150), g, "fade-in");

        assert_eq!(q.next_deadline(), Some(ms(100)));
        assert!(q.pop_due(ms(99)).is_none());

        let fired: Vec<_> = q.drain_due(ms(1000)).into_iter().map(|d| d.payload).collect();
        assert_eq!(fired, vec!["commit", "fade-in", "settle"]);
        assert!(q.is_empty());
    }

    #[test]
    fn equal_deadlines_keep_schedule_order() {
        let mut q = TimerQueue::new();
        let g = q.group();
        q.schedule(ms(0), ms(50), g, 1);
        q.schedule(ms(0), ms(50), g, 2);
        q.schedule(ms(0), ms(50), g, 3);

        let fired: Vec<_> = q.drain_due(ms(50)).into_iter().map(|d| d.payload).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn due_reports_deadline_not_now() {
        let mut q = TimerQueue::new();
        let g = q.group();
        q.schedule(ms(10), ms(100), g, ());

        let due = q.pop_due(ms(5000)).unwrap();
        assert_eq!(due.deadline, ms(110));
        assert_eq!(due.group, g);
    }

    #[test]
    fn cancel_group_leaves_other_groups() {
        let mut q = TimerQueue::new();
        let old = q.group();
        let new = q.group();
        assert_ne!(old, new);

        q.schedule(ms(0), ms(100), old, "old-commit");
        q.schedule(ms(0), ms(400), old, "old-settle");
        q.schedule(ms(20), ms(100), new, "new-commit");

        assert_eq!(q.cancel_group(old), 2);
        assert!(!q.has_group(old));
        assert!(q.has_group(new));

        let fired: Vec<_> = q.drain_due(ms(1000)).into_iter().map(|d| d.payload).collect();
        assert_eq!(fired, vec!["new-commit"]);
    }

    #[test]
    fn cancel_single_step() {
        let mut q = TimerQueue::new();
        let g = q.group();
        let id = q.schedule(ms(0), ms(10), g, 'a');
        q.schedule(ms(0), ms(20), g, 'b');

        assert_eq!(q.cancel(id), Some('a'));
        assert_eq!(q.cancel(id), None);
        assert_eq!(q.len(), 1);

        q.clear();
        assert_eq!(q.next_deadline(), None);
    }
}
