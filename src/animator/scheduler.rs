use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::time::Duration;

/// Opaque handle for a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u64);

/// Timer facility the animator schedules its work on.
///
/// Implementations only record timers; firing is driven by the host, which hands each due
/// [`TimerId`] back to [`crate::PathAnimator::on_timer`].
pub trait Scheduler {
    /// One-shot timer that fires after the host's next paint pass.
    fn defer(&mut self) -> TimerId;
    /// Repeating timer with a fixed wall-clock period.
    fn set_interval(&mut self, period: Duration) -> TimerId;
    /// Cancel a timer. Unknown or already-cleared ids are ignored.
    fn clear(&mut self, id: TimerId);
}

#[derive(Clone, Copy, Debug)]
struct TimerEntry {
    due: Duration,
    period: Option<Duration>,
}

/// Deterministic scheduler on a virtual clock.
///
/// Determinism rule: timers due at the same instant fire in ascending [`TimerId`] order.
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: Duration,
    next_id: u64,
    timers: HashMap<u64, TimerEntry>,
    queue: BinaryHeap<Reverse<(Duration, u64)>>,
}

impl VirtualScheduler {
    /// Create a scheduler with its clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of live (not yet fired or cleared) timers. Intervals stay live until cleared.
    pub fn live_timers(&self) -> usize {
        self.timers.len()
    }

    /// Return `true` while `id` is scheduled.
    pub fn is_live(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id.0)
    }

    /// Due time of the earliest live timer.
    pub fn next_due(&mut self) -> Option<Duration> {
        self.drop_stale_head();
        self.queue.peek().map(|Reverse((due, _))| *due)
    }

    /// Fire the earliest live timer, moving the clock to its due time.
    ///
    /// Intervals are re-armed one period later; one-shot timers are retired.
    pub fn fire_next(&mut self) -> Option<TimerId> {
        self.drop_stale_head();
        let Reverse((due, id)) = self.queue.pop()?;
        self.now = self.now.max(due);

        let entry = self.timers.get_mut(&id)?;
        match entry.period {
            Some(period) => {
                entry.due = due + period;
                self.queue.push(Reverse((entry.due, id)));
            }
            None => {
                self.timers.remove(&id);
            }
        }
        tracing::trace!(timer = id, at_ms = due.as_millis() as u64, "timer fired");
        Some(TimerId(id))
    }

    /// Fire the earliest live timer if it is due at or before `until`.
    ///
    /// When nothing is due the clock advances to `until`.
    pub fn fire_until(&mut self, until: Duration) -> Option<TimerId> {
        match self.next_due() {
            Some(due) if due <= until => self.fire_next(),
            _ => {
                self.now = self.now.max(until);
                None
            }
        }
    }

    fn insert(&mut self, due: Duration, period: Option<Duration>) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.insert(id, TimerEntry { due, period });
        self.queue.push(Reverse((due, id)));
        TimerId(id)
    }

    // Heap entries are not removed on `clear` or re-arm; skip the ones that no longer match.
    fn drop_stale_head(&mut self) {
        while let Some(Reverse((due, id))) = self.queue.peek().copied() {
            match self.timers.get(&id) {
                Some(entry) if entry.due == due => return,
                _ => {
                    self.queue.pop();
                }
            }
        }
    }
}

impl Scheduler for VirtualScheduler {
    fn defer(&mut self) -> TimerId {
        self.insert(self.now, None)
    }

    fn set_interval(&mut self, period: Duration) -> TimerId {
        // A zero period would fire forever without the clock moving.
        let period = period.max(Duration::from_millis(1));
        self.insert(self.now + period, Some(period))
    }

    fn clear(&mut self, id: TimerId) {
        if self.timers.remove(&id.0).is_some() {
            tracing::trace!(timer = id.0, "timer cleared");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animator/scheduler.rs"]
mod tests;
