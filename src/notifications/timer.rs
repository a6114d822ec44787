// SPDX-License-Identifier: MPL-2.0
//! Timers driving the notification lifecycle.
//!
//! Nothing runs in the background: the host calls `Manager::tick` (for
//! example from a periodic `iced` subscription) and every timer whose
//! deadline has passed fires, earliest first. Time is read through the
//! [`Clock`] trait so tests can advance it by hand.

use super::id::NotificationId;
use std::cell::Cell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

/// Handle of a scheduled timer, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Work performed when a timer fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// The notification's timeout elapsed.
    AutoDismiss(NotificationId),
    /// Apply the entrance class one turn after (re)opening.
    Enter(NotificationId),
    /// The exit animation finished; detach the element.
    Detach(NotificationId),
}

/// Pending timers ordered by deadline, then by scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_handle: u64,
    pending: BTreeMap<(Instant, TimerHandle), Task>,
    deadlines: HashMap<TimerHandle, Instant>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to fire `delay` after `now`.
    ///
    /// Returns `None` without scheduling anything if the deadline is not
    /// representable.
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: Task) -> Option<TimerHandle> {
        let deadline = now.checked_add(delay)?;
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.insert((deadline, handle), task);
        self.deadlines.insert(handle, deadline);
        Some(handle)
    }

    /// Cancels a timer. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(deadline) => self.pending.remove(&(deadline, handle)).is_some(),
            None => false,
        }
    }

    /// Removes and returns the earliest timer due at `now`, with its deadline.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, TimerHandle, Task)> {
        let (&(deadline, handle), _) = self.pending.first_key_value()?;
        if deadline > now {
            return None;
        }
        let task = self.pending.remove(&(deadline, handle))?;
        self.deadlines.remove(&handle);
        Some((deadline, handle, task))
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.keys().next().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
