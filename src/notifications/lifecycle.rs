// SPDX-License-Identifier: MPL-2.0
//! Pure notification lifecycle.
//!
//! [`Lifecycle`] owns the notification records, the default options and the
//! timer queue. Every operation returns the [`Change`]s it caused; applying
//! them to a document is the renderer's job, so the transitions here can be
//! exercised without any document at all.
//!
//! ```text
//! absent ──edit──▶ Active ──remove──▶ Exiting ──500ms──▶ Detached
//!                    ▲                   │                  │
//!                    └──────edit─────────┴───────edit───────┘
//! ```

use super::id::NotificationId;
use super::options::{Action, Options, OptionsPatch};
use super::timer::{Task, TimerHandle, TimerQueue};
use crate::config::{ENTRANCE_DELAY, EXIT_ANIMATION};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::time::Instant;

/// Where a notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Attached and visible; the auto-dismiss timer may be running.
    Active,
    /// Exit animation running; detachment is scheduled.
    Exiting,
    /// Not attached to the document. The record is kept for reopening.
    Detached,
}

/// A state change the renderer has to reflect.
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// A record was allocated; its element must be built.
    Created(NotificationId),
    /// The element must be placed in the wrapper.
    Attached(NotificationId),
    ContentChanged {
        id: NotificationId,
        title: String,
        text: String,
    },
    DismissableChanged {
        id: NotificationId,
        dismissable: bool,
    },
    /// The notification was (re)opened; presentation hints apply.
    Opened(NotificationId),
    /// One turn after opening: start the entrance animation.
    Entered(NotificationId),
    /// Start the exit animation and collapse the element's space.
    ExitStarted(NotificationId),
    /// The element must leave the document.
    Detached(NotificationId),
}

#[derive(Debug)]
struct Record {
    phase: Phase,
    options: Option<Options>,
    dismiss_timer: Option<TimerHandle>,
    removal_timer: Option<TimerHandle>,
    enter_timer: Option<TimerHandle>,
}

impl Record {
    fn new() -> Self {
        Self {
            phase: Phase::Detached,
            options: None,
            dismiss_timer: None,
            removal_timer: None,
            enter_timer: None,
        }
    }
}

/// Cancels the timer stored in `slot`, if any.
fn clear_timer(timers: &mut TimerQueue, slot: &mut Option<TimerHandle>) {
    if let Some(handle) = slot.take() {
        timers.cancel(handle);
    }
}

/// Notification records and their timers.
#[derive(Debug)]
pub struct Lifecycle {
    records: HashMap<NotificationId, Record>,
    defaults: Options,
    timers: TimerQueue,
    rng: StdRng,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a lifecycle whose id generation is reproducible.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Reseeds id generation; existing records are untouched.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            records: HashMap::new(),
            defaults: Options::default(),
            timers: TimerQueue::new(),
            rng,
        }
    }

    pub fn set_default_options(&mut self, patch: &OptionsPatch) {
        self.defaults = self.defaults.merged(patch);
    }

    #[must_use]
    pub fn defaults(&self) -> &Options {
        &self.defaults
    }

    /// Allocates a fresh id and opens a notification with it.
    pub fn add(&mut self, now: Instant, patch: &OptionsPatch) -> (NotificationId, Vec<Change>) {
        let records = &self.records;
        let id = NotificationId::generate(&mut self.rng, |candidate| {
            records.contains_key(candidate)
        });
        let changes = self.edit(now, &id, patch);
        (id, changes)
    }

    /// Creates or updates a notification and (re)opens it.
    pub fn edit(&mut self, now: Instant, id: &NotificationId, patch: &OptionsPatch) -> Vec<Change> {
        let mut changes = Vec::new();
        let record = self.records.entry(id.clone()).or_insert_with(|| {
            changes.push(Change::Created(id.clone()));
            Record::new()
        });

        clear_timer(&mut self.timers, &mut record.removal_timer);

        if record.phase == Phase::Detached {
            changes.push(Change::Attached(id.clone()));
        }
        record.phase = Phase::Active;

        let options = record
            .options
            .as_ref()
            .unwrap_or(&self.defaults)
            .merged(patch);

        changes.push(Change::ContentChanged {
            id: id.clone(),
            title: options.title.clone(),
            text: options.text.clone(),
        });

        clear_timer(&mut self.timers, &mut record.dismiss_timer);
        if let Some(timeout) = options.timeout {
            record.dismiss_timer = self
                .timers
                .schedule(now, timeout, Task::AutoDismiss(id.clone()));
            if record.dismiss_timer.is_none() {
                log::warn!("timeout {timeout:?} of notification {id} is out of range; keeping it open");
            }
        }

        changes.push(Change::DismissableChanged {
            id: id.clone(),
            dismissable: options.dismissable,
        });

        clear_timer(&mut self.timers, &mut record.enter_timer);
        record.enter_timer = self
            .timers
            .schedule(now, ENTRANCE_DELAY, Task::Enter(id.clone()));

        changes.push(Change::Opened(id.clone()));

        log::debug!("opened notification {id} (timeout {:?})", options.timeout);
        record.options = Some(options);
        changes
    }

    /// Starts the exit of an active notification.
    ///
    /// Returns `None` if the notification is unknown, exiting or detached.
    pub fn remove(&mut self, now: Instant, id: &NotificationId) -> Option<Vec<Change>> {
        let record = self.records.get_mut(id)?;
        if record.phase != Phase::Active {
            return None;
        }

        record.phase = Phase::Exiting;
        clear_timer(&mut self.timers, &mut record.dismiss_timer);
        clear_timer(&mut self.timers, &mut record.enter_timer);
        clear_timer(&mut self.timers, &mut record.removal_timer);
        record.removal_timer = self
            .timers
            .schedule(now, EXIT_ANIMATION, Task::Detach(id.clone()));

        log::debug!("removing notification {id}");
        Some(vec![Change::ExitStarted(id.clone())])
    }

    /// Fires every timer due at `now`.
    ///
    /// Each timer runs at its own deadline, so timers scheduled by it are
    /// relative to that deadline rather than to `now`.
    pub fn advance(&mut self, now: Instant) -> Vec<Change> {
        let mut changes = Vec::new();
        while let Some((deadline, handle, task)) = self.timers.pop_due(now) {
            changes.extend(self.fire(deadline, handle, task));
        }
        changes
    }

    fn fire(&mut self, at: Instant, handle: TimerHandle, task: Task) -> Vec<Change> {
        match task {
            Task::AutoDismiss(id) => {
                let Some(record) = self.records.get_mut(&id) else {
                    return Vec::new();
                };
                if record.dismiss_timer != Some(handle) {
                    return Vec::new();
                }
                record.dismiss_timer = None;
                log::debug!("notification {id} timed out");
                self.remove(at, &id).unwrap_or_default()
            }
            Task::Enter(id) => {
                let Some(record) = self.records.get_mut(&id) else {
                    return Vec::new();
                };
                if record.enter_timer != Some(handle) {
                    return Vec::new();
                }
                record.enter_timer = None;
                if record.phase == Phase::Active {
                    vec![Change::Entered(id)]
                } else {
                    Vec::new()
                }
            }
            Task::Detach(id) => {
                let Some(record) = self.records.get_mut(&id) else {
                    return Vec::new();
                };
                if record.removal_timer != Some(handle) {
                    return Vec::new();
                }
                record.removal_timer = None;
                record.phase = Phase::Detached;
                log::debug!("detached notification {id}");
                vec![Change::Detached(id)]
            }
        }
    }

    #[must_use]
    pub fn exists(&self, id: &NotificationId) -> bool {
        self.records.contains_key(id)
    }

    /// True if the id is unknown or the notification reached `Detached`.
    ///
    /// This only looks at the phase; an element still waiting for the
    /// wrapper to mount is not detached here.
    #[must_use]
    pub fn is_dismissed(&self, id: &NotificationId) -> bool {
        self.phase(id).is_none_or(|phase| phase == Phase::Detached)
    }

    #[must_use]
    pub fn phase(&self, id: &NotificationId) -> Option<Phase> {
        self.records.get(id).map(|record| record.phase)
    }

    #[must_use]
    pub fn options(&self, id: &NotificationId) -> Option<&Options> {
        self.records.get(id).and_then(|record| record.options.as_ref())
    }

    /// Returns the stored click action; `Action::None` for unknown ids.
    #[must_use]
    pub fn action(&self, id: &NotificationId) -> Action {
        self.options(id)
            .map(|options| options.action.clone())
            .unwrap_or_default()
    }

    /// Ids of all records, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &NotificationId> {
        self.records.keys()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    #[must_use]
    pub fn pending_timer_count(&self) -> usize {
        self.timers.len()
    }
}
