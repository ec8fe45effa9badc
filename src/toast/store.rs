// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The [`Store`] keeps the ordered sequence of active toasts and one expiry
//! timer per toast that has a finite lifetime. Readers get a [`Snapshot`]:
//! mutations replace the sequence copy-on-write, so a snapshot handed to a
//! renderer never changes under it.

use super::clock::{Clock, SystemClock};
use super::id::ToastId;
use super::notification::{default_duration, Notification, ToastSpec};
use super::timer::ExpiryTimers;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle, RemovalReason};
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Immutable view of a store's toasts at one point in time.
pub struct Snapshot<M>(Rc<Vec<Notification<M>>>);

impl<M> Snapshot<M> {
    /// A snapshot with no toasts.
    #[must_use]
    pub fn empty() -> Self {
        Self(Rc::new(Vec::new()))
    }

    /// Returns whether both snapshots share the same sequence.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Ids in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<ToastId> {
        self.0.iter().map(Notification::id).collect()
    }
}

impl<M> Clone for Snapshot<M> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<M> Default for Snapshot<M> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<M> Deref for Snapshot<M> {
    type Target = [Notification<M>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a, M> IntoIterator for &'a Snapshot<M> {
    type Item = &'a Notification<M>;
    type IntoIter = std::slice::Iter<'a, Notification<M>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<M: fmt::Debug> fmt::Debug for Snapshot<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Ordered sequence of active toasts plus their expiry timers.
pub struct Store<M> {
    /// Active toasts, oldest first.
    toasts: Rc<Vec<Notification<M>>>,
    timers: ExpiryTimers,
    clock: Box<dyn Clock>,
    /// Delay applied to toasts created with `Lifetime::Default`.
    default_duration: Duration,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<M: Clone> Store<M> {
    /// Creates an empty store on the system clock with the default delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an empty store driven by `clock`.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            toasts: Rc::new(Vec::new()),
            timers: ExpiryTimers::new(),
            clock: Box::new(clock),
            default_duration: default_duration(),
            diagnostics: None,
        }
    }

    /// Sets the delay used for toasts without an explicit lifetime.
    #[must_use]
    pub fn with_default_duration(mut self, duration: Duration) -> Self {
        self.set_default_duration(duration);
        self
    }

    /// Sets the delay used for toasts without an explicit lifetime.
    ///
    /// Only affects toasts added afterwards.
    pub fn set_default_duration(&mut self, duration: Duration) {
        self.default_duration = duration;
    }

    /// Sets the diagnostics handle used to log toast lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Appends a toast built from `spec` and returns its id.
    ///
    /// Unless the toast is persistent, an expiry timer is scheduled that
    /// removes it once its delay has elapsed. A delay too large to be
    /// represented as a deadline never fires.
    pub fn add(&mut self, spec: ToastSpec<M>) -> ToastId {
        let now = self.clock.now();
        let notification = Notification::from_spec(spec, now);
        let id = notification.id();
        let expires_after = notification.lifetime().resolve(self.default_duration);

        if let Some(deadline) = expires_after.and_then(|delay| now.checked_add(delay)) {
            self.timers.schedule(id, deadline);
        }

        self.log(DiagnosticEventKind::ToastAdded {
            id,
            variant: notification.variant(),
            expires_after_ms: expires_after
                .map(|delay| u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)),
        });

        Rc::make_mut(&mut self.toasts).push(notification);
        id
    }

    /// Removes the toast with `id` and cancels its timer.
    ///
    /// Returns `true` if a toast was removed. Removing an absent id is not an
    /// error: the timer and the user may both try to dismiss the same toast.
    pub fn remove(&mut self, id: ToastId) -> bool {
        self.timers.cancel(id);

        if self.take(id, RemovalReason::Dismissed).is_some() {
            true
        } else {
            self.log(DiagnosticEventKind::RedundantRemoval { id });
            false
        }
    }

    /// Fires every timer that is due on the store clock.
    ///
    /// Returns the ids actually removed. Timers whose toast is already gone
    /// are discarded silently.
    pub fn expire_due(&mut self) -> Vec<ToastId> {
        let now = self.clock.now();
        self.expire_at(now)
    }

    fn expire_at(&mut self, now: Instant) -> Vec<ToastId> {
        self.timers
            .take_due(now)
            .into_iter()
            .filter(|id| self.take(*id, RemovalReason::Expired).is_some())
            .collect()
    }

    /// Removes every toast and cancels every timer.
    pub fn clear(&mut self) {
        self.timers.clear();

        let removed = std::mem::replace(&mut self.toasts, Rc::new(Vec::new()));
        for notification in removed.iter() {
            self.log(DiagnosticEventKind::ToastRemoved {
                id: notification.id(),
                reason: RemovalReason::Cleared,
            });
        }
    }

    /// Returns the current sequence.
    #[must_use]
    pub fn toasts(&self) -> Snapshot<M> {
        Snapshot(Rc::clone(&self.toasts))
    }

    /// Removes the toast from the sequence without touching timers.
    fn take(&mut self, id: ToastId, reason: RemovalReason) -> Option<Notification<M>> {
        let position = self.toasts.iter().position(|n| n.id() == id)?;
        let notification = Rc::make_mut(&mut self.toasts).remove(position);
        self.log(DiagnosticEventKind::ToastRemoved { id, reason });
        Some(notification)
    }
}

impl<M> Store<M> {
    pub fn iter(&self) -> impl Iterator<Item = &Notification<M>> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Notification<M>> {
        self.toasts.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: ToastId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Number of expiry timers still pending.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Earliest pending expiry, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Returns whether the store needs periodic expiry checks.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.timers.is_empty()
    }

    fn log(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

impl<M: Clone> Default for Store<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for Store<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("toasts", &self.toasts.len())
            .field("pending_timers", &self.timers.len())
            .field("default_duration", &self.default_duration)
            .finish()
    }
}
