// SPDX-License-Identifier: MPL-2.0
//! Provider scope and the dispatch API.
//!
//! A [`Provider`] owns exactly one [`Store`] for as long as it lives. Any
//! number of consumers receive a [`Dispatch`] from it and share that store.
//! Once the provider is dropped the scope is over: every dispatch created
//! from it fails fast instead of silently operating on nothing.
//!
//! Everything here is single-threaded. Store mutations run to completion
//! inside one call, the same way they would inside one event-loop turn.

use super::id::ToastId;
use super::notification::ToastSpec;
use super::store::{Snapshot, Store};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use crate::error::ScopeError;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Owner of one toast store.
pub struct Provider<M> {
    store: Rc<RefCell<Store<M>>>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<M: Clone> Provider<M> {
    /// Starts a scope with a fresh store on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(Store::new())
    }

    /// Starts a scope around an already configured store.
    #[must_use]
    pub fn with_store(store: Store<M>) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
            diagnostics: None,
        }
    }

    /// Routes store events and scope violations to `handle`.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.store.borrow_mut().set_diagnostics(handle.clone());
        self.diagnostics = Some(handle);
    }

    /// Returns a consumer handle bound to this scope.
    #[must_use]
    pub fn dispatch(&self) -> Dispatch<M> {
        Dispatch {
            store: Rc::downgrade(&self.store),
            diagnostics: self.diagnostics.clone(),
        }
    }

    /// Current toasts.
    #[must_use]
    pub fn toasts(&self) -> Snapshot<M> {
        self.store.borrow().toasts()
    }

    /// Returns whether expiry timers are pending.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        self.store.borrow().has_pending_work()
    }

    /// Fires due expiry timers. See [`Store::expire_due`].
    pub fn expire_due(&self) -> Vec<ToastId> {
        self.store.borrow_mut().expire_due()
    }

    /// Removes every toast in this scope.
    pub fn clear(&self) {
        self.store.borrow_mut().clear();
    }
}

impl<M: Clone> Default for Provider<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for Provider<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("store", &self.store.borrow())
            .finish()
    }
}

/// Consumer handle for one provider scope.
///
/// Cheap to clone. The `try_*` methods report use outside the scope as
/// [`ScopeError::OutsideProvider`]; the plain methods treat it as a
/// programming error and panic.
pub struct Dispatch<M> {
    store: Weak<RefCell<Store<M>>>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<M: Clone> Dispatch<M> {
    /// A handle that belongs to no provider. Every call on it fails.
    #[must_use]
    pub fn detached() -> Self {
        Self {
            store: Weak::new(),
            diagnostics: None,
        }
    }

    /// Returns whether the provider scope is still alive.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.store.strong_count() > 0
    }

    /// Adds a toast and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::OutsideProvider`] if the provider has ended.
    pub fn try_add(&self, spec: ToastSpec<M>) -> Result<ToastId, ScopeError> {
        self.with_store("add", |store| store.add(spec))
    }

    /// Removes a toast; `Ok(false)` if it was already gone.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::OutsideProvider`] if the provider has ended.
    pub fn try_remove(&self, id: ToastId) -> Result<bool, ScopeError> {
        self.with_store("remove", |store| store.remove(id))
    }

    /// Current toasts.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::OutsideProvider`] if the provider has ended.
    pub fn try_toasts(&self) -> Result<Snapshot<M>, ScopeError> {
        self.with_store("toasts", |store| store.toasts())
    }

    /// Fires due expiry timers.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::OutsideProvider`] if the provider has ended.
    pub fn try_expire_due(&self) -> Result<Vec<ToastId>, ScopeError> {
        self.with_store("expire_due", Store::expire_due)
    }

    /// Adds a toast and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if the provider has ended.
    pub fn add(&self, spec: ToastSpec<M>) -> ToastId {
        fatal(self.try_add(spec))
    }

    /// Removes a toast; returns `false` if it was already gone.
    ///
    /// # Panics
    ///
    /// Panics if the provider has ended.
    pub fn remove(&self, id: ToastId) -> bool {
        fatal(self.try_remove(id))
    }

    /// Current toasts.
    ///
    /// # Panics
    ///
    /// Panics if the provider has ended.
    #[must_use]
    pub fn toasts(&self) -> Snapshot<M> {
        fatal(self.try_toasts())
    }

    /// Fires due expiry timers.
    ///
    /// # Panics
    ///
    /// Panics if the provider has ended.
    pub fn expire_due(&self) -> Vec<ToastId> {
        fatal(self.try_expire_due())
    }

    fn with_store<R>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut Store<M>) -> R,
    ) -> Result<R, ScopeError> {
        let Some(store) = self.store.upgrade() else {
            if let Some(handle) = &self.diagnostics {
                handle.log(DiagnosticEventKind::ScopeViolation {
                    operation: operation.to_string(),
                });
            }
            return Err(ScopeError::OutsideProvider);
        };

        let mut store = store.borrow_mut();
        Ok(f(&mut store))
    }
}

fn fatal<T>(result: Result<T, ScopeError>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

impl<M> Clone for Dispatch<M> {
    fn clone(&self) -> Self {
        Self {
            store: Weak::clone(&self.store),
            diagnostics: self.diagnostics.clone(),
        }
    }
}

impl<M> fmt::Debug for Dispatch<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatch")
            .field("active", &(self.store.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticsCollector;
    use crate::toast::clock::ManualClock;

    fn provider() -> (Provider<()>, ManualClock) {
        let clock = ManualClock::new();
        (Provider::with_store(Store::with_clock(clock.clone())), clock)
    }

    #[test]
    fn consumers_share_one_store() {
        let (provider, _clock) = provider();
        let producer = provider.dispatch();
        let reader = provider.dispatch();

        let a = producer.add(ToastSpec::new().title("A"));
        let b = reader.add(ToastSpec::new().title("B"));

        assert_eq!(reader.toasts().ids(), vec![a, b]);
        assert_eq!(provider.toasts().ids(), vec![a, b]);
    }

    #[test]
    fn independent_providers_do_not_share_toasts() {
        let (outer, _) = provider();
        let (inner, _) = provider();

        outer.dispatch().add(ToastSpec::new().title("outer"));
        assert!(inner.toasts().is_empty());
        assert_eq!(outer.toasts().len(), 1);
    }

    #[test]
    fn dispatch_after_provider_drop_reports_scope_error() {
        let (provider, _clock) = provider();
        let dispatch = provider.dispatch();
        assert!(dispatch.is_active());

        drop(provider);
        assert!(!dispatch.is_active());
        assert_eq!(
            dispatch.try_add(ToastSpec::new().title("late")),
            Err(ScopeError::OutsideProvider)
        );
        assert_eq!(dispatch.try_remove(ToastId::new()), Err(ScopeError::OutsideProvider));
        assert!(dispatch.try_toasts().is_err());
    }

    #[test]
    #[should_panic(expected = "outside of an active toast provider")]
    fn detached_dispatch_panics_on_add() {
        let dispatch: Dispatch<()> = Dispatch::detached();
        dispatch.add(ToastSpec::new().title("nowhere"));
    }

    #[test]
    fn expiry_through_dispatch() {
        let (provider, clock) = provider();
        let dispatch = provider.dispatch();
        dispatch.add(ToastSpec::new().title("Saved"));
        assert!(provider.has_pending_work());

        clock.advance_ms(5000);
        assert_eq!(dispatch.expire_due().len(), 1);
        assert!(dispatch.toasts().is_empty());
    }

    #[test]
    fn add_then_remove_via_dispatch() {
        let (provider, clock) = provider();
        let dispatch = provider.dispatch();
        let id = dispatch.add(ToastSpec::new().title("X").duration_ms(0));

        assert!(dispatch.remove(id));
        assert!(!dispatch.remove(id));
        assert!(dispatch.toasts().is_empty());

        clock.advance_ms(60_000);
        assert!(provider.expire_due().is_empty());
    }

    #[test]
    fn scope_violation_is_logged() {
        let mut collector = DiagnosticsCollector::new(8);
        let (mut provider, _clock) = provider();
        provider.set_diagnostics(collector.handle());
        let dispatch = provider.dispatch();
        drop(provider);

        let _ = dispatch.try_remove(ToastId::new());
        collector.process_pending();

        assert!(collector.iter().any(|event| matches!(
            &event.kind,
            DiagnosticEventKind::ScopeViolation { operation } if operation == "remove"
        )));
    }
}
