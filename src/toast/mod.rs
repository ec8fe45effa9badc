// SPDX-License-Identifier: MPL-2.0
//! Toast notification manager.
//!
//! Toasts are short-lived messages (save succeeded, an error occurred…)
//! shown on top of the application until they expire or are dismissed.
//!
//! # Components
//!
//! - [`notification`] - `ToastSpec`, `Notification`, `Variant`, `Action`, `Lifetime`
//! - [`store`] - `Store` holding the ordered toasts and their expiry timers
//! - [`provider`] - `Provider` scope and the `Dispatch` consumer handle
//! - [`timer`] - deadline-ordered expiry timers, one per toast
//! - [`clock`] - real and simulated time sources
//!
//! # Usage
//!
//! ```
//! use iced_toast::toast::{ManualClock, Provider, Store, ToastSpec};
//!
//! let clock = ManualClock::new();
//! let provider: Provider<()> = Provider::with_store(Store::with_clock(clock.clone()));
//! let toasts = provider.dispatch();
//!
//! toasts.add(ToastSpec::success("Saved"));
//! assert_eq!(toasts.toasts().len(), 1);
//!
//! clock.advance_ms(5000);
//! toasts.expire_due();
//! assert!(toasts.toasts().is_empty());
//! ```
//!
//! # Lifetimes
//!
//! - No explicit duration: expires after the store default (5 s)
//! - `duration_ms(n)` with `n > 0`: expires after `n` ms
//! - `duration_ms(0)` or `persistent()`: stays until removed

pub mod clock;
pub mod id;
pub mod notification;
pub mod provider;
pub mod store;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use id::ToastId;
pub use notification::{Action, Lifetime, Notification, ToastSpec, Variant};
pub use provider::{Dispatch, Provider};
pub use store::{Snapshot, Store};
pub use timer::ExpiryTimers;
