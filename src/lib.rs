// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is a toast notification manager for the Iced GUI framework.
//!
//! The [`toast`] module holds the framework-independent core: an ordered
//! store of transient notifications with per-toast expiry timers, shared by
//! consumers through a provider scope. [`ui::toasts`] renders it as an Iced
//! overlay, and [`app`] is a gallery that exercises every kind of toast.

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod toast;
pub mod ui;
