// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events record what happened to toasts (added, removed, expired) and what
//! the user did in the gallery, so a report can be read back after a session.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::toast::{ToastId, Variant};

/// Why a toast left its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
    /// Removed by the user or by code calling `remove`.
    Dismissed,
    /// Its expiry timer fired.
    Expired,
    /// Dropped by `clear`.
    Cleared,
}

/// User-initiated actions in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Show a toast of the given variant.
    ShowToast { variant: Variant },
    /// Show a toast carrying an action button.
    ShowToastWithAction,
    /// Show a toast that never expires.
    ShowPersistentToast,
    /// Show a burst of staggered toasts.
    ShowMultipleToasts,
    /// Show the toast of a named gallery example.
    ShowExample { name: String },
    /// Press the action button of a toast.
    PressToastAction { id: ToastId },
    /// Dismiss every toast at once.
    DismissAll,
}

/// A single diagnostic event with its timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates a new diagnostic event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A toast was appended to a store.
    ToastAdded {
        id: ToastId,
        variant: Variant,
        /// Auto-dismiss delay; `None` when the toast is persistent.
        #[serde(skip_serializing_if = "Option::is_none")]
        expires_after_ms: Option<u64>,
    },

    /// A toast left its store.
    ToastRemoved { id: ToastId, reason: RemovalReason },

    /// `remove` was called for an id that is no longer present.
    RedundantRemoval { id: ToastId },

    /// A consumer used a dispatch handle after its provider ended.
    ScopeViolation {
        /// Name of the attempted operation.
        operation: String,
    },

    /// User interaction in the gallery.
    UserAction { action: UserAction },

    /// Non-fatal problem (e.g. unreadable config file).
    Warning { message: String },
}
