// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Toasts**: Auto-dismiss delay bounds and expiry polling
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default auto-dismiss delay for toasts without an explicit duration (ms).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Minimum configurable default delay (ms).
pub const MIN_TOAST_DURATION_MS: u64 = 500;

/// Maximum configurable default delay (ms).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Interval between expiry checks while timers are pending (ms).
pub const EXPIRY_TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_DURATION_MS > 0);
    assert!(MAX_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS >= MIN_TOAST_DURATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS <= MAX_TOAST_DURATION_MS);
    assert!(EXPIRY_TICK_INTERVAL_MS < MIN_TOAST_DURATION_MS);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
