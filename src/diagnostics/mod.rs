// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting and exporting activity reports.
//!
//! Stores and the gallery send events through a [`DiagnosticsHandle`]; the
//! application owns a [`DiagnosticsCollector`] that drains them into a
//! memory-bounded [`CircularBuffer`] and can export them as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event
//! - [`DiagnosticEventKind`]: What happened (toast added/removed, user action, warning)
//! - [`DiagnosticReport`]: Serializable export format

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, RemovalReason, UserAction};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
