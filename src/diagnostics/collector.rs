// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! This module provides the central collector that receives events from
//! stores and the gallery, and keeps them in a circular buffer.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::report::{write_atomic, DiagnosticReport, ReportMetadata, SerializableEvent};
use super::{CircularBuffer, DiagnosticEvent, DiagnosticEventKind, UserAction};
use crate::error::Result;

/// Handle for sending diagnostic events to the collector.
///
/// This handle is cheap to clone. Events are sent via a bounded channel so
/// logging never blocks the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs an event, dropping it if the channel is full.
    pub fn log(&self, kind: DiagnosticEventKind) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }

    /// Logs a user action event.
    pub fn log_action(&self, action: UserAction) {
        self.log(DiagnosticEventKind::UserAction { action });
    }

    /// Logs a warning message.
    pub fn log_warning(&self, message: impl Into<String>) {
        self.log(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, for relative event timestamps.
    collection_started_at: Instant,
    /// Wall-clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    /// Creates a new collector keeping at most `capacity` events.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_channel_capacity(capacity, DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a collector with an explicit channel size.
    #[must_use]
    pub fn with_channel_capacity(capacity: usize, channel_capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(channel_capacity);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer.
    ///
    /// Call this periodically (e.g., on each UI tick).
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns how long the collector has been running.
    #[must_use]
    pub fn collection_duration(&self) -> Duration {
        self.collection_started_at.elapsed()
    }

    /// Builds a report from the current buffer contents.
    #[must_use]
    pub fn report(&self) -> DiagnosticReport {
        let collection_duration_ms =
            u64::try_from(self.collection_duration().as_millis()).unwrap_or(u64::MAX);

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );

        DiagnosticReport::new(metadata, events)
    }

    /// Exports all collected events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.report())?)
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = self.export_json()?;
        write_atomic(path, &json)?;
        Ok(path.to_path_buf())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("events", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish()
    }
}
