// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{gallery, toasts};
use std::path::PathBuf;
use std::time::Instant;

/// Payload of the action buttons the gallery attaches to toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    /// Bring back the "deleted" file of the action toast.
    Undo,
    /// Cancel the deletion of the "Delete item" example.
    RestoreItem,
    /// Open the newsletter preferences of the "Subscribe" example.
    OpenPreferences,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Toast(toasts::Message<GalleryAction>),
    /// A delayed toast of the "multiple" burst is due (index from 1).
    ShowStaggered(usize),
    /// Periodic tick driving toast expiry.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional default toast delay in milliseconds, overriding the config file.
    pub default_duration_ms: Option<u64>,
    /// Where to write the diagnostics report when the window closes.
    pub diagnostics_out: Option<PathBuf>,
}
