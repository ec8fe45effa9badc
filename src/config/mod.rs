// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[toasts]` - Default auto-dismiss delay
//! - `[diagnostics]` - Event buffer size
//!
//! # Path Resolution
//!
//! See [`paths`]: explicit override, then `--config-dir`, then
//! `ICED_TOAST_CONFIG_DIR`, then the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let delay = config.default_toast_duration();
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// i18n key of the warning shown when the config file cannot be read.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Toast behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastsConfig {
    /// Delay before a toast without explicit duration is dismissed (ms).
    #[serde(
        default = "default_toast_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_duration_ms: Option<u64>,
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: default_toast_duration_ms(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory.
    #[serde(
        default = "default_buffer_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub toasts: ToastsConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl Config {
    /// Default toast delay, clamped to the supported range.
    ///
    /// A configured `0` does not make every toast persistent; it is raised to
    /// the minimum delay.
    #[must_use]
    pub fn default_toast_duration(&self) -> Duration {
        let millis = self
            .toasts
            .default_duration_ms
            .unwrap_or(DEFAULT_TOAST_DURATION_MS)
            .clamp(MIN_TOAST_DURATION_MS, MAX_TOAST_DURATION_MS);
        Duration::from_millis(millis)
    }

    /// Diagnostics buffer capacity, clamped to the supported range.
    #[must_use]
    pub fn diagnostics_buffer_capacity(&self) -> usize {
        self.diagnostics
            .buffer_capacity
            .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
            .clamp(
                MIN_DIAGNOSTICS_BUFFER_CAPACITY,
                MAX_DIAGNOSTICS_BUFFER_CAPACITY,
            )
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_toast_duration_ms() -> Option<u64> {
    Some(DEFAULT_TOAST_DURATION_MS)
}

fn default_buffer_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            return match load_from_path(&path) {
                Ok(config) => (config, None),
                Err(_) => (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string())),
            };
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
