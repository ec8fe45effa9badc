// SPDX-License-Identifier: MPL-2.0
//! Application root state: the toast gallery.
//!
//! The `App` owns the toast [`Provider`] for the whole session and hands a
//! [`Dispatch`] to the message handlers. After every update the current
//! snapshot is refreshed so `view` can borrow it.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, GalleryAction, Message};
pub use update::{COPY_LINK_TOAST_DURATION_MS, MULTIPLE_TOAST_COUNT, MULTIPLE_TOAST_STAGGER};

use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsCollector, DiagnosticsHandle, UserAction};
use crate::i18n::fluent::I18n;
use crate::toast::{Clock, Dispatch, Provider, Snapshot, Store, SystemClock, ToastSpec};
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Owner of the toast store; dropping it ends the toast scope.
    toasts: Provider<GalleryAction>,
    dispatch: Dispatch<GalleryAction>,
    /// Toasts as of the last update, borrowed by `view`.
    snapshot: Snapshot<GalleryAction>,
    diagnostics: DiagnosticsCollector,
    diagnostics_handle: DiagnosticsHandle,
    diagnostics_out: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("toasts", &self.snapshot.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
///
/// Closing is routed through [`Message::WindowCloseRequested`] so the
/// diagnostics report can be written first.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_clock(None, Config::default(), SystemClock)
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(millis) = flags.default_duration_ms {
            config.toasts.default_duration_ms = Some(millis);
        }

        let mut app = Self::with_clock(flags.lang, config, SystemClock);
        app.diagnostics_out = flags.diagnostics_out;

        if let Some(key) = config_warning {
            app.diagnostics_handle.log_warning(key.clone());
            app.dispatch
                .add(ToastSpec::warning(app.i18n.tr(&key)).persistent());
            app.refresh();
        }

        (app, Task::none())
    }

    /// Builds the application around a store driven by `clock`.
    pub fn with_clock(lang: Option<String>, config: Config, clock: impl Clock + 'static) -> Self {
        let i18n = I18n::new(lang, &config);
        let diagnostics = DiagnosticsCollector::new(config.diagnostics_buffer_capacity());
        let diagnostics_handle = diagnostics.handle();

        let store = Store::with_clock(clock).with_default_duration(config.default_toast_duration());
        let mut toasts = Provider::with_store(store);
        toasts.set_diagnostics(diagnostics_handle.clone());
        let dispatch = toasts.dispatch();

        Self {
            i18n,
            theme_mode: config.general.theme_mode,
            snapshot: toasts.toasts(),
            toasts,
            dispatch,
            diagnostics,
            diagnostics_handle,
            diagnostics_out: None,
        }
    }

    /// Toasts as of the last update.
    #[must_use]
    pub fn toasts(&self) -> &Snapshot<GalleryAction> {
        &self.snapshot
    }

    /// Collected diagnostic events.
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(self.toasts.has_pending_work()),
            subscription::create_close_subscription(),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            dispatch: &self.dispatch,
            diagnostics: &self.diagnostics_handle,
        };

        let task = match message {
            Message::Gallery(gallery::Message::DismissAll) => {
                self.diagnostics_handle.log_action(UserAction::DismissAll);
                self.toasts.clear();
                Task::none()
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Toast(toast_message) => update::handle_toast_message(&mut ctx, toast_message),
            Message::ShowStaggered(index) => update::handle_staggered(&mut ctx, index),
            Message::Tick(_instant) => {
                // Tick the store to handle auto-dismiss
                self.toasts.expire_due();
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                self.export_diagnostics();
                window::close(id)
            }
        };

        self.refresh();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            toasts: &self.snapshot,
        })
    }

    /// Picks up store changes and pending diagnostic events.
    fn refresh(&mut self) {
        self.snapshot = self.toasts.toasts();
        self.diagnostics.process_pending();
    }

    fn export_diagnostics(&mut self) {
        let Some(path) = self.diagnostics_out.as_ref() else {
            return;
        };
        self.diagnostics.process_pending();
        if let Err(err) = self.diagnostics.export_to_file(path) {
            eprintln!("Failed to write diagnostics report: {err}");
        }
    }
}
