// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.

use super::Message;
use crate::config::EXPIRY_TICK_INTERVAL_MS;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for toast auto-dismiss.
///
/// Only active while expiry timers are pending, so an idle gallery does not
/// wake up.
pub fn create_tick_subscription(has_pending_work: bool) -> Subscription<Message> {
    if has_pending_work {
        time::every(Duration::from_millis(EXPIRY_TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Routes window close requests to the application for cleanup.
pub fn create_close_subscription() -> Subscription<Message> {
    window::close_requests().map(Message::WindowCloseRequested)
}
