// SPDX-License-Identifier: MPL-2.0
//! Toast overlay.
//!
//! Renders a toast [`Snapshot`](crate::toast::Snapshot) on top of the
//! application and turns user interaction into [`Message`]s. The overlay
//! never mutates the store itself: the application handles `Dismiss` by
//! calling `remove` and `Action` by running its own action payload.

mod toast;

pub use toast::{accent_color, Toast};

use crate::toast::ToastId;

/// Interaction emitted by the toast overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Message<M> {
    /// The dismiss button of a toast was pressed.
    Dismiss(ToastId),
    /// The action button of a toast was pressed.
    Action(ToastId, M),
}

impl<M> Message<M> {
    /// Id of the toast this message targets.
    #[must_use]
    pub fn toast_id(&self) -> ToastId {
        match self {
            Message::Dismiss(id) | Message::Action(id, _) => *id,
        }
    }
}
