// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery fills the window; the toast overlay is stacked on top of it.

use super::{GalleryAction, Message};
use crate::i18n::fluent::I18n;
use crate::toast::Snapshot;
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::toasts::Toast;
use iced::{
    widget::{Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub toasts: &'a Snapshot<GalleryAction>,
}

/// Renders the gallery with the toast overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let gallery_view = gallery::view(GalleryViewContext {
        i18n: ctx.i18n,
        active_count: ctx.toasts.len(),
    })
    .map(Message::Gallery);

    let overlay = Toast::view_overlay(ctx.toasts, ctx.i18n).map(Message::Toast);

    Container::new(
        Stack::new()
            .push(gallery_view)
            .push(overlay)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
