// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts appear as small cards with a variant-colored accent, an optional
//! action button, and a dismiss button.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::toast::{Notification, Snapshot, Variant};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::styles;
use iced::widget::{button, container, text, tooltip, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a, M: Clone + 'a>(
        notification: &'a Notification<M>,
        i18n: &'a I18n,
    ) -> Element<'a, Message<M>> {
        let accent = accent_color(notification.variant());

        let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill);

        if let Some(title) = notification.title() {
            body = body.push(
                Text::new(title)
                    .size(typography::BODY)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }

        if let Some(description) = notification.description() {
            body = body.push(Text::new(description).size(typography::BODY_SM).style(
                |theme: &Theme| text::Style {
                    color: Some(Color {
                        a: opacity::TEXT_SECONDARY,
                        ..theme.palette().text
                    }),
                },
            ));
        }

        // Layout: [title/description] [action] [dismiss]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(body);

        if let (Some(action), Some(on_press)) =
            (notification.action(), Self::action_message(notification))
        {
            content = content.push(
                button(Text::new(action.label()).size(typography::BODY_SM))
                    .on_press(on_press)
                    .padding([spacing::XXS, spacing::XS])
                    .style(move |theme: &Theme, status| {
                        styles::button::outlined(theme, status, accent)
                    }),
            );
        }

        let dismiss_button = button(Text::new("×").size(typography::BODY))
            .on_press(Self::dismiss_message(notification))
            .padding([0.0, spacing::XS])
            .style(styles::button::ghost);

        content = content.push(tooltip(
            dismiss_button,
            Text::new(i18n.tr("toast-dismiss")).size(typography::BODY_SM),
            tooltip::Position::Left,
        ));

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent))
            .into()
    }

    /// Message emitted by the dismiss button of `notification`.
    #[must_use]
    pub fn dismiss_message<M>(notification: &Notification<M>) -> Message<M> {
        Message::Dismiss(notification.id())
    }

    /// Message emitted by the action button of `notification`, if it has one.
    #[must_use]
    pub fn action_message<M: Clone>(notification: &Notification<M>) -> Option<Message<M>> {
        notification
            .action()
            .map(|action| Message::Action(notification.id(), action.on_press().clone()))
    }

    /// Renders every toast in `toasts`, stacked in insertion order.
    ///
    /// Positions toasts in the bottom-right corner, so the newest toast sits
    /// closest to the edge.
    pub fn view_overlay<'a, M: Clone + 'a>(
        toasts: &'a Snapshot<M>,
        i18n: &'a I18n,
    ) -> Element<'a, Message<M>> {
        if toasts.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toast_column = Column::with_children(
            toasts
                .iter()
                .map(|notification| Self::view(notification, i18n)),
        )
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Accent color of a toast variant.
#[must_use]
pub fn accent_color(variant: Variant) -> Color {
    match variant {
        Variant::Default => palette::GRAY_400,
        Variant::Success => palette::SUCCESS_500,
        Variant::Error => palette::ERROR_500,
        Variant::Warning => palette::WARNING_500,
        Variant::Info => palette::INFO_500,
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
