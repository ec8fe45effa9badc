// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: one button per kind of toast.
//!
//! The screen only emits [`Message`]s; the application decides what each
//! button adds to the toast store.

use crate::i18n::fluent::I18n;
use crate::toast::Variant;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Number of toasts currently shown.
    pub active_count: usize,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Show a toast of the given variant.
    Show(Variant),
    /// Show a toast carrying an "Undo" action.
    ShowWithAction,
    /// Show a toast that never expires.
    ShowPersistent,
    /// Show three toasts, one after the other.
    ShowMultiple,
    /// Show the toast of a real-world example.
    ShowExample(Example),
    /// Dismiss every toast.
    DismissAll,
}

/// Toasts as an application would show them after common operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Example {
    /// Success toast after saving.
    SaveChanges,
    /// Error toast whose "Undo" action restores the item.
    DeleteItem,
    /// Toast with a short explicit delay.
    CopyLink,
    /// Success toast with a "Preferences" action.
    Subscribe,
}

impl Example {
    /// Every example, in display order.
    pub const ALL: [Example; 4] = [
        Example::SaveChanges,
        Example::DeleteItem,
        Example::CopyLink,
        Example::Subscribe,
    ];

    /// Stable kebab-case name, shared by i18n keys and diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Example::SaveChanges => "save-changes",
            Example::DeleteItem => "delete-item",
            Example::CopyLink => "copy-link",
            Example::Subscribe => "subscribe",
        }
    }
}

/// i18n key of the label of `variant`'s button.
fn show_label_key(variant: Variant) -> &'static str {
    match variant {
        Variant::Default => "gallery-show-default",
        Variant::Success => "gallery-show-success",
        Variant::Error => "gallery-show-error",
        Variant::Warning => "gallery-show-warning",
        Variant::Info => "gallery-show-info",
    }
}

/// Render the gallery screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title = Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG);
    let subtitle = Text::new(ctx.i18n.tr("gallery-subtitle")).size(typography::BODY);

    let mut buttons = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center);

    for variant in Variant::ALL {
        buttons = buttons.push(gallery_button(
            ctx.i18n.tr(show_label_key(variant)),
            Message::Show(variant),
        ));
    }

    buttons = buttons
        .push(gallery_button(
            ctx.i18n.tr("gallery-show-action"),
            Message::ShowWithAction,
        ))
        .push(gallery_button(
            ctx.i18n.tr("gallery-show-persistent"),
            Message::ShowPersistent,
        ))
        .push(gallery_button(
            ctx.i18n.tr("gallery-show-multiple"),
            Message::ShowMultiple,
        ));

    let mut examples = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("gallery-examples-title")).size(typography::BODY));

    for example in Example::ALL {
        examples = examples.push(gallery_button(
            ctx.i18n.tr(&format!("gallery-example-{}", example.as_str())),
            Message::ShowExample(example),
        ));
    }

    let count = ctx.active_count.to_string();
    let active = Text::new(
        ctx.i18n
            .tr_with_args("gallery-active-count", &[("count", count.as_str())]),
    )
    .size(typography::BODY_SM);

    let mut dismiss_all = button(
        Text::new(ctx.i18n.tr("gallery-dismiss-all"))
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::GALLERY_BUTTON_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(styles::button::ghost);
    if ctx.active_count > 0 {
        dismiss_all = dismiss_all.on_press(Message::DismissAll);
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(
            Row::new()
                .spacing(spacing::XL)
                .align_y(Vertical::Top)
                .push(buttons)
                .push(examples),
        )
        .push(active)
        .push(dismiss_all);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::XL)
        .into()
}

fn gallery_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(
        Text::new(label)
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::GALLERY_BUTTON_WIDTH))
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .on_press(message)
    .style(styles::button::primary)
    .into()
}
