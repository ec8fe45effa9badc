// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (gallery triggers).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::PRIMARY_500
        },
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::PRIMARY_500
        },
        button::Status::Active | button::Status::Pressed => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless button that only highlights on hover (toast dismiss).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };
    let text_color = match status {
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base.text
        },
        _ => base.text,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Outlined button in `accent` (toast actions).
pub fn outlined(theme: &Theme, status: button::Status, accent: Color) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..accent
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: theme.palette().text,
        border: Border {
            color: accent,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_is_transparent_until_hovered() {
        let theme = Theme::Dark;
        assert!(ghost(&theme, button::Status::Active).background.is_none());
        assert!(ghost(&theme, button::Status::Hovered).background.is_some());
    }

    #[test]
    fn outlined_uses_accent_border() {
        let style = outlined(&Theme::Light, button::Status::Active, palette::ERROR_500);
        assert_eq!(style.border.color, palette::ERROR_500);
        assert_eq!(style.border.width, border::WIDTH_SM);
    }

    #[test]
    fn primary_keeps_white_text() {
        for status in [
            button::Status::Active,
            button::Status::Hovered,
            button::Status::Pressed,
        ] {
            assert_eq!(primary(&Theme::Dark, status).text_color, WHITE);
        }
    }
}
