// SPDX-License-Identifier: MPL-2.0
//! Shared styles for the playlist and player panes.

use crate::ui::design_tokens::{opacity, palette};
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// The black surface the (future) video frames render onto.
pub fn playback_surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Semi-transparent dark bar holding the transport controls.
pub fn control_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::GRAY_900
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Header strip above the playlist rows.
pub fn playlist_header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_800)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// One playlist row.
///
/// The current entry is tinted with the brand color; a pending drop target
/// gets a highlighted border; the row being dragged is dimmed.
pub fn playlist_row(
    selected: bool,
    drop_target: bool,
    dragging: bool,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let background = if selected {
            palette::PRIMARY_600
        } else if dragging {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_700
            }
        } else {
            palette::GRAY_800
        };

        let border = if drop_target {
            Border {
                color: palette::PRIMARY_400,
                width: 2.0,
                radius: 2.0.into(),
            }
        } else {
            Border {
                color: palette::GRAY_700,
                width: 1.0,
                radius: 2.0.into(),
            }
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(palette::WHITE),
            border,
            ..Default::default()
        }
    }
}

/// Transparent icon button for the control bar, with a hover overlay.
pub fn control_button() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_SUBTLE,
            button::Status::Pressed => opacity::OVERLAY_MEDIUM,
            _ => 0.0,
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::WHITE
            })),
            text_color: palette::WHITE,
            border: Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
