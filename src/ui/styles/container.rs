// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Grid card surface behind a thumbnail and its caption.
///
/// Derived from the active theme background so cards stay readable in both
/// light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        text_color: Some(palette.background.weak.text),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder fill shown where a thumbnail cannot be drawn.
pub fn placeholder(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.strong.color;
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Banner carrying a startup warning above the grid.
pub fn notice(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::PRIMARY_500
        })),
        border: Border {
            color: palette::PRIMARY_600,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}
