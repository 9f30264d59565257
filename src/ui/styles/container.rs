// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Navbar strip at the top of the window.
///
/// Derived from the active theme background so it works in both modes.
pub fn navbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Small pill naming a work's category under its thumbnail.
pub fn category_tag(theme: &Theme) -> container::Style {
    let text = theme.extended_palette().background.base.text;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::ACCENT_500
        })),
        text_color: Some(Color {
            a: opacity::OVERLAY_HOVER,
            ..text
        }),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder shown when the active filter matches nothing.
pub fn empty_state(theme: &Theme) -> container::Style {
    let text = theme.extended_palette().background.base.text;

    container::Style {
        text_color: Some(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..text
        }),
        ..Default::default()
    }
}
