// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox backdrop, caption and position counter.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn container_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

fn container_border() -> Color {
    Color {
        a: opacity::OVERLAY_SUBTLE,
        ..WHITE
    }
}

/// Generic style for overlay indicators like the caption and position counter.
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        border: Border {
            color: container_border(),
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Dimmed full-window layer behind the open image.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_uses_requested_radius() {
        let style = indicator(6.0)(&Theme::Light);
        assert_eq!(style.border.radius, 6.0.into());
        assert_eq!(style.text_color, Some(WHITE));
    }

    #[test]
    fn backdrop_is_mostly_opaque_black() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => {
                assert_eq!(color.a, opacity::BACKDROP);
                assert_eq!((color.r, color.g, color.b), (0.0, 0.0, 0.0));
            }
            other => panic!("unexpected backdrop background: {other:?}"),
        }
    }
}
