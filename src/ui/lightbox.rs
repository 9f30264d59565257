// SPDX-License-Identifier: MPL-2.0
//! Modal viewer stacked above the grid while an item is open.
//!
//! The view emits [`Message`]s; keyboard and touch input is mapped to
//! [`ViewerCommand`]s by [`command_for_event`].

use crate::gallery::swipe::{SwipeThreshold, SwipeTracker};
use crate::gallery::{ViewerCommand, ViewerSnapshot};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, spacing, typography};
use crate::ui::styles;
use iced::keyboard::{self, key::Named, Key};
use iced::widget::image::{Handle, Image};
use iced::widget::{button, mouse_area, opaque, Column, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    touch, ContentFit, Element, Event, Length,
};
use std::path::Path;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub assets_root: &'a Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Command(ViewerCommand),
    BackdropPressed,
    /// A click or touch ended on the backdrop, outside the content.
    BackdropReleased,
}

pub fn view<'a>(ctx: ViewContext<'a>, snapshot: ViewerSnapshot<'a>) -> Element<'a, Message> {
    // Reported on release so a swipe that starts on the backdrop can be told apart.
    let backdrop = mouse_area(
        Container::new("")
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed)
    .on_release(Message::BackdropReleased);

    let picture = Image::new(Handle::from_path(ctx.assets_root.join(snapshot.item.source())))
        .content_fit(ContentFit::Contain);

    let caption = Container::new(Text::new(snapshot.item.title()).size(typography::TITLE_SM))
        .padding([spacing::XS, spacing::MD])
        .style(styles::overlay::indicator(radius::MD));

    let content = opaque(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(picture)
            .push(caption),
    );

    let centered = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::XL * 2.0, spacing::XL * 3.0])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    let arrow_style =
        || styles::button::overlay(WHITE, opacity::OVERLAY_MEDIUM, opacity::OVERLAY_HOVER);

    let previous = button(Text::new("◀").size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(arrow_style())
        .on_press(Message::Command(ViewerCommand::Previous));
    let next = button(Text::new("▶").size(typography::TITLE_MD))
        .padding(spacing::SM)
        .style(arrow_style())
        .on_press(Message::Command(ViewerCommand::Next));
    let close_label = format!("✕  {}", ctx.i18n.tr("lightbox-close"));
    let close = button(Text::new(close_label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(arrow_style())
        .on_press(Message::Command(ViewerCommand::Close));

    let counter = Container::new(Text::new(snapshot.counter()).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay::indicator(radius::FULL));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(centered)
        .push(edge(previous, Horizontal::Left, Vertical::Center))
        .push(edge(next, Horizontal::Right, Vertical::Center))
        .push(edge(close, Horizontal::Right, Vertical::Top))
        .push(edge(counter, Horizontal::Center, Vertical::Bottom))
        .into()
}

/// Pins `content` to one edge of the window without covering the rest.
fn edge<'a>(
    content: impl Into<Element<'a, Message>>,
    x: Horizontal,
    y: Vertical,
) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(x)
        .align_y(y)
        .into()
}

/// Viewer command bound to a key, if any.
#[must_use]
pub fn command_for_key(key: &Key) -> Option<ViewerCommand> {
    match key {
        Key::Named(Named::Escape) => Some(ViewerCommand::Close),
        Key::Named(Named::ArrowLeft) => Some(ViewerCommand::Previous),
        Key::Named(Named::ArrowRight) => Some(ViewerCommand::Next),
        _ => None,
    }
}

/// Maps a raw window event to a viewer command while the viewer is open.
///
/// Touch presses start a swipe, moves follow it and lifts finish it; a lost
/// finger cancels it.
pub fn command_for_event(
    event: &Event,
    swipe: &mut SwipeTracker,
    threshold: SwipeThreshold,
) -> Option<ViewerCommand> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => command_for_key(key),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            swipe.begin(position.x);
            None
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) => {
            swipe.track(position.x);
            None
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            swipe.finish(position.x, threshold)
        }
        Event::Touch(touch::Event::FingerLost { .. }) => {
            swipe.cancel();
            None
        }
        _ => None,
    }
}
