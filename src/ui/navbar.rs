// SPDX-License-Identifier: MPL-2.0
//! Top bar with the gallery title and the theme toggle.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ThemeChanged(ThemeMode),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, theme_mode: ThemeMode) -> Event {
    match message {
        Message::ToggleTheme => Event::ThemeChanged(theme_mode.toggled()),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("navbar-title")).size(typography::TITLE_MD);

    // The button names the mode it switches to.
    let toggle_key = if ctx.theme_mode.is_dark() {
        "theme-toggle-light"
    } else {
        "theme-toggle-dark"
    };
    let toggle = button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::unselected)
        .on_press(Message::ToggleTheme);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Container::new(title).width(Length::Fill))
        .push(Container::new(toggle).align_x(Horizontal::Right));

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::navbar)
        .into()
}
