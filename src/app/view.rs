// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery is a single screen: navbar, optional warning banner, filter
//! bar and grid, with the lightbox stacked on top while it is open.

use super::Message;
use crate::gallery::GalleryController;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::state::RevealState;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::{filter_bar, gallery_grid, lightbox, navbar};
use iced::{
    widget::{mouse_area, Column, Container, Stack, Text},
    Element, Length,
};
use std::path::Path;
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a GalleryController,
    pub reveal: &'a RevealState,
    pub theme_mode: ThemeMode,
    pub assets_root: &'a Path,
    pub config_warning: Option<&'a str>,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        i18n: ctx.i18n,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let filters = filter_bar::view(filter_bar::ViewContext {
        i18n: ctx.i18n,
        active: ctx.controller.active_filter(),
    })
    .map(Message::FilterSelected);

    let grid = gallery_grid::view(gallery_grid::ViewContext {
        i18n: ctx.i18n,
        items: ctx.controller.filtered_items(),
        assets_root: ctx.assets_root,
        reveal: ctx.reveal,
        now: ctx.now,
    })
    .map(Message::OpenItem);

    let mut page = Column::new().width(Length::Fill).height(Length::Fill).push(navbar);
    if let Some(key) = ctx.config_warning {
        page = page.push(warning_banner(ctx.i18n, key));
    }
    page = page.push(filters).push(grid);

    match ctx.controller.snapshot() {
        Some(snapshot) => {
            let lightbox = lightbox::view(
                lightbox::ViewContext {
                    i18n: ctx.i18n,
                    assets_root: ctx.assets_root,
                },
                snapshot,
            )
            .map(Message::Lightbox);

            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(page)
                .push(lightbox)
                .into()
        }
        None => page.into(),
    }
}

/// Click-to-dismiss banner for a config load warning.
fn warning_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let banner = Container::new(Text::new(i18n.tr(key)).size(typography::CAPTION))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::overlay::indicator(radius::SM));

    mouse_area(Container::new(banner).padding([spacing::XS, spacing::LG]))
        .on_press(Message::DismissWarning)
        .into()
}
