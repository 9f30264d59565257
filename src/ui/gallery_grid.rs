// SPDX-License-Identifier: MPL-2.0
//! Wrapping grid of work thumbnails.
//!
//! Each tile shows the image, its title and a category tag, and emits the
//! tile's position in the filtered list when pressed. Tiles fade in
//! according to the running [`RevealState`].

use crate::catalog::WorkItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::RevealState;
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, container, text, Column, Container, Row, Scrollable, Text};
use iced::{alignment::Horizontal, Color, ContentFit, Element, Length, Theme};
use std::path::Path;
use std::time::Instant;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub items: &'a [WorkItem],
    pub assets_root: &'a Path,
    pub reveal: &'a RevealState,
    pub now: Instant,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, usize> {
    if ctx.items.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("gallery-empty")).size(typography::BODY))
            .width(Length::Fill)
            .padding(spacing::XL)
            .align_x(Horizontal::Center)
            .style(styles::container::empty_state)
            .into();
    }

    let tiles = ctx.items.iter().enumerate().map(|(index, item)| {
        let alpha = ctx.reveal.opacity(index, ctx.now);
        tile(ctx.i18n, ctx.assets_root, index, item, alpha)
    });

    let grid = Container::new(Row::with_children(tiles).wrap())
        .width(Length::Fill)
        .padding([spacing::XS, spacing::LG]);

    Scrollable::new(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn tile<'a>(
    i18n: &I18n,
    assets_root: &Path,
    index: usize,
    item: &'a WorkItem,
    alpha: f32,
) -> Element<'a, usize> {
    let picture = Image::new(Handle::from_path(assets_root.join(item.source())))
        .width(sizing::TILE)
        .height(sizing::TILE)
        .content_fit(ContentFit::Cover)
        .opacity(alpha);

    let title = Text::new(item.title())
        .size(typography::BODY)
        .style(move |theme: &Theme| text::Style {
            color: Some(Color {
                a: alpha,
                ..theme.palette().text
            }),
        });

    let tag = container(Text::new(i18n.tr(item.category().i18n_key())).size(typography::CAPTION))
        .padding([spacing::XXS / 2.0, spacing::XS])
        .style(styles::container::category_tag);

    let caption = Column::new()
        .spacing(spacing::XXS)
        .height(sizing::TILE_CAPTION)
        .push(title)
        .push(tag);

    let card = button(Column::new().spacing(spacing::XS).push(picture).push(caption))
        .padding(spacing::XS)
        .style(styles::button::tile)
        .on_press(index);

    Container::new(card).padding(spacing::XS).into()
}
