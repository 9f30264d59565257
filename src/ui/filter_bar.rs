// SPDX-License-Identifier: MPL-2.0
//! Row of filter buttons above the grid.
//!
//! One button per [`Filter::choices`] entry. The active filter is drawn with
//! the selected style and every other button with the unselected one.

use crate::gallery::Filter;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{alignment::Vertical, Element};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: &'a Filter,
}

/// Renders the filter buttons. Pressing one emits its [`Filter`].
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Filter> {
    let buttons = Filter::choices().map(|filter| -> Element<'a, Filter> {
        let label = Text::new(ctx.i18n.tr(filter.i18n_key())).size(typography::BODY);
        let style = if &filter == ctx.active {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        button(label)
            .padding([spacing::XS, spacing::MD])
            .style(style)
            .on_press(filter)
            .into()
    });

    Row::with_children(buttons)
        .spacing(spacing::XS)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .wrap()
        .into()
}
