// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The grid is always rendered; the lightbox is stacked on top of it while
//! open so the grid keeps its scroll position.

use super::Message;
use crate::gallery::Gallery;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::grid::{self, ViewContext as GridViewContext};
use crate::ui::lightbox::{self, ViewContext as LightboxViewContext};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub thumbnail_width: f32,
    /// Oldest pending startup warning (i18n key).
    pub notice: Option<&'a str>,
}

/// Renders the grid, plus the lightbox when it is open.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let grid_view = grid::view(GridViewContext {
        i18n: ctx.i18n,
        gallery: ctx.gallery,
        thumbnail_width: ctx.thumbnail_width,
    })
    .map(Message::Grid);

    let mut column = Column::new().width(Length::Fill).height(Length::Fill);
    if let Some(key) = ctx.notice {
        column = column.push(notice_banner(ctx.i18n, key));
    }
    let base = column.push(grid_view);

    match ctx.gallery.navigator().content() {
        Some(content) => Stack::new()
            .push(base)
            .push(lightbox::view(LightboxViewContext {
                i18n: ctx.i18n,
                content,
            })
            .map(Message::Lightbox))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => base.into(),
    }
}

fn notice_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let dismiss = button(Text::new(i18n.tr("notification-dismiss")).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::filter_inactive)
        .on_press(Message::DismissNotice);

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr(key)).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(dismiss);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::notice)
        .into()
}
