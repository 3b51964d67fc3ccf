// SPDX-License-Identifier: MPL-2.0
//! Filter bar and thumbnail grid.
//!
//! The grid lays out the visible items in catalog order, as many per row as
//! fit the window width at the configured cell width.

use crate::config::THUMBNAIL_ASPECT;
use crate::domain::gallery::{FilterValue, ItemId};
use crate::gallery::{FilterController, Gallery, GridCell};
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, image, responsive, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length, Padding, Size};

/// Contextual data needed to render the grid screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    /// Target cell width in logical pixels.
    pub thumbnail_width: f32,
}

/// Messages emitted by the filter bar and the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    FilterSelected(FilterValue),
    ItemPressed(ItemId),
}

/// Number of cells per row for a given available width.
///
/// Always at least one, even when the window is narrower than a cell.
#[must_use]
pub fn columns_for_width(available: f32, cell_width: f32, gap: f32) -> usize {
    if !available.is_finite() || cell_width <= 0.0 {
        return 1;
    }
    let columns = ((available + gap) / (cell_width + gap)).floor();
    if columns < 1.0 {
        1
    } else {
        columns as usize
    }
}

/// Renders the filter bar above the grid.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let ViewContext {
        i18n,
        gallery,
        thumbnail_width,
    } = ctx;

    let body: Element<'a, Message> = if gallery.items().is_empty() {
        empty_message(i18n.tr("gallery-empty"))
    } else if gallery.filter().visible_count() == 0 {
        empty_message(i18n.tr("gallery-filter-empty"))
    } else {
        responsive(move |size: Size| grid(gallery, i18n, thumbnail_width, size.width)).into()
    };

    Column::new()
        .spacing(spacing::MD)
        .padding(spacing::MD)
        .push(filter_bar(gallery.filter()))
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn filter_bar(filter: &FilterController) -> Element<'_, Message> {
    let buttons = filter.buttons().iter().map(|filter_button| {
        let style = if filter.is_active(&filter_button.value) {
            styles::button::filter_active
        } else {
            styles::button::filter_inactive
        };
        button(Text::new(filter_button.label.as_str()).size(typography::BODY))
            .padding([spacing::XS, spacing::MD])
            .height(sizing::BUTTON_HEIGHT)
            .style(style)
            .on_press(Message::FilterSelected(filter_button.value.clone()))
            .into()
    });

    Container::new(Row::with_children(buttons).spacing(spacing::XS))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn grid<'a>(
    gallery: &'a Gallery,
    i18n: &'a I18n,
    thumbnail_width: f32,
    available_width: f32,
) -> Element<'a, Message> {
    let columns = columns_for_width(available_width, thumbnail_width, spacing::MD);
    let cells: Vec<GridCell<'a>> = gallery.grid_cells().collect();

    let rows = cells.chunks(columns).map(|chunk| {
        let mut row = Row::new().spacing(spacing::MD);
        for cell in chunk {
            row = row.push(thumbnail(*cell, i18n, thumbnail_width));
        }
        row.into()
    });

    scrollable(
        Container::new(Column::with_children(rows).spacing(spacing::MD))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

fn thumbnail<'a>(cell: GridCell<'a>, i18n: &'a I18n, width: f32) -> Element<'a, Message> {
    let image_height = width * THUMBNAIL_ASPECT;
    let picture: Element<'a, Message> = match media::local_handle(&cell.item.image_ref) {
        Some(handle) => image(handle)
            .content_fit(ContentFit::Cover)
            .width(width)
            .height(image_height)
            .into(),
        None => Container::new(
            Text::new(i18n.tr("gallery-thumbnail-unavailable"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .width(width)
        .height(image_height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into(),
    };

    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(cell.item.title.as_str()).size(typography::BODY))
        .push(
            Text::new(i18n.category_label(&cell.item.category))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    let card = Column::new()
        .push(picture)
        .push(
            Container::new(caption)
                .padding([spacing::XXS, spacing::XS])
                .height(sizing::CAPTION_HEIGHT),
        )
        .width(width);

    button(Container::new(card).style(styles::container::card))
        .padding(Padding::ZERO)
        .style(styles::button::thumbnail)
        .on_press(Message::ItemPressed(cell.id))
        .into()
}

fn empty_message<'a>(message: String) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .push(Space::new().height(spacing::XXL))
            .push(
                Text::new(message)
                    .size(typography::BODY)
                    .color(palette::GRAY_400),
            )
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fill_available_width() {
        // 3 cells of 280 plus 2 gaps of 16 = 872
        assert_eq!(columns_for_width(872.0, 280.0, 16.0), 3);
        assert_eq!(columns_for_width(871.0, 280.0, 16.0), 2);
    }

    #[test]
    fn at_least_one_column() {
        assert_eq!(columns_for_width(100.0, 280.0, 16.0), 1);
        assert_eq!(columns_for_width(0.0, 280.0, 16.0), 1);
        assert_eq!(columns_for_width(f32::INFINITY, 280.0, 16.0), 1);
        assert_eq!(columns_for_width(800.0, 0.0, 16.0), 1);
    }
}
