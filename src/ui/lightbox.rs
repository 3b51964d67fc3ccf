// SPDX-License-Identifier: MPL-2.0
//! Full-screen lightbox overlay.
//!
//! Layers, bottom to top:
//! 1. backdrop (a completed tap closes)
//! 2. image and caption (press does nothing, and does not reach the backdrop)
//! 3. previous/next/close controls and the position counter
//!
//! The overlay emits [`PointerTarget`]s; deciding what they mean is left to
//! the gallery core.

use crate::gallery::{LightboxContent, PointerTarget};
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, image, mouse_area, tooltip, Column, Container, Space, Stack, Text,
};
use iced::{mouse, ContentFit, Element, Length};

/// Contextual data needed to render the lightbox.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub content: &'a LightboxContent,
}

/// Renders the lightbox for the current entry.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, PointerTarget> {
    let ViewContext { i18n, content } = ctx;

    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(PointerTarget::BackdropPressed)
    .on_release(PointerTarget::BackdropReleased);

    // Claiming an interaction keeps presses on the picture from falling
    // through to the backdrop.
    let picture = mouse_area(content_column(i18n, content))
        .interaction(mouse::Interaction::Idle)
        .on_press(PointerTarget::Content);

    let picture_layer = Container::new(picture)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::XXL, sizing::LIGHTBOX_CONTROL + spacing::LG])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Stack::new()
        .push(backdrop)
        .push(picture_layer)
        .push(control_zone(
            control_button("‹", i18n.tr("lightbox-previous"), PointerTarget::PreviousControl),
            Horizontal::Left,
            Vertical::Center,
        ))
        .push(control_zone(
            control_button("›", i18n.tr("lightbox-next"), PointerTarget::NextControl),
            Horizontal::Right,
            Vertical::Center,
        ))
        .push(control_zone(
            control_button("×", i18n.tr("lightbox-close"), PointerTarget::CloseControl),
            Horizontal::Right,
            Vertical::Top,
        ))
        .push(control_zone(
            counter(i18n, content),
            Horizontal::Center,
            Vertical::Bottom,
        ))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn content_column<'a>(i18n: &'a I18n, content: &'a LightboxContent) -> Element<'a, PointerTarget> {
    let picture: Element<'a, PointerTarget> = match media::local_handle(&content.image_ref) {
        Some(handle) => image(handle)
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(
            Text::new(i18n.tr("gallery-thumbnail-unavailable"))
                .size(typography::BODY)
                .color(palette::GRAY_200),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    };

    let caption = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(content.title.as_str()).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.category_label(&content.category))
                .size(typography::CAPTION)
                .color(palette::GRAY_200),
        );

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(picture)
        .push(
            Container::new(caption)
                .padding([spacing::XS, spacing::MD])
                .style(styles::overlay::indicator(radius::MD)),
        )
        .into()
}

/// Round overlay control with a hover tooltip naming its action.
fn control_button<'a>(
    glyph: &'a str,
    label: String,
    target: PointerTarget,
) -> Element<'a, PointerTarget> {
    let control = button(
        Container::new(Text::new(glyph).size(typography::CONTROL_GLYPH))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(sizing::LIGHTBOX_CONTROL)
    .height(sizing::LIGHTBOX_CONTROL)
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_HOVER,
    ))
    .on_press(target);

    tooltip(
        control,
        Container::new(Text::new(label).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::indicator(radius::SM)),
        tooltip::Position::Bottom,
    )
    .into()
}

fn counter<'a>(i18n: &I18n, content: &LightboxContent) -> Element<'a, PointerTarget> {
    let position = content.position.to_string();
    let total = content.total.to_string();
    Container::new(
        Text::new(i18n.tr_with_args(
            "lightbox-counter",
            &[("position", position.as_str()), ("total", total.as_str())],
        ))
        .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::indicator(radius::FULL))
    .into()
}

/// Positions one control inside a full-size, non-interactive layer.
fn control_zone<'a>(
    control: Element<'a, PointerTarget>,
    align_x: Horizontal,
    align_y: Vertical,
) -> Element<'a, PointerTarget> {
    Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(align_x)
        .align_y(align_y)
        .into()
}
