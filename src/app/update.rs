// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every message maps to one gallery operation; the gallery decides whether
//! it applies (closed lightbox, stale click, empty subset).

use super::Message;
use crate::gallery::Gallery;
use crate::ui::grid;

/// Mutable state touched by `App::update`.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut Gallery,
    pub notices: &'a mut Vec<String>,
}

/// Applies one message. Returns `true` if visible state changed.
pub fn handle_message(ctx: UpdateContext<'_>, message: Message) -> bool {
    let UpdateContext { gallery, notices } = ctx;
    match message {
        Message::Grid(grid::Message::FilterSelected(value)) => gallery.select_filter(&value),
        Message::Grid(grid::Message::ItemPressed(id)) => {
            gallery.handle_pointer(crate::gallery::PointerTarget::Item(id))
        }
        Message::Lightbox(target) => gallery.handle_pointer(target),
        Message::Key(key) => gallery.handle_key(key),
        Message::TouchStarted(x) => {
            gallery.touch_start(x);
            false
        }
        Message::TouchEnded(x) => gallery.touch_end(x),
        Message::TouchCancelled => {
            gallery.touch_cancel();
            false
        }
        Message::DismissNotice => {
            if notices.is_empty() {
                false
            } else {
                notices.remove(0);
                true
            }
        }
    }
}
