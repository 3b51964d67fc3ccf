// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and touch events only matter while the lightbox is open, so the
//! subscription exists only while the navigator's keyboard listener is
//! attached.

use super::Message;
use crate::gallery::LightboxKey;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, touch, Subscription};

/// Creates the lightbox input subscription.
///
/// Returns `Subscription::none()` while the lightbox is closed, which drops
/// the underlying listener.
pub fn create_lightbox_subscription(listening: bool) -> Subscription<Message> {
    if !listening {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        }) => match status {
            event::Status::Ignored => lightbox_key(named).map(Message::Key),
            event::Status::Captured => None,
        },
        // Touches are routed even when a widget captured them: a swipe
        // usually starts on the picture, which claims presses.
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::TouchStarted(position.x))
        }
        event::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::TouchEnded(position.x))
        }
        event::Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::TouchCancelled),
        _ => None,
    })
}

/// Maps a named key to the lightbox key it stands for.
#[must_use]
pub fn lightbox_key(named: Named) -> Option<LightboxKey> {
    match named {
        Named::Escape => Some(LightboxKey::Escape),
        Named::ArrowLeft => Some(LightboxKey::ArrowLeft),
        Named::ArrowRight => Some(LightboxKey::ArrowRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_navigation_keys_are_mapped() {
        assert_eq!(lightbox_key(Named::Escape), Some(LightboxKey::Escape));
        assert_eq!(lightbox_key(Named::ArrowLeft), Some(LightboxKey::ArrowLeft));
        assert_eq!(lightbox_key(Named::ArrowRight), Some(LightboxKey::ArrowRight));
        assert_eq!(lightbox_key(Named::ArrowUp), None);
        assert_eq!(lightbox_key(Named::Enter), None);
    }
}
