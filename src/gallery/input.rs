// SPDX-License-Identifier: MPL-2.0
//! Pointer, keyboard and touch input for the lightbox.
//!
//! Raw input is reduced to a [`Command`] here; the shell never decides what a
//! click or key means on its own.

use crate::config::{DEFAULT_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX, MIN_SWIPE_THRESHOLD_PX};
use crate::domain::gallery::ItemId;

/// A navigator transition requested by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Open(ItemId),
    Close,
    Next,
    Previous,
}

/// Where a pointer press (or, for the backdrop, a release) landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// A grid thumbnail.
    Item(ItemId),
    CloseControl,
    PreviousControl,
    NextControl,
    /// Press went down on the dimmed area around the image.
    BackdropPressed,
    /// Press was released over the dimmed area around the image.
    BackdropReleased,
    /// The image and caption themselves.
    Content,
}

impl PointerTarget {
    /// Command for a press on this target.
    ///
    /// Presses on the previous/next controls are contained: they navigate
    /// and never fall through to the backdrop. Presses on the content do
    /// nothing. The backdrop closes only on release, and only as the end of
    /// a tap; see [`BackdropTap`].
    #[must_use]
    pub fn command(self) -> Option<Command> {
        match self {
            Self::Item(id) => Some(Command::Open(id)),
            Self::CloseControl | Self::BackdropReleased => Some(Command::Close),
            Self::PreviousControl => Some(Command::Previous),
            Self::NextControl => Some(Command::Next),
            Self::BackdropPressed | Self::Content => None,
        }
    }
}

/// Progress of a tap on the backdrop.
///
/// A backdrop press closes the lightbox only once it is released over the
/// backdrop without turning into a swipe. With a mouse the release decides.
/// With a finger the release is seen before the touch end, so the touch end
/// decides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackdropTap {
    #[default]
    Idle,
    Pressed,
    /// Released over the backdrop while a touch was still being tracked.
    Released,
}

/// Keys the lightbox reacts to while its keyboard listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    #[must_use]
    pub fn command(self) -> Command {
        match self {
            Self::Escape => Command::Close,
            Self::ArrowLeft => Command::Previous,
            Self::ArrowRight => Command::Next,
        }
    }
}

/// Minimum horizontal travel for a touch to count as a swipe (logical px).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a threshold, clamped to the supported range. Non-finite
    /// values fall back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

/// Classifies a horizontal touch movement.
///
/// Travel strictly greater than the threshold counts: right-to-left is
/// `Next`, left-to-right is `Previous`.
#[must_use]
pub fn classify_swipe(start_x: f32, end_x: f32, threshold: SwipeThreshold) -> Option<Command> {
    let diff = start_x - end_x;
    if diff.abs() > threshold.value() {
        Some(if diff > 0.0 {
            Command::Next
        } else {
            Command::Previous
        })
    } else {
        None
    }
}

/// Pairs touch-start and touch-end positions into swipes.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    threshold: SwipeThreshold,
    start_x: Option<f32>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new(threshold: SwipeThreshold) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the current touch. A touch-end without a matching start yields
    /// nothing.
    pub fn touch_end(&mut self, x: f32) -> Option<Command> {
        let start_x = self.start_x.take()?;
        classify_swipe(start_x, x, self.threshold)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}
