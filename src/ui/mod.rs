// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each takes a
//! `ViewContext` borrowing gallery state and returns an element emitting its
//! own message type.
//!
//! - [`grid`] - Filter bar and thumbnail grid
//! - [`lightbox`] - Full-screen overlay with previous/next/close controls
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod grid;
pub mod lightbox;
pub mod styles;
pub mod theming;
