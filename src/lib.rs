// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a filterable photo gallery with a full-screen lightbox,
//! built with the Iced GUI framework.
//!
//! The gallery core in [`gallery`] is plain state with no Iced dependency in
//! its logic: a filter controller decides which catalog items are visible and
//! a lightbox navigator pages through them with wrap-around. The [`app`] and
//! [`ui`] modules wire that core to keyboard, pointer and touch input.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod media;
pub mod ui;
