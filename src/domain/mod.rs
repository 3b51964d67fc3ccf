// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core gallery types with ZERO external dependencies.
//!
//! This module contains pure value types shared by the gallery state machine
//! and the presentation layer. It depends on nothing but `std` so the rules
//! it encodes can be tested without a window or a catalog file.
//!
//! # Modules
//!
//! - [`gallery`]: Catalog and filter types ([`GalleryItem`](gallery::GalleryItem),
//!   [`Category`](gallery::Category), [`FilterValue`](gallery::FilterValue))

pub mod gallery;
