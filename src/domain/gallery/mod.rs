// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! - [`GalleryItem`]: one photograph from the catalog
//! - [`Category`]: open-ended category name
//! - [`ItemId`]: catalog position of an item
//! - [`FilterValue`]: value of a filter button (`All` or one category)

pub mod filter;
pub mod item;

pub use filter::{FilterValue, ALL_FILTER};
pub use item::{Category, GalleryItem, ItemId};
