// SPDX-License-Identifier: MPL-2.0
//! Catalog item types.

use std::fmt;

// =============================================================================
// ItemId
// =============================================================================

/// Position of an item in the catalog.
///
/// Catalog order is the display order of the grid, so the id doubles as the
/// stable key used to match grid clicks against the visible subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    /// Creates an id for the item at the given catalog position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the catalog position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

// =============================================================================
// Category
// =============================================================================

/// Photo category (e.g. `nature`, `urban`).
///
/// Categories are open-ended: a catalog may introduce new ones without any
/// code change, so this is a string newtype rather than an enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Category(String);

impl Category {
    /// Creates a category, trimming surrounding whitespace.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.len() == name.len() {
            Self(name)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Returns the raw category name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name with its first character upper-cased
    /// (`nature` → `Nature`).
    #[must_use]
    pub fn display_label(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

// =============================================================================
// GalleryItem
// =============================================================================

/// A photograph from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Path or URL of the image. Opaque to the gallery core.
    pub image_ref: String,
    /// Display title.
    pub title: String,
    /// Category used by the filter bar.
    pub category: Category,
}

impl GalleryItem {
    #[must_use]
    pub fn new(
        image_ref: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<Category>,
    ) -> Self {
        Self {
            image_ref: image_ref.into(),
            title: title.into(),
            category: category.into(),
        }
    }
}
