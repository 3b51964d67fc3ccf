// SPDX-License-Identifier: MPL-2.0
//! Photo catalog loading.
//!
//! The catalog is a TOML file listing the photographs shown by the gallery,
//! in display order:
//!
//! ```toml
//! [[photo]]
//! src = "photos/nature/alpine-sunset.jpg"
//! title = "Alpine Sunset"
//! category = "nature"
//! ```
//!
//! Relative `src` paths resolve against the directory holding the catalog
//! file; URLs are kept as-is.

use crate::domain::gallery::{Category, GalleryItem};
use crate::error::{Error, Result};
use crate::media;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One `[[photo]]` entry as written in the catalog file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub src: String,
    #[serde(default)]
    pub title: String,
    pub category: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "photo")]
    photos: Vec<PhotoRecord>,
}

/// Ordered list of gallery items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<GalleryItem>,
}

impl Catalog {
    #[must_use]
    pub fn new(items: Vec<GalleryItem>) -> Self {
        Self { items }
    }

    /// Builds a catalog from raw records.
    ///
    /// Records without a source or a category are skipped with a warning.
    /// Relative local sources are joined to `base_dir` when one is given.
    #[must_use]
    pub fn from_records(records: Vec<PhotoRecord>, base_dir: Option<&Path>) -> Self {
        let mut items = Vec::with_capacity(records.len());
        for (position, record) in records.into_iter().enumerate() {
            let src = record.src.trim();
            if src.is_empty() {
                tracing::warn!(position, title = %record.title, "skipping catalog entry without src");
                continue;
            }
            let category = Category::new(record.category);
            if category.as_str().is_empty() {
                tracing::warn!(position, src, "skipping catalog entry without category");
                continue;
            }
            let image_ref = resolve_src(src, base_dir);
            items.push(GalleryItem {
                image_ref,
                title: record.title.trim().to_string(),
                category,
            });
        }
        Self { items }
    }

    /// Parses catalog TOML text.
    pub fn parse(content: &str, base_dir: Option<&Path>) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))?;
        Ok(Self::from_records(file.photos, base_dir))
    }

    /// Reads and parses a catalog file; relative sources resolve against its
    /// parent directory.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path.parent())
    }

    /// Loads the catalog at `path`.
    ///
    /// Never fails: a missing or unreadable catalog yields an empty gallery
    /// plus the i18n key of a warning to show.
    pub fn load(path: Option<&Path>) -> (Self, Option<String>) {
        let Some(path) = path else {
            tracing::warn!("no catalog location could be determined");
            return (
                Self::default(),
                Some("notification-catalog-missing".to_string()),
            );
        };
        if !path.exists() {
            tracing::warn!(path = %path.display(), "catalog file not found");
            return (
                Self::default(),
                Some("notification-catalog-missing".to_string()),
            );
        }
        match Self::load_from_path(path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), photos = catalog.len(), "catalog loaded");
                (catalog, None)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable catalog");
                (
                    Self::default(),
                    Some("notification-catalog-load-error".to_string()),
                )
            }
        }
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<GalleryItem> {
        self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<Category> = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }
}

fn resolve_src(src: &str, base_dir: Option<&Path>) -> String {
    match base_dir {
        Some(dir) if !media::is_remote(src) && Path::new(src).is_relative() => {
            dir.join(src).to_string_lossy().into_owned()
        }
        _ => src.to_string(),
    }
}
