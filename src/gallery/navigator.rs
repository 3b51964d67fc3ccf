// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation state machine.
//!
//! The navigator is either `Closed` or `Open` on one entry of the visible
//! subset. The subset is snapshotted from the filter controller each time the
//! lightbox opens; `next`/`previous` wrap around within that snapshot, so a
//! filter change only takes effect on the next `open`.

use super::filter_controller::FilterController;
use crate::domain::gallery::{Category, GalleryItem, ItemId};
use crate::media::Resolution;

/// Open/closed state of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open {
        /// Index into the visible subset.
        current_index: usize,
    },
}

/// Keyboard routing handle owned by the navigator.
///
/// Attached while the lightbox is open, detached otherwise. The shell only
/// subscribes to keyboard events while attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardListener {
    #[default]
    Detached,
    Attached,
}

/// One visible item, with its catalog position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleEntry {
    pub id: ItemId,
    pub item: GalleryItem,
}

/// Ordered snapshot of the items visible under the active filter.
///
/// Always a sub-sequence of catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet {
    entries: Vec<VisibleEntry>,
}

impl VisibleSet {
    /// Collects the visible items in catalog order.
    #[must_use]
    pub fn collect(items: &[GalleryItem], filter: &FilterController) -> Self {
        let entries = filter
            .visible_ids()
            .filter_map(|id| {
                items.get(id.index()).map(|item| VisibleEntry {
                    id,
                    item: item.clone(),
                })
            })
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&VisibleEntry> {
        self.entries.get(index)
    }

    /// Position of a catalog item within the subset.
    #[must_use]
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }
}

/// What the lightbox shows for the current entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxContent {
    pub item: ItemId,
    /// High-resolution variant of the item's image reference.
    pub image_ref: String,
    pub title: String,
    pub category: Category,
    /// 1-based position in the visible subset.
    pub position: usize,
    pub total: usize,
}

/// Full-screen viewer over the visible subset.
#[derive(Debug, Clone)]
pub struct LightboxNavigator {
    state: LightboxState,
    visible: VisibleSet,
    content: Option<LightboxContent>,
    keyboard: KeyboardListener,
    resolution: Resolution,
    enabled: bool,
}

impl LightboxNavigator {
    /// Creates a closed navigator requesting `resolution` for full-screen images.
    #[must_use]
    pub fn new(resolution: Resolution) -> Self {
        Self {
            state: LightboxState::Closed,
            visible: VisibleSet::default(),
            content: None,
            keyboard: KeyboardListener::Detached,
            resolution,
            enabled: true,
        }
    }

    /// Creates a navigator on which every transition is a no-op.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(Resolution::default())
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn state(&self) -> LightboxState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open { current_index } => Some(current_index),
            LightboxState::Closed => None,
        }
    }

    #[must_use]
    pub fn content(&self) -> Option<&LightboxContent> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn visible(&self) -> &VisibleSet {
        &self.visible
    }

    #[must_use]
    pub fn keyboard(&self) -> KeyboardListener {
        self.keyboard
    }

    /// Returns `true` while keyboard events should be routed here.
    #[must_use]
    pub fn listens_for_keys(&self) -> bool {
        self.keyboard == KeyboardListener::Attached
    }

    /// Opens the lightbox on a catalog item.
    ///
    /// Re-snapshots the visible subset. If the item is not in it (a click
    /// on a hidden or unknown item), nothing changes and `false` is returned.
    pub fn open(&mut self, id: ItemId, items: &[GalleryItem], filter: &FilterController) -> bool {
        if !self.enabled {
            return false;
        }
        let visible = VisibleSet::collect(items, filter);
        let Some(index) = visible.position_of(id) else {
            tracing::debug!(item = id.index(), "ignoring click on item outside the visible set");
            return false;
        };
        self.visible = visible;
        self.state = LightboxState::Open {
            current_index: index,
        };
        self.keyboard = KeyboardListener::Attached;
        self.display(index);
        tracing::debug!(
            item = id.index(),
            index,
            total = self.visible.len(),
            "lightbox opened"
        );
        true
    }

    /// Closes the lightbox and detaches the keyboard listener.
    pub fn close(&mut self) -> bool {
        if !self.enabled || !self.is_open() {
            return false;
        }
        self.state = LightboxState::Closed;
        self.content = None;
        self.keyboard = KeyboardListener::Detached;
        tracing::debug!("lightbox closed");
        true
    }

    /// Advances to the next visible entry, wrapping to the first.
    pub fn next(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(index) = self.current_index() else {
            return false;
        };
        let total = self.visible.len();
        if total == 0 {
            return false;
        }
        self.display((index + 1) % total).is_some()
    }

    /// Steps back to the previous visible entry, wrapping to the last.
    pub fn previous(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(index) = self.current_index() else {
            return false;
        };
        let total = self.visible.len();
        if total == 0 {
            return false;
        }
        self.display((index + total - 1) % total).is_some()
    }

    /// Shows the entry at `index` of the visible subset.
    ///
    /// No-op while closed or when `index` is out of range.
    pub fn display(&mut self, index: usize) -> Option<&LightboxContent> {
        if !self.enabled || !self.is_open() {
            return None;
        }
        let total = self.visible.len();
        let entry = self.visible.get(index)?;
        let content = LightboxContent {
            item: entry.id,
            image_ref: self.resolution.apply(&entry.item.image_ref).into_owned(),
            title: entry.item.title.clone(),
            category: entry.item.category.clone(),
            position: index + 1,
            total,
        };
        self.state = LightboxState::Open {
            current_index: index,
        };
        self.content = Some(content);
        self.content.as_ref()
    }
}
