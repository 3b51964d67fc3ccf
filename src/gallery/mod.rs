// SPDX-License-Identifier: MPL-2.0
//! Gallery core: filter bar, lightbox navigator and their input routing.
//!
//! [`Gallery`] owns one catalog, one [`FilterController`], one
//! [`LightboxNavigator`] and one [`SwipeTracker`]. Everything here is plain
//! state; the Iced shell in `crate::app` only translates events into
//! [`Command`]s and renders the result.
//!
//! # Examples
//!
//! ```
//! use iced_folio::catalog::Catalog;
//! use iced_folio::domain::gallery::{FilterValue, GalleryItem, ItemId};
//! use iced_folio::gallery::{filter_buttons, Command, Gallery, GallerySettings};
//!
//! let catalog = Catalog::new(vec![
//!     GalleryItem::new("a.jpg", "Alpine Sunset", "nature"),
//!     GalleryItem::new("b.jpg", "City Lights", "urban"),
//! ]);
//! let buttons = filter_buttons("All", &catalog.categories(), None, |c| c.display_label());
//! let mut gallery = Gallery::new(catalog, buttons, GallerySettings::default());
//!
//! gallery.apply(Command::Open(ItemId::new(1)));
//! assert_eq!(gallery.navigator().current_index(), Some(1));
//! gallery.apply(Command::Next);
//! assert_eq!(gallery.navigator().current_index(), Some(0));
//! ```

pub mod filter_controller;
pub mod input;
pub mod navigator;

pub use filter_controller::{FilterButton, FilterController};
pub use input::{
    classify_swipe, BackdropTap, Command, LightboxKey, PointerTarget, SwipeThreshold, SwipeTracker,
};
pub use navigator::{
    KeyboardListener, LightboxContent, LightboxNavigator, LightboxState, VisibleEntry, VisibleSet,
};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::domain::gallery::{Category, FilterValue, GalleryItem, ItemId};
use crate::media::Resolution;

/// Tunables taken from the config file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GallerySettings {
    pub resolution: Resolution,
    pub swipe_threshold: SwipeThreshold,
    pub lightbox_enabled: bool,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            swipe_threshold: SwipeThreshold::default(),
            lightbox_enabled: true,
        }
    }
}

impl GallerySettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            resolution: config.full_resolution(),
            swipe_threshold: SwipeThreshold::new(config.swipe_threshold_px()),
            lightbox_enabled: config.lightbox_enabled(),
        }
    }
}

/// One grid cell as handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell<'a> {
    pub id: ItemId,
    pub item: &'a GalleryItem,
}

/// Builds the filter bar buttons.
///
/// The catch-all button comes first. Category buttons follow `configured`
/// when given, otherwise `categories` (catalog first-appearance order).
/// `label_for` supplies each category button's text.
pub fn filter_buttons(
    all_label: impl Into<String>,
    categories: &[Category],
    configured: Option<&[String]>,
    label_for: impl Fn(&Category) -> String,
) -> Vec<FilterButton> {
    let mut buttons = vec![FilterButton::all(all_label)];
    let configured_categories: Vec<Category>;
    let source = match configured {
        Some(names) => {
            configured_categories = names
                .iter()
                .map(|name| FilterValue::parse(name))
                .filter_map(|value| match value {
                    FilterValue::Category(category) if !category.as_str().is_empty() => {
                        Some(category)
                    }
                    _ => None,
                })
                .collect();
            configured_categories.as_slice()
        }
        None => categories,
    };
    for category in source {
        buttons.push(FilterButton::category(label_for(category), category.clone()));
    }
    buttons
}

/// A filterable grid with a lightbox.
#[derive(Debug, Clone)]
pub struct Gallery {
    items: Vec<GalleryItem>,
    filter: FilterController,
    navigator: LightboxNavigator,
    swipe: SwipeTracker,
    backdrop: BackdropTap,
}

impl Gallery {
    /// Creates a gallery over `catalog`.
    ///
    /// The navigator is disabled when the catalog is empty or the lightbox
    /// is turned off in the settings.
    #[must_use]
    pub fn new(catalog: Catalog, buttons: Vec<FilterButton>, settings: GallerySettings) -> Self {
        let items = catalog.into_items();
        let filter = FilterController::new(buttons, &items);
        let navigator = if items.is_empty() || !settings.lightbox_enabled {
            tracing::info!(
                photos = items.len(),
                lightbox_enabled = settings.lightbox_enabled,
                "lightbox disabled"
            );
            LightboxNavigator::disabled()
        } else {
            LightboxNavigator::new(settings.resolution)
        };
        Self {
            items,
            filter,
            navigator,
            swipe: SwipeTracker::new(settings.swipe_threshold),
            backdrop: BackdropTap::Idle,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    #[must_use]
    pub fn filter(&self) -> &FilterController {
        &self.filter
    }

    #[must_use]
    pub fn navigator(&self) -> &LightboxNavigator {
        &self.navigator
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.navigator.is_enabled()
    }

    /// Selects a filter button. See [`FilterController::select_filter`].
    pub fn select_filter(&mut self, value: &FilterValue) -> bool {
        self.filter.select_filter(value)
    }

    /// Runs a navigator transition. Returns `true` if state changed.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Open(id) => {
                self.backdrop = BackdropTap::Idle;
                self.navigator.open(id, &self.items, &self.filter)
            }
            Command::Close => {
                self.swipe.cancel();
                self.backdrop = BackdropTap::Idle;
                self.navigator.close()
            }
            Command::Next => self.navigator.next(),
            Command::Previous => self.navigator.previous(),
        }
    }

    /// Routes a press (or backdrop release) from the grid or the lightbox.
    pub fn handle_pointer(&mut self, target: PointerTarget) -> bool {
        match target {
            PointerTarget::BackdropPressed => {
                if self.navigator.is_open() {
                    self.backdrop = BackdropTap::Pressed;
                }
                false
            }
            PointerTarget::BackdropReleased => {
                if self.backdrop != BackdropTap::Pressed {
                    return false;
                }
                if self.swipe.is_tracking() {
                    // Tap or swipe is decided when the touch ends.
                    self.backdrop = BackdropTap::Released;
                    return false;
                }
                self.apply(Command::Close)
            }
            other => {
                self.backdrop = BackdropTap::Idle;
                match other.command() {
                    Some(command) => self.apply(command),
                    None => false,
                }
            }
        }
    }

    /// Routes a key press. Ignored unless the keyboard listener is attached.
    pub fn handle_key(&mut self, key: LightboxKey) -> bool {
        if !self.navigator.listens_for_keys() {
            return false;
        }
        self.apply(key.command())
    }

    /// Records the start of a touch on the lightbox.
    pub fn touch_start(&mut self, x: f32) {
        if self.navigator.is_open() {
            self.swipe.touch_start(x);
        }
    }

    /// Completes a touch; a long enough horizontal swipe navigates.
    ///
    /// A touch that is not a swipe and was released over the backdrop it
    /// started on closes the lightbox.
    pub fn touch_end(&mut self, x: f32) -> bool {
        let tap = std::mem::take(&mut self.backdrop);
        match self.swipe.touch_end(x) {
            Some(command) => self.apply(command),
            None if tap == BackdropTap::Released => self.apply(Command::Close),
            None => false,
        }
    }

    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
        self.backdrop = BackdropTap::Idle;
    }

    /// Visible grid cells in catalog order.
    pub fn grid_cells(&self) -> impl Iterator<Item = GridCell<'_>> + '_ {
        self.filter.visible_ids().filter_map(move |id| {
            self.items
                .get(id.index())
                .map(|item| GridCell { id, item })
        })
    }
}
