// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the gallery core and Iced.
//!
//! The `App` struct owns the gallery, localization and display preferences,
//! and translates messages into gallery operations. Startup resolves the
//! config directory, settings, locale and catalog in that order; every step
//! falls back to defaults and records a warning instead of failing.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::lightbox_key;

use crate::catalog::Catalog;
use crate::config::{self, Config};
use crate::domain::gallery::FilterValue;
use crate::gallery::{filter_buttons, Gallery, GallerySettings};
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: Gallery,
    theme_mode: ThemeMode,
    thumbnail_width: f32,
    /// Pending startup warnings (i18n keys), oldest first.
    notices: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("photos", &self.gallery.items().len())
            .field("filter", self.gallery.filter().active_value())
            .field("lightbox", &self.gallery.navigator().state())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and the catalog, then builds the gallery.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let catalog_path = flags
            .catalog
            .map(PathBuf::from)
            .or_else(|| config.catalog_path_with_override(None));
        let (catalog, catalog_warning) = Catalog::load(catalog_path.as_deref());

        let mut app = Self::with_catalog(i18n, &config, catalog);
        app.notices = [config_warning, catalog_warning]
            .into_iter()
            .flatten()
            .collect();

        (app, Task::none())
    }

    /// Builds the application state around an already loaded catalog.
    pub fn with_catalog(i18n: I18n, config: &Config, catalog: Catalog) -> Self {
        let buttons = filter_buttons(
            i18n.tr("filter-all"),
            &catalog.categories(),
            config.gallery.filters.as_deref(),
            |category| i18n.category_label(category),
        );
        let gallery = Gallery::new(catalog, buttons, GallerySettings::from_config(config));

        Self {
            i18n,
            gallery,
            theme_mode: config.general.theme_mode,
            thumbnail_width: config.thumbnail_width(),
            notices: Vec::new(),
        }
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    /// Window title, naming the active category filter if any.
    pub fn title(&self) -> String {
        let active = self.gallery.filter().active_button();
        match active.value {
            FilterValue::All => self.i18n.tr("window-title"),
            FilterValue::Category(_) => self.i18n.tr_with_args(
                "window-title-filtered",
                &[("category", active.label.as_str())],
            ),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_lightbox_subscription(self.gallery.navigator().listens_for_keys())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let changed = update::handle_message(
            update::UpdateContext {
                gallery: &mut self.gallery,
                notices: &mut self.notices,
            },
            message,
        );
        if changed {
            tracing::trace!(app = ?self, "state changed");
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            thumbnail_width: self.thumbnail_width,
            notice: self.notices.first().map(String::as_str),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{Category, GalleryItem, ItemId};
    use crate::gallery::{LightboxKey, PointerTarget};
    use crate::ui::grid;

    fn app_with_config(config: &Config) -> App {
        let catalog = Catalog::new(vec![
            GalleryItem::new("a.jpg?w=600&h=400", "Alpine Sunset", "nature"),
            GalleryItem::new("b.jpg", "City Lights", "urban"),
            GalleryItem::new("c.jpg", "Forest Light", "nature"),
        ]);
        App::with_catalog(I18n::new(Some("en-US".to_string()), config), config, catalog)
    }

    fn app() -> App {
        app_with_config(&Config::default())
    }

    #[test]
    fn title_reflects_active_filter() {
        let mut app = app();
        assert_eq!(app.title(), "IcedFolio");
        let _ = app.update(Message::Grid(grid::Message::FilterSelected(
            FilterValue::Category(Category::new("urban")),
        )));
        assert_eq!(app.title(), "IcedFolio - Urban");
    }

    #[test]
    fn filter_buttons_are_localized_and_ordered() {
        let app = app();
        let labels: Vec<&str> = app
            .gallery()
            .filter()
            .buttons()
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(labels, ["All", "Nature", "Urban"]);
    }

    #[test]
    fn configured_filters_drive_buttons() {
        let mut config = Config::default();
        config.gallery.filters = Some(vec!["urban".to_string()]);
        let app = app_with_config(&config);
        assert_eq!(app.gallery().filter().buttons().len(), 2);
        assert_eq!(
            app.gallery().filter().buttons()[1].value,
            FilterValue::Category(Category::new("urban"))
        );
    }

    #[test]
    fn click_key_and_backdrop_flow() {
        let mut app = app();
        let _ = app.update(Message::Grid(grid::Message::ItemPressed(ItemId::new(0))));
        assert!(app.gallery().navigator().listens_for_keys());
        let content = app.gallery().navigator().content().expect("lightbox open");
        assert_eq!(content.image_ref, "a.jpg?w=1600&h=1200");

        let _ = app.update(Message::Key(LightboxKey::ArrowLeft));
        assert_eq!(app.gallery().navigator().current_index(), Some(2));

        let _ = app.update(Message::Lightbox(PointerTarget::Content));
        assert!(app.gallery().navigator().is_open());

        let _ = app.update(Message::Lightbox(PointerTarget::BackdropPressed));
        assert!(app.gallery().navigator().is_open());
        let _ = app.update(Message::Lightbox(PointerTarget::BackdropReleased));
        assert!(!app.gallery().navigator().is_open());
        assert!(!app.gallery().navigator().listens_for_keys());
    }

    #[test]
    fn swipe_messages_navigate() {
        let mut app = app();
        let _ = app.update(Message::Grid(grid::Message::ItemPressed(ItemId::new(1))));
        let _ = app.update(Message::TouchStarted(100.0));
        let _ = app.update(Message::TouchEnded(200.0));
        assert_eq!(app.gallery().navigator().current_index(), Some(0));
    }

    #[test]
    fn swipe_from_backdrop_keeps_lightbox_open() {
        let mut app = app();
        let _ = app.update(Message::Grid(grid::Message::ItemPressed(ItemId::new(0))));
        // Widget messages for a finger arrive before the subscription's.
        let _ = app.update(Message::Lightbox(PointerTarget::BackdropPressed));
        let _ = app.update(Message::TouchStarted(300.0));
        let _ = app.update(Message::Lightbox(PointerTarget::BackdropReleased));
        let _ = app.update(Message::TouchEnded(249.0));
        assert!(app.gallery().navigator().is_open());
        assert_eq!(app.gallery().navigator().current_index(), Some(1));
    }

    #[test]
    fn notices_are_dismissed_oldest_first() {
        let mut app = app();
        app.notices = vec![
            "notification-config-load-error".to_string(),
            "notification-catalog-missing".to_string(),
        ];
        let _ = app.update(Message::DismissNotice);
        assert_eq!(app.notices(), ["notification-catalog-missing".to_string()]);
        let _ = app.update(Message::DismissNotice);
        let _ = app.update(Message::DismissNotice);
        assert!(app.notices().is_empty());
    }

    #[test]
    fn disabled_lightbox_keeps_grid_working() {
        let mut config = Config::default();
        config.lightbox.enabled = Some(false);
        let mut app = app_with_config(&config);
        let _ = app.update(Message::Grid(grid::Message::ItemPressed(ItemId::new(0))));
        assert!(!app.gallery().navigator().is_open());
        let _ = app.update(Message::Grid(grid::Message::FilterSelected(
            FilterValue::Category(Category::new("nature")),
        )));
        assert_eq!(app.gallery().filter().visible_count(), 2);
    }
}
