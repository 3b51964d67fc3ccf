// SPDX-License-Identifier: MPL-2.0
use iced_folio::catalog::Catalog;
use iced_folio::config::{self, Config};
use iced_folio::domain::gallery::{Category, FilterValue, ItemId};
use iced_folio::gallery::{
    filter_buttons, Command, Gallery, GallerySettings, LightboxKey, PointerTarget,
};
use iced_folio::i18n::fluent::I18n;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn sample_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/catalog/photos.toml")
}

fn sample_gallery() -> Gallery {
    let (catalog, warning) = Catalog::load(Some(&sample_catalog_path()));
    assert!(warning.is_none(), "bundled catalog should load");
    let buttons = filter_buttons("All", &catalog.categories(), None, Category::display_label);
    Gallery::new(catalog, buttons, GallerySettings::default())
}

fn current_title(gallery: &Gallery) -> Option<&str> {
    gallery
        .navigator()
        .content()
        .map(|content| content.title.as_str())
}

#[test]
fn bundled_catalog_builds_one_button_per_category() {
    let gallery = sample_gallery();
    assert_eq!(gallery.items().len(), 12);
    let values: Vec<&str> = gallery
        .filter()
        .buttons()
        .iter()
        .map(|b| b.value.as_str())
        .collect();
    assert_eq!(values, ["all", "nature", "urban", "travel", "portraits"]);
    assert_eq!(gallery.filter().visible_count(), 12);
}

#[test]
fn filtered_lightbox_wraps_within_category() {
    let mut gallery = sample_gallery();
    assert!(gallery.select_filter(&FilterValue::parse("travel")));
    assert_eq!(gallery.filter().visible_count(), 3);

    // Paris Dreams is catalog item 6.
    assert!(gallery.handle_pointer(PointerTarget::Item(ItemId::new(6))));
    assert_eq!(current_title(&gallery), Some("Paris Dreams"));
    let content = gallery.navigator().content().expect("lightbox open");
    assert_eq!((content.position, content.total), (1, 3));

    gallery.handle_key(LightboxKey::ArrowLeft);
    assert_eq!(current_title(&gallery), Some("Kyoto Serenity"));
    gallery.handle_key(LightboxKey::ArrowRight);
    gallery.handle_key(LightboxKey::ArrowRight);
    assert_eq!(current_title(&gallery), Some("Venice Waters"));

    gallery.handle_pointer(PointerTarget::CloseControl);
    assert!(!gallery.navigator().is_open());
}

#[test]
fn filter_change_while_open_keeps_current_sequence() {
    let mut gallery = sample_gallery();
    gallery.apply(Command::Open(ItemId::new(0)));
    assert_eq!(gallery.navigator().visible().len(), 12);

    gallery.select_filter(&FilterValue::parse("urban"));
    gallery.apply(Command::Next);
    assert_eq!(current_title(&gallery), Some("Forest Light"));

    // Reopening picks up the new filter.
    gallery.apply(Command::Close);
    gallery.apply(Command::Open(ItemId::new(3)));
    assert_eq!(gallery.navigator().visible().len(), 3);
}

#[test]
fn swipe_then_backdrop_close() {
    let mut gallery = sample_gallery();
    gallery.handle_pointer(PointerTarget::Item(ItemId::new(11)));

    // Leftward swipe advances and wraps to the first photo.
    gallery.touch_start(400.0);
    assert!(gallery.touch_end(200.0));
    assert_eq!(current_title(&gallery), Some("Alpine Sunset"));

    // Rightward swipe goes back.
    gallery.touch_start(200.0);
    assert!(gallery.touch_end(400.0));
    assert_eq!(current_title(&gallery), Some("Studio Session"));

    // A swipe that starts on the backdrop still navigates.
    gallery.handle_pointer(PointerTarget::BackdropPressed);
    gallery.touch_start(100.0);
    gallery.handle_pointer(PointerTarget::BackdropReleased);
    assert!(gallery.touch_end(20.0));
    assert_eq!(current_title(&gallery), Some("Alpine Sunset"));

    // A plain tap on it closes.
    gallery.handle_pointer(PointerTarget::BackdropPressed);
    assert!(gallery.handle_pointer(PointerTarget::BackdropReleased));
    assert!(!gallery.navigator().listens_for_keys());
}

#[test]
fn thumbnail_urls_are_upgraded_in_lightbox() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("photos.toml");
    fs::write(
        &path,
        r#"
[[photo]]
src = "https://images.example.com/photo-1?w=600&h=400&fit=crop"
title = "City Lights"
category = "urban"
"#,
    )
    .expect("failed to write catalog");

    let mut config = Config::default();
    config.lightbox.full_width = Some(1920);
    config.lightbox.full_height = Some(1080);

    let (catalog, _) = Catalog::load(Some(&path));
    let buttons = filter_buttons("All", &catalog.categories(), None, Category::display_label);
    let mut gallery = Gallery::new(catalog, buttons, GallerySettings::from_config(&config));
    gallery.apply(Command::Open(ItemId::new(0)));

    let content = gallery.navigator().content().expect("lightbox open");
    assert_eq!(
        content.image_ref,
        "https://images.example.com/photo-1?w=1920&h=1080&fit=crop"
    );
    // The grid keeps the original reference.
    assert_eq!(
        gallery.items()[0].image_ref,
        "https://images.example.com/photo-1?w=600&h=400&fit=crop"
    );
}

#[test]
fn config_round_trip_drives_gallery_settings() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());
    config.gallery.filters = Some(vec!["portraits".to_string(), "nature".to_string()]);
    config.lightbox.swipe_threshold_px = Some(80.0);
    let content = toml::to_string_pretty(&config).expect("failed to serialize config");
    fs::write(dir.path().join("settings.toml"), content).expect("failed to write settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");

    let (catalog, _) = Catalog::load(Some(&sample_catalog_path()));
    let buttons = filter_buttons(
        i18n.tr("filter-all"),
        &catalog.categories(),
        loaded.gallery.filters.as_deref(),
        |category| i18n.category_label(category),
    );
    let labels: Vec<&str> = buttons.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, ["Tout", "Portraits", "Nature"]);

    let mut gallery = Gallery::new(catalog, buttons, GallerySettings::from_config(&loaded));
    gallery.apply(Command::Open(ItemId::new(0)));
    gallery.touch_start(300.0);
    assert!(!gallery.touch_end(230.0));
    gallery.touch_start(300.0);
    assert!(gallery.touch_end(210.0));
}

#[test]
fn unreadable_settings_fall_back_to_defaults() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("settings.toml"), "[lightbox\nbroken")
        .expect("failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn missing_catalog_yields_disabled_lightbox() {
    let dir = tempdir().expect("failed to create temp dir");
    let config = Config::default();
    let path = config.catalog_path_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(path, Some(dir.path().join("photos.toml")));

    let (catalog, warning) = Catalog::load(path.as_deref());
    assert_eq!(warning.as_deref(), Some("notification-catalog-missing"));

    let mut gallery = Gallery::new(catalog, Vec::new(), GallerySettings::default());
    assert!(!gallery.is_enabled());
    assert!(!gallery.apply(Command::Open(ItemId::new(0))));
    assert!(!gallery.handle_key(LightboxKey::Escape));
}
