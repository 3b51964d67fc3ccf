// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! user-edited `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Catalog location, filter buttons, grid sizing
//! - `[lightbox]` - Full-screen resolution and swipe detection
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass `--config-dir` or set `ICED_FOLIO_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let catalog = config.catalog_path_with_override(None);
//! println!("catalog: {catalog:?}, swipe: {}px", config.swipe_threshold_px());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::media::Resolution;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Gallery grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Catalog file. Relative paths resolve against the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Category filter buttons, in display order. The catch-all button is
    /// always shown first. When absent, buttons follow catalog order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<String>>,

    /// Grid cell width in logical pixels.
    #[serde(
        default = "default_thumbnail_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_width: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            filters: None,
            thumbnail_width: default_thumbnail_width(),
        }
    }
}

/// Lightbox settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Whether the lightbox is available at all.
    #[serde(default = "default_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Width requested from thumbnail services for the full-screen view.
    #[serde(default = "default_full_width", skip_serializing_if = "Option::is_none")]
    pub full_width: Option<u32>,

    /// Height requested from thumbnail services for the full-screen view.
    #[serde(
        default = "default_full_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_height: Option<u32>,

    /// Minimum horizontal travel for a touch to count as a swipe.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            full_width: default_full_width(),
            full_height: default_full_height(),
            swipe_threshold_px: default_swipe_threshold(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Gallery grid settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Lightbox settings.
    #[serde(default)]
    pub lightbox: LightboxConfig,
}

impl Config {
    /// Full-screen resolution, clamped to the supported range.
    #[must_use]
    pub fn full_resolution(&self) -> Resolution {
        let clamp = |value: Option<u32>, default: u32| {
            value
                .unwrap_or(default)
                .clamp(MIN_FULL_DIMENSION, MAX_FULL_DIMENSION)
        };
        Resolution::new(
            clamp(self.lightbox.full_width, DEFAULT_FULL_WIDTH),
            clamp(self.lightbox.full_height, DEFAULT_FULL_HEIGHT),
        )
    }

    /// Swipe threshold in logical pixels (unclamped; see `SwipeThreshold`).
    #[must_use]
    pub fn swipe_threshold_px(&self) -> f32 {
        self.lightbox
            .swipe_threshold_px
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX)
    }

    /// Grid cell width, clamped to the supported range.
    #[must_use]
    pub fn thumbnail_width(&self) -> f32 {
        let width = self
            .gallery
            .thumbnail_width
            .unwrap_or(DEFAULT_THUMBNAIL_WIDTH);
        if width.is_finite() {
            width.clamp(MIN_THUMBNAIL_WIDTH, MAX_THUMBNAIL_WIDTH)
        } else {
            DEFAULT_THUMBNAIL_WIDTH
        }
    }

    #[must_use]
    pub fn lightbox_enabled(&self) -> bool {
        self.lightbox.enabled.unwrap_or(true)
    }

    /// Resolves the catalog file location.
    ///
    /// A configured absolute path is used as-is; a relative one is joined to
    /// the config directory. Without a configured path the default
    /// `photos.toml` in the config directory is used.
    #[must_use]
    pub fn catalog_path_with_override(&self, base_dir: Option<PathBuf>) -> Option<PathBuf> {
        let config_dir = paths::get_app_config_dir_with_override(base_dir);
        match &self.gallery.catalog {
            Some(path) if path.is_absolute() => Some(path.clone()),
            Some(path) => config_dir.map(|dir| dir.join(path)),
            None => config_dir.map(|dir| dir.join(DEFAULT_CATALOG_FILE)),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_enabled() -> Option<bool> {
    Some(true)
}

fn default_thumbnail_width() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_WIDTH)
}

fn default_full_width() -> Option<u32> {
    Some(DEFAULT_FULL_WIDTH)
}

fn default_full_height() -> Option<u32> {
    Some(DEFAULT_FULL_HEIGHT)
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
