// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Lightbox**: Full-screen image resolution and swipe detection
//! - **Grid**: Thumbnail cell sizing
//! - **Catalog**: Default catalog file name

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Width requested from thumbnail services for the full-screen view.
pub const DEFAULT_FULL_WIDTH: u32 = 1600;

/// Height requested from thumbnail services for the full-screen view.
pub const DEFAULT_FULL_HEIGHT: u32 = 1200;

/// Smallest full-screen dimension accepted from the config file.
pub const MIN_FULL_DIMENSION: u32 = 320;

/// Largest full-screen dimension accepted from the config file.
pub const MAX_FULL_DIMENSION: u32 = 8192;

/// Horizontal distance (logical pixels) a touch must travel to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default width of a grid cell in logical pixels.
pub const DEFAULT_THUMBNAIL_WIDTH: f32 = 280.0;

/// Minimum grid cell width.
pub const MIN_THUMBNAIL_WIDTH: f32 = 120.0;

/// Maximum grid cell width.
pub const MAX_THUMBNAIL_WIDTH: f32 = 640.0;

/// Height of the image area in a grid cell, as a ratio of its width.
pub const THUMBNAIL_ASPECT: f32 = 0.75;

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Catalog file looked up in the config directory when none is configured.
pub const DEFAULT_CATALOG_FILE: &str = "photos.toml";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Full-screen resolution validation
    assert!(MIN_FULL_DIMENSION > 0);
    assert!(MAX_FULL_DIMENSION > MIN_FULL_DIMENSION);
    assert!(DEFAULT_FULL_WIDTH >= MIN_FULL_DIMENSION);
    assert!(DEFAULT_FULL_WIDTH <= MAX_FULL_DIMENSION);
    assert!(DEFAULT_FULL_HEIGHT >= MIN_FULL_DIMENSION);
    assert!(DEFAULT_FULL_HEIGHT <= MAX_FULL_DIMENSION);

    // Swipe threshold validation
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(MAX_SWIPE_THRESHOLD_PX > MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    // Grid validation
    assert!(MIN_THUMBNAIL_WIDTH > 0.0);
    assert!(MAX_THUMBNAIL_WIDTH > MIN_THUMBNAIL_WIDTH);
    assert!(DEFAULT_THUMBNAIL_WIDTH >= MIN_THUMBNAIL_WIDTH);
    assert!(DEFAULT_THUMBNAIL_WIDTH <= MAX_THUMBNAIL_WIDTH);
    assert!(THUMBNAIL_ASPECT > 0.0);
};
