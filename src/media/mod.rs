// SPDX-License-Identifier: MPL-2.0
//! Image references: local paths versus remote URLs, and full-size variants.
//!
//! Gallery items carry an opaque `image_ref`. Local paths are handed to
//! Iced's image widget; remote references are never fetched and render as a
//! placeholder.

pub mod resolution;

pub use resolution::{has_resolution_tokens, with_resolution, Resolution};

use iced::widget::image::Handle;

/// Returns `true` for URLs (`scheme://...`) and inline `data:` references.
#[must_use]
pub fn is_remote(image_ref: &str) -> bool {
    image_ref.contains("://") || image_ref.starts_with("data:")
}

/// Image handle for a local reference, `None` for remote ones.
#[must_use]
pub fn local_handle(image_ref: &str) -> Option<Handle> {
    if is_remote(image_ref) || image_ref.trim().is_empty() {
        None
    } else {
        Some(Handle::from_path(image_ref))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_remote_references() {
        assert!(is_remote("https://images.example.com/a.jpg?w=600"));
        assert!(is_remote("file:///srv/photos/a.jpg"));
        assert!(is_remote("data:image/png;base64,AAAA"));
        assert!(!is_remote("photos/nature/alpine-sunset.jpg"));
        assert!(!is_remote("/srv/photos/a.jpg"));
    }

    #[test]
    fn only_local_references_get_handles() {
        assert!(local_handle("photos/a.jpg").is_some());
        assert!(local_handle("https://images.example.com/a.jpg").is_none());
        assert!(local_handle("  ").is_none());
    }
}
