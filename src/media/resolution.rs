// SPDX-License-Identifier: MPL-2.0
//! High-resolution variants of thumbnail-service image references.
//!
//! Catalog entries often point at a resizing service that takes the output
//! size as query parameters (`...?w=600&h=400&fit=crop`). The grid shows
//! those thumbnails as-is; the lightbox asks the same service for a larger
//! variant by rewriting the `w`/`h` tokens. References without such tokens
//! (local paths, plain URLs) are returned untouched.

use crate::config::{DEFAULT_FULL_HEIGHT, DEFAULT_FULL_WIDTH};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// `w=<digits>` as a query parameter (preceded by `?` or `&`).
static WIDTH_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([?&])w=\d+").expect("width token regex should compile"));

/// `h=<digits>` as a query parameter (preceded by `?` or `&`).
static HEIGHT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([?&])h=\d+").expect("height token regex should compile"));

/// Pixel size requested for the full-screen variant of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Applies [`with_resolution`] with this size.
    #[must_use]
    pub fn apply<'a>(&self, image_ref: &'a str) -> Cow<'a, str> {
        with_resolution(image_ref, self.width, self.height)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(DEFAULT_FULL_WIDTH, DEFAULT_FULL_HEIGHT)
    }
}

/// Returns `true` if the reference carries a width or height token.
#[must_use]
pub fn has_resolution_tokens(image_ref: &str) -> bool {
    WIDTH_TOKEN.is_match(image_ref) || HEIGHT_TOKEN.is_match(image_ref)
}

/// Rewrites every `w=<n>` / `h=<n>` query token to the target size.
///
/// Borrows the input unchanged when it carries no tokens.
#[must_use]
pub fn with_resolution(image_ref: &str, width: u32, height: u32) -> Cow<'_, str> {
    if !has_resolution_tokens(image_ref) {
        return Cow::Borrowed(image_ref);
    }
    let width_replacement = format!("${{1}}w={width}");
    let height_replacement = format!("${{1}}h={height}");

    match WIDTH_TOKEN.replace_all(image_ref, width_replacement.as_str()) {
        Cow::Borrowed(_) => HEIGHT_TOKEN.replace_all(image_ref, height_replacement.as_str()),
        Cow::Owned(widened) => Cow::Owned(
            HEIGHT_TOKEN
                .replace_all(&widened, height_replacement.as_str())
                .into_owned(),
        ),
    }
}
