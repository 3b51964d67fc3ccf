// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::{LightboxKey, PointerTarget};
use crate::ui::grid;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Filter bar or grid thumbnail pressed.
    Grid(grid::Message),
    /// Press inside the lightbox overlay.
    Lightbox(PointerTarget),
    /// Key press routed while the lightbox listens for keys.
    Key(LightboxKey),
    /// Horizontal position where a touch began.
    TouchStarted(f32),
    /// Horizontal position where a touch ended.
    TouchEnded(f32),
    TouchCancelled,
    /// Hide the oldest startup warning.
    DismissNotice,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional catalog file. Takes precedence over `[gallery] catalog`.
    pub catalog: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
