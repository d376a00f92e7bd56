// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::product_details;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Details(product_details::Message),
    /// Animation frame, only subscribed to while something animates.
    Tick(Instant),
    /// The window was asked to close; floating surfaces are released first.
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `PRODUCT_ZOOM_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional product image, taking precedence over `[product] image`.
    pub image: Option<String>,
}
