// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! read-only `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[zoom]` - Zoom viewer geometry and fade timing
//! - `[product]` - Demo product image override
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()` (the `--config-dir` flag)
//! 3. Falls back to `PRODUCT_ZOOM_CONFIG_DIR`, then the platform-specific
//!    config directory
//!
//! Missing sections and fields fall back to [`defaults`]. The file is never
//! written by the application.
//!
//! # Examples
//!
//! ```no_run
//! use product_zoom::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load_with_override(None);
//! if let Some(message) = warning {
//!     eprintln!("{message}");
//! }
//! println!("thumbnail edge: {}", config.zoom.dimension);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use crate::ui::zoom_viewer::ZoomViewerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

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

/// Zoom viewer geometry and animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZoomConfig {
    /// Thumbnail edge length.
    pub dimension: f32,
    /// Whether the preview box is drawn over the thumbnail.
    pub show_preview_area: bool,
    /// Preview box edge length.
    pub preview_size: f32,
    /// Magnification factor of the floating overlay.
    pub zoom_scale: f32,
    /// Fade duration in milliseconds.
    pub animation_ms: u64,
    /// Corner radius of both viewports.
    pub corner_radius: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            show_preview_area: DEFAULT_SHOW_PREVIEW_AREA,
            preview_size: DEFAULT_PREVIEW_SIZE,
            zoom_scale: DEFAULT_ZOOM_SCALE,
            animation_ms: DEFAULT_ZOOM_ANIMATION_MS,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl ZoomConfig {
    /// Converts the file representation into viewer construction parameters.
    ///
    /// No validation happens here; the viewer rejects invalid geometry.
    #[must_use]
    pub fn to_viewer_config(&self) -> ZoomViewerConfig {
        ZoomViewerConfig {
            dimension: self.dimension,
            show_preview_area: self.show_preview_area,
            preview_size: self.preview_size,
            zoom_scale: self.zoom_scale,
            zoom_animation_duration: Duration::from_millis(self.animation_ms),
            corner_radius: self.corner_radius,
        }
    }
}

/// Demo product settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductConfig {
    /// Image shown in the viewer. A generated swatch is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
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

    /// Zoom viewer settings.
    #[serde(default)]
    pub zoom: ZoomConfig,

    /// Demo product settings.
    #[serde(default)]
    pub product: ProductConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path, preferring `base_dir` when given.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from a custom directory, or the platform default.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {}", path.display(), err)),
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
    Ok(toml::from_str(&content)?)
}
