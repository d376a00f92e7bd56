// SPDX-License-Identifier: MPL-2.0
//! Location of the read-only settings directory.
//!
//! Resolution order:
//! 1. Explicit override (the `--config-dir` flag)
//! 2. The `PRODUCT_ZOOM_CONFIG_DIR` environment variable, when non-empty
//! 3. `<platform config dir>/ProductZoom`

use std::path::PathBuf;

const APP_NAME: &str = "ProductZoom";

/// Environment variable overriding the settings directory.
pub const ENV_CONFIG_DIR: &str = "PRODUCT_ZOOM_CONFIG_DIR";

/// Returns the settings directory, or `None` when the platform has no
/// config directory and nothing overrides it.
#[must_use]
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
