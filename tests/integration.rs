// SPDX-License-Identifier: MPL-2.0
use product_zoom::config::{self, DEFAULT_DIMENSION};
use product_zoom::i18n::fluent::I18n;
use product_zoom::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    std::fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("product-add-to-cart"), "Add to cart");

    // 2. Change config to fr
    std::fs::write(&config_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("product-add-to-cart"), "Ajouter au panier");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_overrides_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"fr\"\n",
    )
    .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_unknown_language_falls_back_to_available_locale() {
    let i18n = I18n::new(Some("tlh".to_string()), &config::Config::default());
    assert!(i18n.available_locales.contains(i18n.current_locale()));
}

#[test]
fn test_zoom_section_drives_viewer_geometry() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\ntheme_mode = \"dark\"\n\n[zoom]\npreview_size = 100.0\nzoom_scale = 2.5\n",
    )
    .expect("Failed to write config file");

    let (loaded, _) = config::load_with_override(Some(dir.path().to_path_buf()));
    let viewer = loaded.zoom.to_viewer_config();

    assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    assert_eq!(viewer.dimension, DEFAULT_DIMENSION);
    assert_eq!(viewer.preview_size, 100.0);
    assert_eq!(viewer.zoom_scale, 2.5);
    assert_eq!(viewer.validate(), Ok(()));
}
