// SPDX-License-Identifier: MPL-2.0
//! Application root: wires configuration, localization and the product
//! details screen into the iced runtime.
//!
//! The [`App`] owns the [`FloatingLayer`] that hosts the zoom magnifier, so
//! the screen can be torn down cleanly when the window closes.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::domain::product::{ImageRef, Product};
use crate::i18n::fluent::I18n;
use crate::media::ProductImage;
use crate::ui::floating_layer::FloatingLayer;
use crate::ui::product_details;
use crate::ui::theming::ColorScheme;
use crate::ui::zoom_viewer::ZoomViewer;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub struct App {
    pub i18n: I18n,
    theme: Theme,
    colors: ColorScheme,
    details: product_details::State,
    layer: FloatingLayer,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("product", &self.details.product().name)
            .field("mounted_surfaces", &self.layer.len())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // Close requests go through App::update so the magnifier is released
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.clone().map(PathBuf::from));
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        (Self::from_config(flags, &config), Task::none())
    }

    /// Builds the application state from flags and a loaded configuration.
    #[must_use]
    pub fn from_config(flags: Flags, config: &Config) -> Self {
        let i18n = I18n::new(flags.lang, config);
        let theme_mode = config.general.theme_mode;

        let image_ref = flags
            .image
            .map(PathBuf::from)
            .or_else(|| config.product.image.clone())
            .map_or(ImageRef::DemoSwatch, ImageRef::Path);
        let image = ProductImage::load(&image_ref);
        let viewer = ZoomViewer::with_fallback(config.zoom.to_viewer_config(), image);
        let details = product_details::State::new(Product::demo(image_ref), viewer);

        Self {
            i18n,
            theme: theme_mode.theme(),
            colors: ColorScheme::for_mode(theme_mode),
            details,
            layer: FloatingLayer::new(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.details.is_animating()),
        ])
    }

    /// Processes a top-level message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Details(msg) => self.details.update(msg, Instant::now(), &mut self.layer),
            Message::Tick(now) => {
                self.details
                    .update(product_details::Message::Tick, now, &mut self.layer);
            }
            Message::WindowCloseRequested(id) => {
                self.details.teardown(&mut self.layer);
                tracing::info!("window close requested");
                return window::close(id);
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            details: &self.details,
            layer: &self.layer,
            colors: &self.colors,
        })
    }

    #[must_use]
    pub fn details(&self) -> &product_details::State {
        &self.details
    }

    #[must_use]
    pub fn layer(&self) -> &FloatingLayer {
        &self.layer
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(Flags::default(), &Config::default())
    }
}
