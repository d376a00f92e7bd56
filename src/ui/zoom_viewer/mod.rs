// SPDX-License-Identifier: MPL-2.0
//! Hover-to-zoom product image viewer.
//!
//! The viewer draws a square thumbnail. While the pointer is over it, a
//! preview box follows the pointer and a floating magnifier of the same size
//! is mounted next to the thumbnail's trailing edge. Both fade in and out
//! together.
//!
//! The magnifier lives on an [`OverlayHost`] owned by the caller, so it can
//! be drawn above sibling content. The viewer mounts it on enter, asks for
//! redraws while the pointer moves or the fade runs, and unmounts it when
//! the fade-out completes or when [`ZoomViewer::teardown`] is called.

pub mod config;
pub mod geometry;
pub mod overlay;
pub mod state;
mod view;

pub use config::ZoomViewerConfig;
pub use overlay::{MountRequest, OverlayHandle, OverlayHost, SurfaceId};
pub use state::{Effect, Message, State};

use crate::error::Result;
use crate::media::ProductImage;
use crate::ui::floating_layer::Surface;
use iced::widget::{container, mouse_area, responsive, Canvas};
use iced::{mouse, Element, Length, Size};
use std::time::Instant;

/// A zoom viewer bound to one product image.
#[derive(Debug)]
pub struct ZoomViewer {
    config: ZoomViewerConfig,
    image: ProductImage,
    state: State,
}

impl ZoomViewer {
    /// Creates a viewer after validating its geometry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Geometry`](crate::error::Error::Geometry) when the
    /// configuration cannot produce a valid preview clamp range.
    pub fn new(config: ZoomViewerConfig, image: ProductImage) -> Result<Self> {
        config.validate()?;
        let state = State::new(&config);
        Ok(Self {
            config,
            image,
            state,
        })
    }

    /// Creates a viewer, replacing invalid geometry with the defaults.
    ///
    /// The default geometry is checked at compile time, so this never fails.
    #[must_use]
    pub fn with_fallback(config: ZoomViewerConfig, image: ProductImage) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(err) => {
                tracing::warn!(%err, "invalid zoom geometry, using defaults");
                ZoomViewerConfig::default()
            }
        };
        let state = State::new(&config);
        Self {
            config,
            image,
            state,
        }
    }

    /// Processes a message and applies the resulting effects to `host`.
    pub fn update<H: OverlayHost>(&mut self, msg: Message, now: Instant, host: &mut H) {
        for effect in self.state.handle(&self.config, msg, now) {
            match effect {
                Effect::MountOverlay(request) => {
                    let handle = host.mount(request);
                    if let Some(stale) = self.state.attach_overlay(handle) {
                        tracing::warn!(surface = stale.id().value(), "replacing a mounted magnifier");
                        host.unmount(stale);
                    }
                }
                Effect::RedrawOverlay => {
                    if let Some(handle) = self.state.overlay() {
                        host.mark_needs_redraw(handle);
                    }
                }
                Effect::UnmountOverlay(handle) => host.unmount(handle),
            }
        }
    }

    /// Removes the magnifier immediately, whatever the fade is doing.
    pub fn teardown<H: OverlayHost>(&mut self, host: &mut H) {
        if let Some(handle) = self.state.release_overlay() {
            host.unmount(handle);
        }
    }

    /// Returns true while animation ticks are needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &ZoomViewerConfig {
        &self.config
    }

    #[must_use]
    pub fn image(&self) -> &ProductImage {
        &self.image
    }

    /// The thumbnail with pointer tracking.
    pub fn view(&self) -> Element<'_, Message> {
        let dimension = self.config.dimension;
        let thumbnail = Canvas::new(view::Thumbnail {
            image: &self.image,
            config: &self.config,
            hover: self.state.hover(),
            preview_visible: self.state.is_preview_visible(),
            progress: self.state.animation_progress(),
        })
        .width(Length::Fixed(dimension))
        .height(Length::Fixed(dimension));

        mouse_area(thumbnail)
            .on_enter(Message::PointerEntered)
            .on_exit(Message::PointerExited)
            .on_move(Message::PointerMoved)
            .interaction(mouse::Interaction::Crosshair)
            .into()
    }

    /// The magnifier content of a mounted surface.
    ///
    /// The available width is whatever the surface's region actually gets,
    /// capped at the viewer's dimension.
    pub fn magnifier<'a, M: 'a>(&'a self, surface: &'a Surface) -> Element<'a, M> {
        let dimension = self.config.dimension;
        let content = responsive(move |available: Size| {
            Canvas::new(view::Magnifier {
                cache: surface.cache(),
                image: &self.image,
                config: &self.config,
                zoom_hover: self.state.zoom_hover(),
                available_width: available.width.min(dimension),
                progress: self.state.animation_progress(),
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
        });

        container(content)
            .width(Length::Fixed(dimension))
            .height(Length::Fixed(dimension))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, GeometryError};
    use crate::ui::floating_layer::FloatingLayer;
    use std::time::Duration;

    fn viewer(config: ZoomViewerConfig) -> ZoomViewer {
        ZoomViewer::new(config, ProductImage::Unavailable).expect("valid config")
    }

    #[test]
    fn new_rejects_preview_larger_than_dimension() {
        let config = ZoomViewerConfig {
            dimension: 100.0,
            preview_size: 150.0,
            ..ZoomViewerConfig::default()
        };
        let result = ZoomViewer::new(config, ProductImage::Unavailable);
        assert!(matches!(
            result,
            Err(Error::Geometry(GeometryError::PreviewLargerThanDimension { .. }))
        ));
    }

    #[test]
    fn with_fallback_replaces_invalid_geometry() {
        let config = ZoomViewerConfig {
            zoom_scale: 0.5,
            ..ZoomViewerConfig::default()
        };
        let viewer = ZoomViewer::with_fallback(config, ProductImage::Unavailable);
        assert_eq!(viewer.config(), &ZoomViewerConfig::default());
    }

    #[test]
    fn with_fallback_keeps_valid_geometry() {
        let config = ZoomViewerConfig {
            dimension: 300.0,
            preview_size: 100.0,
            ..ZoomViewerConfig::default()
        };
        let viewer = ZoomViewer::with_fallback(config.clone(), ProductImage::Unavailable);
        assert_eq!(viewer.config(), &config);
    }

    #[test]
    fn enter_mounts_one_surface() {
        let mut layer = FloatingLayer::new();
        let mut viewer = viewer(ZoomViewerConfig::default());
        let now = Instant::now();

        viewer.update(Message::PointerEntered, now, &mut layer);
        viewer.update(Message::PointerEntered, now, &mut layer);

        assert_eq!(layer.len(), 1);
        assert!(viewer.state().overlay().is_some());
    }

    #[test]
    fn fade_out_unmounts_surface() {
        let mut layer = FloatingLayer::new();
        let mut viewer = viewer(ZoomViewerConfig::default());
        let start = Instant::now();

        viewer.update(Message::PointerEntered, start, &mut layer);
        viewer.update(Message::Tick, start + Duration::from_millis(250), &mut layer);
        viewer.update(Message::PointerExited, start + Duration::from_millis(300), &mut layer);
        assert_eq!(layer.len(), 1);

        viewer.update(Message::Tick, start + Duration::from_millis(600), &mut layer);
        assert!(layer.is_empty());
        assert!(!viewer.is_animating());
    }

    #[test]
    fn moves_redraw_mounted_surface() {
        let mut layer = FloatingLayer::new();
        let mut viewer = viewer(ZoomViewerConfig::default());
        let now = Instant::now();

        viewer.update(Message::PointerEntered, now, &mut layer);
        viewer.update(Message::PointerMoved(iced::Point::new(10.0, 20.0)), now, &mut layer);

        let id = viewer.state().overlay().expect("mounted").id();
        assert_eq!(layer.surface(id).expect("surface").revision(), 1);
    }

    #[test]
    fn teardown_during_fade_in_unmounts() {
        let mut layer = FloatingLayer::new();
        let mut viewer = viewer(ZoomViewerConfig::default());
        let start = Instant::now();

        viewer.update(Message::PointerEntered, start, &mut layer);
        viewer.update(Message::Tick, start + Duration::from_millis(50), &mut layer);
        viewer.teardown(&mut layer);

        assert!(layer.is_empty());
        assert!(viewer.state().overlay().is_none());
        assert!(!viewer.state().is_preview_visible());
    }
}
