// SPDX-License-Identifier: MPL-2.0
//! Construction parameters of the zoom viewer.

use crate::config::{
    DEFAULT_CORNER_RADIUS, DEFAULT_DIMENSION, DEFAULT_PREVIEW_SIZE, DEFAULT_SHOW_PREVIEW_AREA,
    DEFAULT_ZOOM_ANIMATION_MS, DEFAULT_ZOOM_SCALE,
};
use crate::error::GeometryError;
use iced::Size;
use std::time::Duration;

/// Geometry and timing of a zoom viewer, fixed for the viewer's lifetime.
///
/// All lengths are logical pixels. Use [`ZoomViewerConfig::validate`] (or
/// construct a [`ZoomViewer`](super::ZoomViewer), which validates) before
/// relying on the clamp range.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomViewerConfig {
    /// Thumbnail edge length; the magnifier viewport has the same size.
    pub dimension: f32,
    /// Whether the preview box is drawn over the thumbnail.
    pub show_preview_area: bool,
    /// Preview box edge length.
    pub preview_size: f32,
    /// Magnification factor of the floating overlay.
    pub zoom_scale: f32,
    /// Duration of a full fade-in or fade-out.
    pub zoom_animation_duration: Duration,
    /// Corner radius of both viewports.
    pub corner_radius: f32,
}

impl Default for ZoomViewerConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
            show_preview_area: DEFAULT_SHOW_PREVIEW_AREA,
            preview_size: DEFAULT_PREVIEW_SIZE,
            zoom_scale: DEFAULT_ZOOM_SCALE,
            zoom_animation_duration: Duration::from_millis(DEFAULT_ZOOM_ANIMATION_MS),
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl ZoomViewerConfig {
    /// Checks that the geometry yields a non-empty clamp range.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.dimension.is_finite() || self.dimension <= 0.0 {
            return Err(GeometryError::InvalidDimension(self.dimension));
        }
        if !self.preview_size.is_finite() || self.preview_size <= 0.0 {
            return Err(GeometryError::InvalidPreviewSize(self.preview_size));
        }
        if self.preview_size > self.dimension {
            return Err(GeometryError::PreviewLargerThanDimension {
                preview_size: self.preview_size,
                dimension: self.dimension,
            });
        }
        if !self.zoom_scale.is_finite() || self.zoom_scale <= 1.0 {
            return Err(GeometryError::InvalidZoomScale(self.zoom_scale));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(GeometryError::InvalidCornerRadius(self.corner_radius));
        }
        Ok(())
    }

    /// Upper bound of the preview box origin on each axis.
    #[must_use]
    pub fn max_preview_origin(&self) -> f32 {
        self.dimension - self.preview_size
    }

    /// Size of the thumbnail and of the magnifier viewport.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        Size::new(self.dimension, self.dimension)
    }
}
