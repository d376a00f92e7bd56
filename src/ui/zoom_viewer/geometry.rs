// SPDX-License-Identifier: MPL-2.0
//! Coordinate mapping between the thumbnail and the magnifier.
//!
//! Everything here is pure arithmetic in the thumbnail's local coordinate
//! space (origin at its top-left corner, `dimension` pixels per side).

use iced::{Point, Rectangle, Size, Vector};

/// Top-left of the preview box on one axis for a pointer at `local`.
///
/// Centers the box on the pointer, then clamps it to
/// `[0, dimension - preview_size]`. Out-of-range and non-finite inputs are
/// tolerated and land on the nearest bound.
#[must_use]
pub fn preview_origin(local: f32, dimension: f32, preview_size: f32) -> f32 {
    // f32::max discards NaN, so a NaN pointer lands on the lower bound
    (local - preview_size / 2.0)
        .max(0.0)
        .min(dimension - preview_size)
}

/// Maps a local coordinate to `[-1, 1]`: -1 at the leading edge, 0 at the
/// center, 1 at the trailing edge. Not clamped.
#[must_use]
pub fn normalized(local: f32, dimension: f32) -> f32 {
    (local / dimension) * 2.0 - 1.0
}

/// Translation applied to the magnified image.
///
/// Only the trailing (right) edge is guarded by `available_width`; there is
/// no matching guard on the leading or top edges.
#[must_use]
pub fn magnified_offset(zoom_hover: Point, dimension: f32, available_width: f32) -> Vector {
    Vector::new(
        (-zoom_hover.x * dimension).min(available_width - dimension),
        -zoom_hover.y * dimension,
    )
}

/// Rectangle covering `viewport` with an image of `image_size`, preserving
/// aspect ratio and centering the overflow.
#[must_use]
pub fn cover_rect(image_size: Size, viewport: Size) -> Rectangle {
    if image_size.width <= 0.0 || image_size.height <= 0.0 {
        return Rectangle::new(Point::ORIGIN, viewport);
    }
    let scale = (viewport.width / image_size.width).max(viewport.height / image_size.height);
    let size = Size::new(image_size.width * scale, image_size.height * scale);
    Rectangle::new(
        Point::new(
            (viewport.width - size.width) / 2.0,
            (viewport.height - size.height) / 2.0,
        ),
        size,
    )
}

/// Where the magnified image is drawn inside the magnifier viewport.
///
/// `base` is the image rectangle at thumbnail scale. It is scaled by
/// `zoom_scale` about the viewport center, then translated by `offset`.
#[must_use]
pub fn magnified_rect(base: Rectangle, viewport: Size, zoom_scale: f32, offset: Vector) -> Rectangle {
    let center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
    Rectangle::new(
        Point::new(
            center.x + (base.x - center.x) * zoom_scale + offset.x,
            center.y + (base.y - center.y) * zoom_scale + offset.y,
        ),
        Size::new(base.width * zoom_scale, base.height * zoom_scale),
    )
}
