// SPDX-License-Identifier: MPL-2.0
//! Canvas programs drawing the thumbnail and the floating magnifier.

use super::config::ZoomViewerConfig;
use super::geometry;
use crate::media::ProductImage;
use crate::ui::components::checkerboard;
use crate::ui::design_tokens::{border, opacity, palette};
use iced::advanced::image::{FilterMethod, Image};
use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme, Vector};

/// The product image at thumbnail scale, with the preview box on top.
pub(super) struct Thumbnail<'a> {
    pub image: &'a ProductImage,
    pub config: &'a ZoomViewerConfig,
    pub hover: Point,
    pub preview_visible: bool,
    pub progress: f32,
}

impl<Message> canvas::Program<Message> for Thumbnail<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let viewport = self.config.viewport_size();
        let clip = Rectangle::new(Point::ORIGIN, bounds.size());

        frame.with_clip(clip, |frame| match self.image.data() {
            Some(data) => {
                let rect = geometry::cover_rect(data.size(), viewport);
                frame.draw_image(rect, image(data.handle.clone(), opacity::OPAQUE));
            }
            None => {
                checkerboard::fill(
                    frame,
                    Rectangle::new(Point::ORIGIN, viewport),
                    checkerboard::TILE_SIZE,
                    opacity::OPAQUE,
                );
            }
        });

        if self.config.show_preview_area && self.preview_visible {
            let origin = self.hover;
            let size = Size::new(self.config.preview_size, self.config.preview_size);
            let path = Path::rectangle(origin, size);
            frame.fill(
                &path,
                Color {
                    a: opacity::OVERLAY_SUBTLE * self.progress,
                    ..palette::WHITE
                },
            );
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(border::WIDTH_SM)
                    .with_color(Color {
                        a: self.progress,
                        ..palette::WHITE
                    }),
            );
        }

        let background = theme.palette().background;
        mask_corners(&mut frame, bounds.size(), self.config.corner_radius, background);

        vec![frame.into_geometry()]
    }
}

/// The magnified image inside the floating surface.
///
/// Drawn through the surface's cache; the owner clears the cache whenever
/// the pointer or the fade changes.
pub(super) struct Magnifier<'a> {
    pub cache: &'a Cache,
    pub image: &'a ProductImage,
    pub config: &'a ZoomViewerConfig,
    pub zoom_hover: Point,
    pub available_width: f32,
    pub progress: f32,
}

impl Magnifier<'_> {
    fn offset(&self) -> Vector {
        geometry::magnified_offset(self.zoom_hover, self.config.dimension, self.available_width)
    }
}

impl<Message> canvas::Program<Message> for Magnifier<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let viewport = self.config.viewport_size();
                let clip = Rectangle::new(Point::ORIGIN, bounds.size());
                let offset = self.offset();
                let scale = self.config.zoom_scale;

                frame.with_clip(clip, |frame| match self.image.data() {
                    Some(data) => {
                        let base = geometry::cover_rect(data.size(), viewport);
                        let rect = geometry::magnified_rect(base, viewport, scale, offset);
                        frame.draw_image(rect, image(data.handle.clone(), self.progress));
                    }
                    None => {
                        let base = Rectangle::new(Point::ORIGIN, viewport);
                        let rect = geometry::magnified_rect(base, viewport, scale, offset);
                        checkerboard::fill(
                            frame,
                            rect,
                            checkerboard::TILE_SIZE * scale,
                            self.progress,
                        );
                    }
                });

                let background = Color {
                    a: self.progress,
                    ..theme.palette().background
                };
                mask_corners(frame, bounds.size(), self.config.corner_radius, background);
            });

        vec![geometry]
    }
}

fn image(handle: iced::widget::image::Handle, alpha: f32) -> Image {
    Image {
        handle,
        filter_method: FilterMethod::Linear,
        rotation: iced::Radians(0.0),
        opacity: alpha,
        snap: true,
        border_radius: iced::border::Radius::default(),
    }
}

/// Paints the area outside a rounded rectangle of `radius` with `color`.
fn mask_corners(frame: &mut Frame, size: Size, radius: f32, color: Color) {
    let radius = radius.min(size.width / 2.0).min(size.height / 2.0);
    if radius <= 0.0 {
        return;
    }

    let (w, h) = (size.width, size.height);
    // (corner, point on the horizontal edge, point on the vertical edge)
    let corners = [
        (Point::new(0.0, 0.0), Point::new(radius, 0.0), Point::new(0.0, radius)),
        (Point::new(w, 0.0), Point::new(w - radius, 0.0), Point::new(w, radius)),
        (Point::new(w, h), Point::new(w - radius, h), Point::new(w, h - radius)),
        (Point::new(0.0, h), Point::new(radius, h), Point::new(0.0, h - radius)),
    ];

    for (corner, along_x, along_y) in corners {
        let mut builder = canvas::path::Builder::new();
        builder.move_to(corner);
        builder.line_to(along_x);
        builder.arc_to(corner, along_y, radius);
        builder.close();
        frame.fill(&builder.build(), color);
    }
}
