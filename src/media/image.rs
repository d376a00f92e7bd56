// SPDX-License-Identifier: MPL-2.0
//! Product image loading and decoding.

use crate::domain::product::ImageRef;
use crate::error::Result;
use iced::widget::image;
use iced::Size;
use image_rs::{GenericImageView, Rgba, RgbaImage};
use std::fs;
use std::path::Path;

/// Edge length of the generated demo swatch.
pub const DEMO_SWATCH_SIZE: u32 = 1200;

/// Grid pitch of the demo swatch, so magnification is easy to see.
const SWATCH_GRID: u32 = 75;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Image shown by the zoom viewer.
///
/// Load failures are not fatal: the viewer draws a placeholder for
/// [`ProductImage::Unavailable`].
#[derive(Debug, Clone)]
pub enum ProductImage {
    Loaded(ImageData),
    Unavailable,
}

impl ProductImage {
    /// Resolves an image reference, logging and degrading on failure.
    #[must_use]
    pub fn load(source: &ImageRef) -> Self {
        match source {
            ImageRef::DemoSwatch => ProductImage::Loaded(demo_swatch(DEMO_SWATCH_SIZE)),
            ImageRef::Path(path) => match load_image(path) {
                Ok(data) => {
                    tracing::info!(path = %path.display(), width = data.width, height = data.height, "product image loaded");
                    ProductImage::Loaded(data)
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "product image unavailable, showing placeholder");
                    ProductImage::Unavailable
                }
            },
        }
    }

    #[must_use]
    pub fn data(&self) -> Option<&ImageData> {
        match self {
            ProductImage::Loaded(data) => Some(data),
            ProductImage::Unavailable => None,
        }
    }
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`](crate::error::Error::Io))
/// - The image format is invalid or unsupported
///   ([`Error::Image`](crate::error::Error::Image))
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let img_bytes = fs::read(path.as_ref())?;
    let img = image_rs::load_from_memory(&img_bytes)?;

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

/// Generates the demo product picture: a two-axis color gradient crossed by
/// a fine grid and a diagonal band.
#[must_use]
pub fn demo_swatch(size: u32) -> ImageData {
    let size = size.max(1);
    let swatch = RgbaImage::from_fn(size, size, |x, y| {
        if x % SWATCH_GRID == 0 || y % SWATCH_GRID == 0 {
            return Rgba([30, 30, 40, 255]);
        }
        let band = (x + y) % (SWATCH_GRID * 4) < SWATCH_GRID / 3;
        let r = channel(x, size);
        let g = channel(y, size);
        let b = if band { 240 } else { 150 };
        Rgba([r, g, b, 255])
    });
    ImageData::from_rgba(size, size, swatch.into_vec())
}

fn channel(position: u32, size: u32) -> u8 {
    let scaled = u64::from(position) * 255 / u64::from(size);
    u8::try_from(scaled).unwrap_or(u8::MAX)
}
