// SPDX-License-Identifier: MPL-2.0
//! Media loading for the storefront.

pub mod image;

pub use image::{demo_swatch, load_image, ImageData, ProductImage};
