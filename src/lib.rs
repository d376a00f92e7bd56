// SPDX-License-Identifier: MPL-2.0
//! `product_zoom` is a demo storefront page built with the Iced GUI framework.
//!
//! Its centerpiece is a hover-to-zoom product image viewer: a preview box
//! follows the pointer over the thumbnail while a floating magnifier shows
//! the matching region enlarged next to it. The page also demonstrates
//! internationalization with Fluent and read-only TOML settings.

#![doc(html_root_url = "https://docs.rs/product_zoom/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
mod test_utils;
