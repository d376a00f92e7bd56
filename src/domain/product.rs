// SPDX-License-Identifier: MPL-2.0
//! Product record shown on the storefront.

use std::path::PathBuf;

/// Where a product image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Image file on disk.
    Path(PathBuf),
    /// Built-in generated swatch, used when no catalogue photo is configured.
    DemoSwatch,
}

/// Immutable product record.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub description: String,
    /// Unit price in the store currency.
    pub price: f64,
    pub image: ImageRef,
}

impl Product {
    /// The product the demo storefront presents.
    #[must_use]
    pub fn demo(image: ImageRef) -> Self {
        Self {
            name: "Aurora Field Backpack".to_string(),
            description: "Water-resistant 28 L daypack with a padded laptop sleeve, \
                          hand-stitched leather pulls and a lifetime repair warranty."
                .to_string(),
            price: 129.90,
            image,
        }
    }

    /// Price rounded to cents, as displayed.
    #[must_use]
    pub fn display_price(&self) -> String {
        format!("{:.2}", self.price)
    }
}
