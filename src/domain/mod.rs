// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`product`]: Storefront product record ([`Product`](product::Product),
//!   [`ImageRef`](product::ImageRef))

pub mod product;
