// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom viewer**: Thumbnail geometry, magnification and fade timing
//! - **Storefront**: Quantity stepper bounds and add-to-cart animation

// ==========================================================================
// Zoom Viewer Defaults
// ==========================================================================

/// Default thumbnail edge length in logical pixels.
pub const DEFAULT_DIMENSION: f32 = 400.0;

/// Default preview box edge length drawn over the thumbnail.
pub const DEFAULT_PREVIEW_SIZE: f32 = 150.0;

/// Default magnification factor of the floating overlay.
pub const DEFAULT_ZOOM_SCALE: f32 = 3.0;

/// Default fade-in/fade-out duration (in milliseconds).
pub const DEFAULT_ZOOM_ANIMATION_MS: u64 = 200;

/// Default corner radius of the thumbnail and magnifier viewports.
pub const DEFAULT_CORNER_RADIUS: f32 = 8.0;

/// Whether the preview box is drawn over the thumbnail by default.
pub const DEFAULT_SHOW_PREVIEW_AREA: bool = true;

/// Animation tick interval while a transition is running (in milliseconds).
pub const ANIMATION_TICK_MS: u64 = 16;

// ==========================================================================
// Storefront Defaults
// ==========================================================================

/// Smallest quantity the stepper allows.
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity the stepper allows.
pub const MAX_QUANTITY: u32 = 99;

/// Duration of the cart icon slide-in (in milliseconds).
pub const ADD_TO_CART_ANIMATION_MS: u64 = 300;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom geometry validation
    assert!(DEFAULT_DIMENSION > 0.0);
    assert!(DEFAULT_PREVIEW_SIZE > 0.0);
    assert!(DEFAULT_PREVIEW_SIZE <= DEFAULT_DIMENSION);
    assert!(DEFAULT_ZOOM_SCALE > 1.0);
    assert!(DEFAULT_CORNER_RADIUS >= 0.0);
    assert!(ANIMATION_TICK_MS > 0);

    // Stepper validation
    assert!(MIN_QUANTITY > 0);
    assert!(MAX_QUANTITY >= MIN_QUANTITY);
};
