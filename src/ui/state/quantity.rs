// SPDX-License-Identifier: MPL-2.0
//! Cart quantity domain type.
//!
//! This module provides a type-safe wrapper for the quantity selected in the
//! storefront stepper.

use crate::config::{MAX_QUANTITY, MIN_QUANTITY};

/// Number of items to add to the cart.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–99).
///
/// # Example
///
/// ```
/// use product_zoom::ui::state::Quantity;
///
/// let quantity = Quantity::new(5);
/// assert_eq!(quantity.value(), 5);
///
/// // Values outside range are clamped
/// let too_high = Quantity::new(500);
/// assert_eq!(too_high.value(), 99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(u32);

impl Quantity {
    /// Creates a new quantity, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(MIN_QUANTITY, MAX_QUANTITY))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_QUANTITY
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_QUANTITY
    }

    /// One more item, saturating at the maximum.
    #[must_use]
    pub fn increment(self) -> Self {
        Self::new(self.0.saturating_add(1))
    }

    /// One less item, saturating at the minimum.
    #[must_use]
    pub fn decrement(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(MIN_QUANTITY)
    }
}
