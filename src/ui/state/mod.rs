// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains reusable UI state logic separated from the widgets
//! that render it, following the principle of separation of concerns.

pub mod quantity;
pub mod transition;

// Re-export commonly used types for convenience
pub use quantity::Quantity;
pub use transition::{Direction, Settled, Status, Transition};
