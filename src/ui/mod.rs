// SPDX-License-Identifier: MPL-2.0
//! User interface: screens, widgets, state machines and styling.

pub mod components;
pub mod design_tokens;
pub mod floating_layer;
pub mod product_details;
pub mod state;
pub mod styles;
pub mod theming;
pub mod zoom_viewer;
