// SPDX-License-Identifier: MPL-2.0
//! Product details screen: zoomable picture, price, quantity stepper and
//! add-to-cart action.

mod view;

pub use view::{view, ViewContext};

use crate::config::ADD_TO_CART_ANIMATION_MS;
use crate::domain::product::Product;
use crate::ui::state::{Quantity, Transition};
use crate::ui::zoom_viewer::{self, OverlayHost, ZoomViewer};
use std::time::{Duration, Instant};

/// Messages emitted by the product details screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Viewer(zoom_viewer::Message),
    IncrementQuantity,
    DecrementQuantity,
    AddToCart,
    Tick,
}

/// A cart addition the screen is confirming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartAddition {
    pub quantity: Quantity,
}

#[derive(Debug)]
pub struct State {
    product: Product,
    viewer: ZoomViewer,
    quantity: Quantity,
    last_addition: Option<CartAddition>,
    /// Slides the confirmation in after each addition.
    confirmation: Transition,
}

impl State {
    #[must_use]
    pub fn new(product: Product, viewer: ZoomViewer) -> Self {
        Self {
            product,
            viewer,
            quantity: Quantity::default(),
            last_addition: None,
            confirmation: Transition::new(Duration::from_millis(ADD_TO_CART_ANIMATION_MS)),
        }
    }

    pub fn update<H: OverlayHost>(&mut self, message: Message, now: Instant, host: &mut H) {
        match message {
            Message::Viewer(msg) => self.viewer.update(msg, now, host),
            Message::IncrementQuantity => self.quantity = self.quantity.increment(),
            Message::DecrementQuantity => self.quantity = self.quantity.decrement(),
            Message::AddToCart => {
                tracing::info!(
                    product = %self.product.name,
                    quantity = self.quantity.value(),
                    unit_price = self.product.price,
                    "added to cart"
                );
                self.last_addition = Some(CartAddition {
                    quantity: self.quantity,
                });
                let _ = self.confirmation.restart(now);
            }
            Message::Tick => {
                if self.viewer.is_animating() {
                    self.viewer.update(zoom_viewer::Message::Tick, now, host);
                }
                if self.confirmation.is_animating() {
                    let _ = self.confirmation.tick(now);
                }
            }
        }
    }

    /// Releases everything mounted on `host`.
    pub fn teardown<H: OverlayHost>(&mut self, host: &mut H) {
        self.viewer.teardown(host);
    }

    /// Returns true while any animation needs frame ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.viewer.is_animating() || self.confirmation.is_animating()
    }

    #[must_use]
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub fn viewer(&self) -> &ZoomViewer {
        &self.viewer
    }

    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    #[must_use]
    pub fn last_addition(&self) -> Option<CartAddition> {
        self.last_addition
    }

    /// Slide-in progress of the cart confirmation.
    #[must_use]
    pub fn confirmation_progress(&self) -> f32 {
        self.confirmation.progress()
    }
}
