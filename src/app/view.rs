// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::floating_layer::FloatingLayer;
use crate::ui::product_details;
use crate::ui::theming::ColorScheme;
use iced::Element;

/// Contextual data needed to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub details: &'a product_details::State,
    pub layer: &'a FloatingLayer,
    pub colors: &'a ColorScheme,
}

/// Renders the storefront page.
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    product_details::view(
        ctx.details,
        product_details::ViewContext {
            i18n: ctx.i18n,
            layer: ctx.layer,
            colors: ctx.colors,
        },
    )
    .map(Message::Details)
}
