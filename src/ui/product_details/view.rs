// SPDX-License-Identifier: MPL-2.0
use super::{Message, State};
use crate::i18n::fluent::I18n;
use crate::media::ProductImage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::floating_layer::FloatingLayer;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, container, text, Column, Container, Row, Stack, Text},
    Color, Element, Length, Padding,
};

/// Horizontal distance the cart confirmation slides in from.
const CONFIRMATION_SLIDE: f32 = 24.0;

/// Contextual data needed to render the product details screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub layer: &'a FloatingLayer,
    pub colors: &'a ColorScheme,
}

/// Render the product details screen.
///
/// The magnifier of a mounted surface is stacked over the whole row, offset
/// by the surface's mount origin, so it covers the details column.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let viewer = state.viewer();

    let thumbnail = Column::new()
        .spacing(spacing::XS)
        .push(viewer.view().map(Message::Viewer))
        .push(zoom_hint(state, &ctx));

    let row = Row::new()
        .push(thumbnail)
        .push(details(state, &ctx))
        .width(Length::Fill);

    let mounted = viewer
        .state()
        .overlay()
        .and_then(|handle| ctx.layer.surface(handle.id()));

    let content: Element<'a, Message> = match mounted {
        Some(surface) => {
            let origin = surface.request().origin;
            let magnifier = container(viewer.magnifier(surface)).padding(Padding {
                top: origin.y,
                right: 0.0,
                bottom: 0.0,
                left: origin.x,
            });
            Stack::new().push(row).push(magnifier).into()
        }
        None => row.into(),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .into()
}

fn zoom_hint<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let key = match state.viewer().image() {
        ProductImage::Loaded(_) => "product-zoom-hint",
        ProductImage::Unavailable => "product-image-unavailable",
    };
    Text::new(ctx.i18n.tr(key))
        .size(typography::CAPTION)
        .color(ctx.colors.text_secondary)
        .into()
}

fn details<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let product = state.product();

    let breadcrumb = Text::new(ctx.i18n.tr("storefront-breadcrumb"))
        .size(typography::CAPTION)
        .color(ctx.colors.text_secondary);
    let name = Text::new(product.name.as_str())
        .size(typography::TITLE_LG)
        .color(ctx.colors.text_primary);
    let price = Text::new(
        ctx.i18n
            .tr_with_args("product-price", &[("price", product.display_price().as_str())]),
    )
    .size(typography::TITLE_MD)
    .color(ctx.colors.brand_primary);
    let description = Text::new(product.description.as_str())
        .size(typography::BODY)
        .color(ctx.colors.text_secondary);

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::MD)
        .padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: spacing::LG,
        })
        .push(breadcrumb)
        .push(name)
        .push(price)
        .push(description)
        .push(quantity_stepper(state, ctx))
        .push(
            button(text(ctx.i18n.tr("product-add-to-cart")).size(typography::BODY_LG))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary)
                .on_press(Message::AddToCart),
        )
        .push(confirmation(state, ctx))
        .into()
}

fn quantity_stepper<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let quantity = state.quantity();

    let step = |label: &'static str, message: Message, enabled: bool| {
        let button = button(text(label).size(typography::BODY_LG))
            .width(Length::Fixed(sizing::BUTTON_HEIGHT))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::secondary);
        if enabled {
            button.on_press(message)
        } else {
            button
        }
    };

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("product-quantity-label"))
                .size(typography::BODY)
                .color(ctx.colors.text_secondary),
        )
        .push(step("-", Message::DecrementQuantity, !quantity.is_min()))
        .push(
            Text::new(quantity.value().to_string())
                .size(typography::BODY_LG)
                .width(Length::Fixed(sizing::ICON_LG))
                .color(ctx.colors.text_primary),
        )
        .push(step("+", Message::IncrementQuantity, !quantity.is_max()))
        .into()
}

fn confirmation<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let Some(addition) = state.last_addition() else {
        return Row::new().into();
    };

    let progress = state.confirmation_progress();
    let color = Color {
        a: progress,
        ..ctx.colors.success
    };
    let count = addition.quantity.value().to_string();

    let content = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Text::new("✓").size(typography::BODY_LG).color(color))
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("product-added-to-cart", &[("count", count.as_str())]),
            )
            .size(typography::BODY)
            .color(color),
        );

    container(content)
        .padding(Padding {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: (1.0 - progress) * CONFIRMATION_SLIDE,
        })
        .into()
}
