// SPDX-License-Identifier: MPL-2.0
//! Checkerboard pattern drawn where a product image could not be loaded.

use crate::ui::design_tokens::palette;
use iced::widget::canvas::{Frame, Path};
use iced::{Color, Point, Rectangle, Size};

/// Tile edge length at thumbnail scale.
pub const TILE_SIZE: f32 = 20.0;
const LIGHT_TILE: Color = palette::GRAY_100;
const DARK_TILE: Color = palette::GRAY_200;

/// Fills `region` with alternating tiles of edge `tile`, at the given opacity.
///
/// Tiles are anchored at the region's top-left corner, so a region that is
/// scaled and translated produces a scaled and translated pattern.
pub fn fill(frame: &mut Frame, region: Rectangle, tile: f32, alpha: f32) {
    let tile = tile.max(1.0);
    #[allow(clippy::cast_possible_truncation)]
    let cols = ((region.width / tile).ceil() as i32).max(1);
    #[allow(clippy::cast_possible_truncation)]
    let rows = ((region.height / tile).ceil() as i32).max(1);

    for row in 0..rows {
        for col in 0..cols {
            let color = if (row + col) % 2 == 0 {
                LIGHT_TILE
            } else {
                DARK_TILE
            };
            #[allow(clippy::cast_precision_loss)]
            let origin = Point::new(region.x + col as f32 * tile, region.y + row as f32 * tile);
            let path = Path::rectangle(origin, Size::new(tile + 0.5, tile + 0.5));
            frame.fill(&path, Color { a: alpha, ..color });
        }
    }
}

const _: () = {
    assert!(TILE_SIZE > 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_different() {
        assert_ne!(LIGHT_TILE, DARK_TILE);
    }
}
