// SPDX-License-Identifier: MPL-2.0
//! Full-size view of one tile, titled with its path and pixel dimensions.

use super::{ok_button, Action};
use crate::gallery::Tile;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, image, scrollable, Column, Row, Space, Text};
use iced::{Element, Length, Size};

/// Share of the screen the dialog may cover.
const SCREEN_FRACTION: f32 = 0.9;

/// Natural size, scaled down proportionally when wider than the screen.
#[must_use]
pub fn display_size(width: u32, height: u32, screen_width: f32) -> Size {
    let (width, height) = (width as f32, height as f32);
    if width <= screen_width || width <= 0.0 {
        return Size::new(width, height);
    }
    let scale = screen_width / width;
    Size::new(screen_width, height * scale)
}

pub fn title(tile: &Tile, i18n: &I18n) -> String {
    let (width, height) = tile.content.dimensions();
    let path = tile
        .source
        .as_ref()
        .map_or_else(|| i18n.tr("image-info-untitled"), |p| p.display().to_string());
    i18n.tr_with_args(
        "image-info-title",
        &[
            ("path", path.as_str()),
            ("width", width.to_string().as_str()),
            ("height", height.to_string().as_str()),
        ],
    )
}

pub fn view<'a>(tile: &'a Tile, i18n: &I18n, screen: Size) -> Element<'a, Action> {
    let visible = tile.content.visible();
    let size = display_size(visible.width, visible.height, screen.width * SCREEN_FRACTION);

    let picture = image(visible.handle.clone())
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height));

    let viewport = scrollable(picture)
        .direction(scrollable::Direction::Both {
            vertical: scrollable::Scrollbar::default(),
            horizontal: scrollable::Scrollbar::default(),
        })
        .width(Length::Shrink)
        .height(Length::Shrink);

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title(tile, i18n)).size(typography::BODY))
        .push(
            container(viewport)
                .max_width(screen.width * SCREEN_FRACTION)
                .max_height(screen.height * SCREEN_FRACTION - 120.0),
        )
        .push(
            Row::new()
                .push(Space::new().width(Length::Fill))
                .push(ok_button(i18n, Action::Accept)),
        );

    container(content)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{GridLayout, StillImage, TileGrid};
    use std::path::PathBuf;

    #[test]
    fn small_images_keep_natural_size() {
        assert_eq!(display_size(800, 600, 1920.0), Size::new(800.0, 600.0));
    }

    #[test]
    fn wide_images_scale_to_screen_width() {
        let size = display_size(3840, 2160, 1920.0);
        assert_eq!(size.width, 1920.0);
        assert_eq!(size.height, 1080.0);
    }

    #[test]
    fn title_contains_path_and_dimensions() {
        let mut grid = TileGrid::new(GridLayout::from_fit_width(600.0, 1920.0));
        let id = grid.add(
            StillImage::from_rgba(4, 3, vec![0; 48]).into(),
            Some(PathBuf::from("/x.png")),
        );
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        let tile = grid.get(id).expect("tile exists");
        assert_eq!(title(tile, &i18n), "/x.png  4*3 pixels");
    }
}
