// SPDX-License-Identifier: MPL-2.0
//! Rendering of the tile grid.
//!
//! Each tile is wrapped in a `mouse_area`: pressing starts a drag gesture,
//! entering reports the tile to the reorder controller and a right click
//! opens the context menu. The hovered tile gets a highlight border and a
//! remove button.

use crate::config::defaults::TILE_SPACING;
use crate::gallery::{Tile, TileGrid, TileId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::title_bar::menu_item;
use iced::widget::{
    button, container, image, mouse_area, scrollable, stack, Column, Container, Row, Text,
};
use iced::{alignment, mouse, ContentFit, Element, Length, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pressed(TileId),
    Entered(TileId),
    Exited(TileId),
    Remove(TileId),
    OpenContextMenu(TileId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    Copy(TileId),
    ImageInfo(TileId),
    OpenFolder(TileId),
}

pub struct ViewContext<'a> {
    pub grid: &'a TileGrid,
    pub i18n: &'a I18n,
    pub hovered: Option<TileId>,
    /// Tiles touched by the drag in progress.
    pub engaged: &'a [TileId],
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if ctx.grid.is_empty() {
        return Container::new(Text::new(ctx.i18n.tr("empty-hint")).size(typography::BODY))
            .center(Length::Fill)
            .style(styles::container::gallery)
            .into();
    }

    let rows = ctx.grid.rows().map(|row| -> Element<'a, Message> {
        Row::with_children(row.iter().map(|tile| view_tile(ctx, tile)))
            .spacing(TILE_SPACING)
            .into()
    });

    let column = Column::with_children(rows)
        .spacing(TILE_SPACING)
        .padding(TILE_SPACING);

    Container::new(
        scrollable(column)
            .direction(scrollable::Direction::Both {
                vertical: scrollable::Scrollbar::default(),
                horizontal: scrollable::Scrollbar::default(),
            })
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .style(styles::container::gallery)
    .into()
}

fn view_tile<'a>(ctx: &ViewContext<'a>, tile: &'a Tile) -> Element<'a, Message> {
    let size = ctx.grid.tile_size(tile.orientation);
    let hovered = ctx.hovered == Some(tile.id);
    let highlighted = hovered || ctx.engaged.contains(&tile.id);

    let picture = image(tile.content.visible().handle.clone())
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .content_fit(ContentFit::Contain);

    let framed = Container::new(picture).style(styles::container::tile(highlighted));

    let content: Element<'a, Message> = if hovered && ctx.engaged.is_empty() {
        let remove = button(icons::tinted(icons::cross(), palette::WHITE))
            .on_press(Message::Remove(tile.id))
            .width(Length::Fixed(sizing::TILE_REMOVE_BUTTON))
            .height(Length::Fixed(sizing::TILE_REMOVE_BUTTON))
            .padding(spacing::XXS + 2.0)
            .style(styles::button::tile_remove);
        let corner = Container::new(remove)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::XXS);
        stack![framed, corner].into()
    } else {
        framed.into()
    };

    let interaction = if tile.is_animated() {
        mouse::Interaction::Pointer
    } else if ctx.engaged.is_empty() {
        mouse::Interaction::Grab
    } else {
        mouse::Interaction::Grabbing
    };

    mouse_area(content)
        .on_press(Message::Pressed(tile.id))
        .on_right_press(Message::OpenContextMenu(tile.id))
        .on_enter(Message::Entered(tile.id))
        .on_exit(Message::Exited(tile.id))
        .interaction(interaction)
        .into()
}

/// Context menu for a tile, placed at `position` in window coordinates.
pub fn context_menu<'a>(tile: &Tile, i18n: &I18n, position: Point) -> Element<'a, ContextAction> {
    let mut items = Column::new().spacing(spacing::XXS);
    if tile.content.as_still().is_some() {
        items = items.push(menu_item(i18n.tr("tile-copy"), ContextAction::Copy(tile.id), false));
    }
    items = items.push(menu_item(
        i18n.tr("tile-image-info"),
        ContextAction::ImageInfo(tile.id),
        false,
    ));
    if tile.source.is_some() {
        items = items.push(menu_item(
            i18n.tr("tile-open-folder"),
            ContextAction::OpenFolder(tile.id),
            false,
        ));
    }

    let menu = container(items)
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .padding(spacing::XXS)
        .style(styles::container::panel);

    Container::new(menu)
        .padding(iced::Padding {
            top: position.y,
            left: position.x,
            ..iced::Padding::ZERO
        })
        .into()
}
