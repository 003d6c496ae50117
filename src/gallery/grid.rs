// SPDX-License-Identifier: MPL-2.0
//! Row-major tile container.
//!
//! Tiles are kept in slot order. Every tile sits at `(row, column)` derived
//! from its position in that order and the current column count, so removing
//! a tile or changing the layout triggers a full [`TileGrid::reflow`] and no
//! gaps ever remain.

use super::tile::{GridSlot, Orientation, StillImage, Tile, TileContent, TileId};
use crate::config::defaults::TILE_ASPECT_RATIO;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Tile dimensions and column count applied to the whole grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub fit_width: f32,
    pub fit_height: f32,
    pub column_count: usize,
}

impl GridLayout {
    /// Derives the height from the fixed aspect ratio and fits as many
    /// columns as the screen allows, never fewer than one.
    #[must_use]
    pub fn from_fit_width(fit_width: f32, screen_width: f32) -> Self {
        Self {
            fit_width,
            fit_height: fit_width * TILE_ASPECT_RATIO,
            column_count: auto_column_count(fit_width, screen_width),
        }
    }

    #[must_use]
    pub fn with_column_count(self, column_count: usize) -> Self {
        Self {
            column_count: column_count.max(1),
            ..self
        }
    }
}

/// `floor(screen_width / fit_width)`, at least 1.
#[must_use]
pub fn auto_column_count(fit_width: f32, screen_width: f32) -> usize {
    if fit_width <= 0.0 {
        return 1;
    }
    ((screen_width / fit_width).floor() as usize).max(1)
}

/// Request to exchange the content of two tiles.
#[derive(Debug, Clone)]
pub struct Swap {
    /// Tile the drag started on.
    pub origin: TileId,
    /// Tile the drag was dropped on.
    pub target: TileId,
    /// Image carried by the drag (the origin's image at press time).
    pub payload: StillImage,
}

#[derive(Debug, Clone)]
pub struct TileGrid {
    layout: GridLayout,
    tiles: Vec<Tile>,
    cursor: GridSlot,
    next_id: u64,
}

impl TileGrid {
    #[must_use]
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout: layout.with_column_count(layout.column_count),
            tiles: Vec::new(),
            cursor: GridSlot::FIRST,
            next_id: 1,
        }
    }

    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Size of a tile with the given orientation under the current layout.
    #[must_use]
    pub fn tile_size(&self, orientation: Orientation) -> Size {
        let GridLayout {
            fit_width,
            fit_height,
            ..
        } = self.layout;
        match orientation {
            Orientation::Landscape => Size::new(fit_width, fit_height),
            Orientation::Portrait => Size::new(fit_height, fit_width),
        }
    }

    /// Appends a tile at the next free slot.
    pub fn add(&mut self, content: TileContent, source: Option<PathBuf>) -> TileId {
        let id = TileId::new(self.next_id);
        self.next_id += 1;

        let (width, height) = content.dimensions();
        let slot = self.advance_cursor();
        self.tiles.push(Tile {
            id,
            content,
            previous: None,
            source,
            orientation: Orientation::of(width, height),
            slot,
        });

        tracing::debug!(%id, row = slot.row, column = slot.column, "tile added");
        id
    }

    /// Detaches a tile and closes the gap. Unknown ids return `false`.
    pub fn remove(&mut self, id: TileId) -> bool {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(%id, "remove ignored, tile not found");
            return false;
        };
        self.tiles.remove(index);
        self.reflow(self.layout);
        tracing::debug!(%id, remaining = self.tiles.len(), "tile removed");
        true
    }

    /// Re-places every tile in its current order under `layout`.
    pub fn reflow(&mut self, layout: GridLayout) {
        self.layout = layout.with_column_count(layout.column_count);
        self.tiles.sort_by_key(|tile| tile.slot);
        self.cursor = GridSlot::FIRST;

        for index in 0..self.tiles.len() {
            let slot = self.advance_cursor();
            self.tiles[index].slot = slot;
        }

        tracing::debug!(
            tiles = self.tiles.len(),
            columns = self.layout.column_count,
            "grid reflowed"
        );
    }

    /// Removes every tile and resets placement. Ids keep increasing.
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.cursor = GridSlot::FIRST;
        tracing::debug!("grid cleared");
    }

    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    /// Tiles in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Tiles grouped by row, for rendering.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunk_by(|a, b| a.slot.row == b.slot.row)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn has_animations(&self) -> bool {
        self.tiles.iter().any(Tile::is_animated)
    }

    /// Steps every animated tile. Returns `true` if any frame changed.
    pub fn advance_animations(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for tile in &mut self.tiles {
            if let TileContent::Animated(animation) = &mut tile.content {
                changed |= animation.advance(now);
            }
        }
        changed
    }

    /// Exchanges content and source paths between two still tiles.
    ///
    /// The target shows the payload and remembers its old image in
    /// `previous`; the origin shows that old image. Missing ids, identical
    /// ids and animated tiles leave the grid untouched and return `false`.
    pub fn apply_swap(&mut self, swap: Swap) -> bool {
        let (Some(origin_index), Some(target_index)) =
            (self.index_of(swap.origin), self.index_of(swap.target))
        else {
            tracing::debug!(origin = %swap.origin, target = %swap.target, "swap ignored, tile not found");
            return false;
        };

        let Ok([origin, target]) = self.tiles.get_disjoint_mut([origin_index, target_index])
        else {
            return false;
        };

        if origin.is_animated() {
            return false;
        }
        let Some(before) = target.content.as_still().cloned() else {
            return false;
        };

        target.previous = Some(before.clone());
        target.orientation = Orientation::of(swap.payload.width, swap.payload.height);
        target.content = TileContent::Still(swap.payload);
        origin.orientation = Orientation::of(before.width, before.height);
        origin.content = TileContent::Still(before);
        std::mem::swap(&mut origin.source, &mut target.source);

        tracing::info!(origin = %origin.id, target = %target.id, "tiles swapped");
        true
    }

    fn index_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.id == id)
    }

    /// Returns the current slot and moves the cursor past it.
    fn advance_cursor(&mut self) -> GridSlot {
        let slot = self.cursor;
        self.cursor.column += 1;
        if self.cursor.column == self.layout.column_count {
            self.cursor.row += 1;
            self.cursor.column = 0;
        }
        slot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn still(width: u32, height: u32) -> StillImage {
        StillImage::from_rgba(width, height, vec![0; (width * height * 4) as usize])
    }

    fn layout(columns: usize) -> GridLayout {
        GridLayout::from_fit_width(600.0, 1920.0).with_column_count(columns)
    }

    fn grid_with(count: usize, columns: usize) -> (TileGrid, Vec<TileId>) {
        let mut grid = TileGrid::new(layout(columns));
        let ids = (0..count)
            .map(|i| grid.add(still(4, 3).into(), Some(PathBuf::from(format!("/{i}.png")))))
            .collect();
        (grid, ids)
    }

    fn slots(grid: &TileGrid) -> Vec<(usize, usize)> {
        grid.iter().map(|t| (t.slot.row, t.slot.column)).collect()
    }

    #[test]
    fn layout_derives_height_and_columns() {
        let layout = GridLayout::from_fit_width(600.0, 1920.0);
        assert_eq!(layout.column_count, 3);
        assert!((layout.fit_height - 370.8).abs() < 1e-3);
    }

    #[test]
    fn column_count_never_drops_below_one() {
        assert_eq!(auto_column_count(2000.0, 1280.0), 1);
        assert_eq!(auto_column_count(0.0, 1280.0), 1);
        assert_eq!(layout(0).column_count, 1);
    }

    #[test]
    fn five_tiles_on_three_columns_wrap_to_second_row() {
        let (grid, _) = grid_with(5, 3);
        assert_eq!(slots(&grid), vec![(1, 0), (1, 1), (1, 2), (2, 0), (2, 1)]);
    }

    #[test]
    fn portrait_tiles_use_transposed_size() {
        let mut grid = TileGrid::new(layout(3));
        let id = grid.add(still(3, 4).into(), None);
        let tile = grid.get(id).expect("tile exists");

        assert_eq!(tile.orientation, Orientation::Portrait);
        let size = grid.tile_size(tile.orientation);
        assert_eq!(size.height, 600.0);
        assert!((size.width - 370.8).abs() < 1e-3);
    }

    #[test]
    fn remove_closes_gap() {
        let (mut grid, ids) = grid_with(4, 3);
        assert!(grid.remove(ids[1]));

        assert_eq!(slots(&grid), vec![(1, 0), (1, 1), (1, 2)]);
        let sources: Vec<_> = grid.iter().map(|t| t.source.clone()).collect();
        assert_eq!(
            sources,
            vec![
                Some(PathBuf::from("/0.png")),
                Some(PathBuf::from("/2.png")),
                Some(PathBuf::from("/3.png")),
            ]
        );
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let (mut grid, _) = grid_with(2, 3);
        assert!(!grid.remove(TileId::new(999)));
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let (mut grid, ids) = grid_with(2, 3);
        grid.clear();
        assert!(grid.is_empty());

        let fresh = grid.add(still(1, 1).into(), None);
        assert!(fresh > ids[1]);
        assert_eq!(grid.get(fresh).map(|t| t.slot), Some(GridSlot::FIRST));
    }

    #[test]
    fn rows_group_by_row() {
        let (grid, _) = grid_with(5, 2);
        let lengths: Vec<usize> = grid.rows().map(<[Tile]>::len).collect();
        assert_eq!(lengths, vec![2, 2, 1]);
    }

    #[test]
    fn swap_exchanges_sources_and_images() {
        let mut grid = TileGrid::new(layout(3));
        let a_image = still(4, 3);
        let b_image = still(4, 3);
        let a = grid.add(a_image.clone().into(), Some(PathBuf::from("/x.png")));
        let b = grid.add(b_image.clone().into(), Some(PathBuf::from("/y.png")));

        assert!(grid.apply_swap(Swap {
            origin: a,
            target: b,
            payload: a_image.clone(),
        }));

        let (ta, tb) = (grid.get(a).expect("a"), grid.get(b).expect("b"));
        assert_eq!(ta.source, Some(PathBuf::from("/y.png")));
        assert_eq!(tb.source, Some(PathBuf::from("/x.png")));
        assert!(tb.content.visible().same_pixels(&a_image));
        assert!(ta.content.visible().same_pixels(&b_image));
        assert!(tb.previous.as_ref().is_some_and(|p| p.same_pixels(&b_image)));
    }

    #[test]
    fn swap_with_self_or_missing_is_noop() {
        let (mut grid, ids) = grid_with(2, 3);
        let payload = still(1, 1);
        assert!(!grid.apply_swap(Swap {
            origin: ids[0],
            target: ids[0],
            payload: payload.clone(),
        }));
        assert!(!grid.apply_swap(Swap {
            origin: ids[0],
            target: TileId::new(42),
            payload,
        }));
        assert_eq!(grid.get(ids[0]).and_then(|t| t.source.clone()), Some(PathBuf::from("/0.png")));
    }

    proptest! {
        #[test]
        fn reflow_preserves_order(count in 0usize..60, before in 1usize..12, after in 1usize..12) {
            let (mut grid, ids) = grid_with(count, before);
            grid.reflow(layout(after));

            let order: Vec<TileId> = grid.iter().map(|t| t.id).collect();
            prop_assert_eq!(order, ids);
            for (index, tile) in grid.iter().enumerate() {
                prop_assert_eq!(tile.slot, GridSlot::new(1 + index / after, index % after));
            }
        }

        #[test]
        fn remove_leaves_no_gaps(count in 1usize..40, columns in 1usize..8, pick in any::<prop::sample::Index>()) {
            let (mut grid, ids) = grid_with(count, columns);
            prop_assert!(grid.remove(ids[pick.index(count)]));

            prop_assert_eq!(grid.len(), count - 1);
            for (index, tile) in grid.iter().enumerate() {
                prop_assert_eq!(tile.slot, GridSlot::new(1 + index / columns, index % columns));
            }
        }
    }
}
