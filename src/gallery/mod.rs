// SPDX-License-Identifier: MPL-2.0
//! The image tile grid: tile data, placement, drag-to-swap and decoding.

pub mod grid;
pub mod loader;
pub mod reorder;
pub mod tile;

pub use grid::{auto_column_count, GridLayout, Swap, TileGrid};
pub use loader::{is_supported_image, load_tile_content, IMAGE_EXTENSIONS};
pub use reorder::{DragOutcome, ReorderController};
pub use tile::{
    Animation, AnimationFrame, GridSlot, Orientation, StillImage, Tile, TileContent, TileId,
};
