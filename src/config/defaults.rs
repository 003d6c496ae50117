// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Smallest width the custom chrome lets the window shrink to.
pub const MIN_WINDOW_WIDTH: f32 = 800.0;

/// Smallest height the custom chrome lets the window shrink to.
pub const MIN_WINDOW_HEIGHT: f32 = 450.0;

/// Width of the band along each window edge that starts a resize.
pub const BORDER_TOLERANCE: f32 = 1.0;

/// Screen width assumed until the monitor size is known.
pub const FALLBACK_SCREEN_WIDTH: f32 = 1920.0;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default tile width for landscape images.
pub const DEFAULT_FIT_WIDTH: u32 = 600;

/// Smallest tile width accepted by the settings dialog.
pub const MIN_FIT_WIDTH: u32 = 100;

/// Largest tile width accepted by the settings dialog.
pub const MAX_FIT_WIDTH: u32 = 2000;

/// Tile height is the tile width times this ratio (golden ratio conjugate).
pub const TILE_ASPECT_RATIO: f32 = 0.618;

/// Smallest fixed column count.
pub const MIN_COLUMN_COUNT: u32 = 1;

/// Largest fixed column count.
pub const MAX_COLUMN_COUNT: u32 = 20;

/// Gap between tiles, in logical pixels.
pub const TILE_SPACING: f32 = 8.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Tick interval for advancing animated GIF frames (milliseconds).
pub const ANIMATION_TICK_MS: u64 = 30;

/// Delay used for GIF frames that declare a zero delay (milliseconds).
pub const DEFAULT_FRAME_DELAY_MS: u64 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_width_default_is_within_range() {
        assert!((MIN_FIT_WIDTH..=MAX_FIT_WIDTH).contains(&DEFAULT_FIT_WIDTH));
    }

    #[test]
    fn minimum_window_is_landscape() {
        assert!(MIN_WINDOW_WIDTH > MIN_WINDOW_HEIGHT);
    }
}
