// SPDX-License-Identifier: MPL-2.0
//! Tile data: decoded pixels, animation frames and placement.

use bytes::Bytes;
use iced::widget::image;
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Identity token handed out by a [`TileGrid`](super::TileGrid).
///
/// Ids increase monotonically and are never reused within one grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(u64);

impl TileId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile#{}", self.0)
    }
}

/// A decoded still image ready for display.
#[derive(Debug, Clone)]
pub struct StillImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Same buffer the handle renders from, kept for clipboard export.
    rgba_bytes: Bytes,
}

impl StillImage {
    /// Creates a new `StillImage` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Bytes::from(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.clone());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
        }
    }

    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Whether two values refer to the same decoded pixels.
    #[must_use]
    pub fn same_pixels(&self, other: &Self) -> bool {
        self.rgba_bytes.as_ptr() == other.rgba_bytes.as_ptr()
            && self.rgba_bytes.len() == other.rgba_bytes.len()
    }
}

/// One frame of an animation together with how long it stays on screen.
#[derive(Debug, Clone)]
pub struct AnimationFrame {
    pub image: StillImage,
    pub delay: Duration,
}

/// A looping frame sequence decoded from an animated GIF.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<AnimationFrame>,
    current: usize,
    shown_at: Option<Instant>,
}

impl Animation {
    /// Returns `None` when `frames` is empty.
    #[must_use]
    pub fn new(frames: Vec<AnimationFrame>) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        Some(Self {
            frames,
            current: 0,
            shown_at: None,
        })
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_frame(&self) -> &StillImage {
        &self.frames[self.current].image
    }

    /// Dimensions of the first frame.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        let first = &self.frames[0].image;
        (first.width, first.height)
    }

    /// Moves to the next frame once the current frame's delay has elapsed.
    ///
    /// The first call only starts the clock. Returns `true` when the
    /// displayed frame changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        let Some(shown_at) = self.shown_at else {
            self.shown_at = Some(now);
            return false;
        };

        if now.saturating_duration_since(shown_at) < self.frames[self.current].delay {
            return false;
        }

        self.current = (self.current + 1) % self.frames.len();
        self.shown_at = Some(now);
        true
    }
}

#[derive(Debug, Clone)]
pub enum TileContent {
    Still(StillImage),
    Animated(Animation),
}

impl TileContent {
    #[must_use]
    pub fn is_animated(&self) -> bool {
        matches!(self, Self::Animated(_))
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Still(still) => (still.width, still.height),
            Self::Animated(animation) => animation.dimensions(),
        }
    }

    /// Image currently on screen.
    #[must_use]
    pub fn visible(&self) -> &StillImage {
        match self {
            Self::Still(still) => still,
            Self::Animated(animation) => animation.current_frame(),
        }
    }

    #[must_use]
    pub fn as_still(&self) -> Option<&StillImage> {
        match self {
            Self::Still(still) => Some(still),
            Self::Animated(_) => None,
        }
    }
}

impl From<StillImage> for TileContent {
    fn from(still: StillImage) -> Self {
        Self::Still(still)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Portrait only when strictly taller than wide.
    #[must_use]
    pub fn of(width: u32, height: u32) -> Self {
        if height > width {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

/// Grid position. Rows start at 1, columns at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSlot {
    pub row: usize,
    pub column: usize,
}

impl GridSlot {
    pub const FIRST: Self = Self { row: 1, column: 0 };

    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl Default for GridSlot {
    fn default() -> Self {
        Self::FIRST
    }
}

#[derive(Debug, Clone)]
pub struct Tile {
    pub id: TileId,
    pub content: TileContent,
    /// Image shown before the most recent swap.
    pub previous: Option<StillImage>,
    /// File this tile represents. `None` for clipboard pastes.
    pub source: Option<PathBuf>,
    pub orientation: Orientation,
    pub slot: GridSlot,
}

impl Tile {
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.content.is_animated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(width: u32, height: u32) -> StillImage {
        StillImage::from_rgba(width, height, vec![0; (width * height * 4) as usize])
    }

    fn animation(delays_ms: &[u64]) -> Animation {
        let frames = delays_ms
            .iter()
            .map(|&ms| AnimationFrame {
                image: pixel(2, 1),
                delay: Duration::from_millis(ms),
            })
            .collect();
        Animation::new(frames).expect("frames are not empty")
    }

    #[test]
    fn orientation_is_portrait_only_when_taller() {
        assert_eq!(Orientation::of(100, 200), Orientation::Portrait);
        assert_eq!(Orientation::of(200, 100), Orientation::Landscape);
        assert_eq!(Orientation::of(100, 100), Orientation::Landscape);
    }

    #[test]
    fn empty_animation_is_rejected() {
        assert!(Animation::new(Vec::new()).is_none());
    }

    #[test]
    fn animation_waits_for_frame_delay() {
        let mut anim = animation(&[100, 50]);
        let start = Instant::now();

        assert!(!anim.advance(start));
        assert!(!anim.advance(start + Duration::from_millis(30)));
        assert!(anim.advance(start + Duration::from_millis(100)));
        assert_eq!(anim.current_index(), 1);
    }

    #[test]
    fn animation_wraps_to_first_frame() {
        let mut anim = animation(&[10, 10]);
        let start = Instant::now();
        anim.advance(start);
        anim.advance(start + Duration::from_millis(10));
        anim.advance(start + Duration::from_millis(20));
        assert_eq!(anim.current_index(), 0);
    }

    #[test]
    fn clones_share_pixels() {
        let a = pixel(4, 4);
        let b = a.clone();
        assert!(a.same_pixels(&b));
        assert!(!a.same_pixels(&pixel(4, 4)));
    }

    #[test]
    fn handle_renders_from_the_stored_buffer() {
        let pixels: Vec<u8> = (0..16).collect();
        let still = StillImage::from_rgba(2, 2, pixels.clone());
        let image::Handle::Rgba { pixels: shown, .. } = &still.handle else {
            panic!("expected an RGBA handle");
        };
        assert_eq!(shown.as_ptr(), still.rgba_bytes().as_ptr());
        assert_eq!(still.rgba_bytes(), pixels.as_slice());
    }

    #[test]
    fn tile_id_display_includes_number() {
        assert_eq!(TileId::new(7).to_string(), "tile#7");
    }
}
