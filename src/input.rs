// SPDX-License-Identifier: MPL-2.0
//! Explicit input dispatch shared by the window chrome and the tile grid.
//!
//! The application `update` loop is the single event source: it converts raw
//! iced events into these calls and turns the returned effects into tasks.
//! Every method defaults to "no effect" so a controller only implements the
//! gestures it cares about.

use crate::gallery::TileId;
use iced::Point;

/// A pointer event in global (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
}

impl PointerEvent {
    #[must_use]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Point::new(x, y),
        }
    }
}

/// The tile a drag gesture is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragTarget {
    pub id: TileId,
    /// Animated tiles neither start nor accept drags.
    pub animated: bool,
}

pub trait InputHandler {
    type Effect;

    fn on_pointer_down(&mut self, _event: PointerEvent) -> Option<Self::Effect> {
        None
    }

    fn on_pointer_move(&mut self, _event: PointerEvent) -> Option<Self::Effect> {
        None
    }

    fn on_pointer_up(&mut self, _event: PointerEvent) -> Option<Self::Effect> {
        None
    }

    fn on_drag_enter(&mut self, _target: DragTarget) -> Option<Self::Effect> {
        None
    }

    fn on_drop(&mut self, _target: DragTarget) -> Option<Self::Effect> {
        None
    }
}
