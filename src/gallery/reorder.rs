// SPDX-License-Identifier: MPL-2.0
//! Drag-to-swap state machine for tiles.
//!
//! `Idle -> Engaged(origin) -> Engaged(origin, ..) -> Idle`. A press on a
//! still tile starts a gesture and engages it; every tile the pointer enters
//! is appended once. Dropping produces a [`Swap`] only when a second, distinct
//! tile was engaged and the drop lands on one of the engaged tiles. When the
//! pointer crosses several tiles the first engaged tile stays the origin.

use super::grid::Swap;
use super::tile::{StillImage, Tile, TileId};
use crate::input::{DragTarget, InputHandler, PointerEvent};

#[derive(Debug, Clone)]
pub enum DragOutcome {
    Accepted,
    Rejected,
    Swap(Swap),
    /// Gesture ended without a swap.
    Cancelled,
}

#[derive(Debug, Clone)]
struct Gesture {
    payload: StillImage,
    engaged: Vec<TileId>,
}

#[derive(Debug, Clone, Default)]
pub struct ReorderController {
    gesture: Option<Gesture>,
}

impl ReorderController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a gesture on `origin`. Animated tiles are not draggable.
    pub fn begin(&mut self, origin: &Tile) -> DragOutcome {
        let Some(payload) = origin.content.as_still() else {
            return DragOutcome::Rejected;
        };
        self.gesture = Some(Gesture {
            payload: payload.clone(),
            engaged: vec![origin.id],
        });
        DragOutcome::Accepted
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Engaged tiles in the order they were entered.
    #[must_use]
    pub fn engaged(&self) -> &[TileId] {
        self.gesture.as_ref().map_or(&[][..], |g| g.engaged.as_slice())
    }

    #[must_use]
    pub fn origin(&self) -> Option<TileId> {
        self.engaged().first().copied()
    }

    pub fn cancel(&mut self) {
        self.gesture = None;
    }
}

impl InputHandler for ReorderController {
    type Effect = DragOutcome;

    fn on_drag_enter(&mut self, target: DragTarget) -> Option<DragOutcome> {
        if target.animated {
            return Some(DragOutcome::Rejected);
        }
        let Some(gesture) = self.gesture.as_mut() else {
            return Some(DragOutcome::Rejected);
        };
        if !gesture.engaged.contains(&target.id) {
            gesture.engaged.push(target.id);
        }
        Some(DragOutcome::Accepted)
    }

    fn on_drop(&mut self, target: DragTarget) -> Option<DragOutcome> {
        let gesture = self.gesture.take()?;
        let origin = gesture.engaged[0];

        let completes = !target.animated
            && gesture.engaged.len() >= 2
            && gesture.engaged.contains(&target.id)
            && origin != target.id;

        if !completes {
            tracing::debug!(target = %target.id, engaged = gesture.engaged.len(), "drop without swap");
            return Some(DragOutcome::Cancelled);
        }

        Some(DragOutcome::Swap(Swap {
            origin,
            target: target.id,
            payload: gesture.payload,
        }))
    }

    /// Release outside any tile.
    fn on_pointer_up(&mut self, _event: PointerEvent) -> Option<DragOutcome> {
        self.gesture.take().map(|_| DragOutcome::Cancelled)
    }
}
