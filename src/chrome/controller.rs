// SPDX-License-Identifier: MPL-2.0
//! Move/resize state machine for the borderless main window.

use super::zone::{classify, CursorGlyph, CursorZone};
use super::WindowBounds;
use crate::config::defaults::{BORDER_TOLERANCE, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::input::{InputHandler, PointerEvent};
use iced::{Point, Size, Vector};

/// Side effects the host window must perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChromeEffect {
    SetCursor(CursorGlyph),
    SetBounds(WindowBounds),
    CapturePointer,
    ReleasePointer,
}

/// State of a press that has not been released yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    /// Zone under the pointer when the button went down.
    pub zone: CursorZone,
    /// Pointer position minus window origin at press time.
    pub anchor: Vector,
}

#[derive(Debug, Clone)]
pub struct ChromeController {
    bounds: WindowBounds,
    min_size: Size,
    tolerance: f32,
    zone: CursorZone,
    gesture: Option<DragGesture>,
}

impl Default for ChromeController {
    fn default() -> Self {
        Self::new(
            WindowBounds::default(),
            Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
        )
    }
}

impl ChromeController {
    #[must_use]
    pub fn new(bounds: WindowBounds, min_size: Size) -> Self {
        Self {
            bounds,
            min_size,
            tolerance: BORDER_TOLERANCE,
            zone: CursorZone::None,
            gesture: None,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> WindowBounds {
        self.bounds
    }

    pub fn set_position(&mut self, origin: Point) {
        self.bounds = self.bounds.moved_to(origin);
    }

    pub fn set_size(&mut self, size: Size) {
        self.bounds.width = size.width;
        self.bounds.height = size.height;
    }

    #[must_use]
    pub fn zone(&self) -> CursorZone {
        self.zone
    }

    #[must_use]
    pub fn gesture(&self) -> Option<DragGesture> {
        self.gesture
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.gesture.is_some_and(|g| g.zone.is_border())
    }
}

impl InputHandler for ChromeController {
    type Effect = Vec<ChromeEffect>;

    fn on_pointer_down(&mut self, event: PointerEvent) -> Option<Self::Effect> {
        self.zone = classify(event.position, &self.bounds, self.tolerance);
        let anchor = event.position - self.bounds.top_left();
        self.gesture = Some(DragGesture {
            zone: self.zone,
            anchor,
        });

        self.zone.is_border().then(|| vec![ChromeEffect::CapturePointer])
    }

    fn on_pointer_move(&mut self, event: PointerEvent) -> Option<Self::Effect> {
        let Some(gesture) = self.gesture else {
            self.zone = classify(event.position, &self.bounds, self.tolerance);
            return Some(vec![ChromeEffect::SetCursor(self.zone.glyph())]);
        };

        let next = if gesture.zone.is_border() {
            resize(&self.bounds, gesture.zone, event.position, self.min_size)
        } else {
            self.bounds.moved_to(event.position - gesture.anchor)
        };

        if next == self.bounds {
            return None;
        }
        self.bounds = next;
        Some(vec![ChromeEffect::SetBounds(next)])
    }

    fn on_pointer_up(&mut self, _event: PointerEvent) -> Option<Self::Effect> {
        let gesture = self.gesture.take()?;
        self.zone = CursorZone::None;

        let mut effects = Vec::with_capacity(2);
        if gesture.zone.is_border() {
            effects.push(ChromeEffect::ReleasePointer);
        }
        effects.push(ChromeEffect::SetCursor(CursorGlyph::Arrow));
        Some(effects)
    }
}

/// Computes the rectangle produced by dragging `zone` to `pointer`.
///
/// Only the edges implied by the zone move. A moving edge stops where the
/// window reaches `min_size` instead of crossing it.
#[must_use]
pub fn resize(
    bounds: &WindowBounds,
    zone: CursorZone,
    pointer: Point,
    min_size: Size,
) -> WindowBounds {
    let mut top_left = bounds.top_left();
    let mut bottom_right = bounds.bottom_right();

    if zone.moves_left() {
        top_left.x = pointer.x.min(bottom_right.x - min_size.width);
    }
    if zone.moves_right() {
        bottom_right.x = pointer.x.max(top_left.x + min_size.width);
    }
    if zone.moves_top() {
        top_left.y = pointer.y.min(bottom_right.y - min_size.height);
    }
    if zone.moves_bottom() {
        bottom_right.y = pointer.y.max(top_left.y + min_size.height);
    }

    WindowBounds::from_corners(top_left, bottom_right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn controller() -> ChromeController {
        ChromeController::new(
            WindowBounds::new(100.0, 100.0, 800.0, 600.0),
            Size::new(800.0, 450.0),
        )
    }

    #[test]
    fn hover_updates_cursor_without_touching_bounds() {
        let mut chrome = controller();
        let effects = chrome.on_pointer_move(PointerEvent::at(100.0, 400.0));
        assert_eq!(
            effects,
            Some(vec![ChromeEffect::SetCursor(CursorGlyph::ResizeHorizontal)])
        );
        assert_eq!(chrome.bounds(), WindowBounds::new(100.0, 100.0, 800.0, 600.0));
    }

    #[test]
    fn press_on_border_captures_pointer() {
        let mut chrome = controller();
        let effects = chrome.on_pointer_down(PointerEvent::at(899.5, 699.5));
        assert_eq!(effects, Some(vec![ChromeEffect::CapturePointer]));
        assert!(chrome.is_resizing());
    }

    #[test]
    fn press_inside_moves_window_by_anchor() {
        let mut chrome = controller();
        assert_eq!(chrome.on_pointer_down(PointerEvent::at(150.0, 120.0)), None);

        let effects = chrome.on_pointer_move(PointerEvent::at(250.0, 220.0));
        let expected = WindowBounds::new(200.0, 200.0, 800.0, 600.0);
        assert_eq!(effects, Some(vec![ChromeEffect::SetBounds(expected)]));
        assert_eq!(chrome.bounds(), expected);
    }

    #[test]
    fn release_after_resize_releases_capture_and_resets_cursor() {
        let mut chrome = controller();
        chrome.on_pointer_down(PointerEvent::at(100.0, 400.0));
        let effects = chrome.on_pointer_up(PointerEvent::at(90.0, 400.0));
        assert_eq!(
            effects,
            Some(vec![
                ChromeEffect::ReleasePointer,
                ChromeEffect::SetCursor(CursorGlyph::Arrow)
            ])
        );
        assert!(chrome.gesture().is_none());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut chrome = controller();
        assert_eq!(chrome.on_pointer_up(PointerEvent::at(10.0, 10.0)), None);
    }

    #[test]
    fn top_left_drag_clamps_both_axes_at_minimum() {
        let mut chrome = controller();
        chrome.on_pointer_down(PointerEvent::at(100.0, 100.0));
        chrome.on_pointer_move(PointerEvent::at(750.0, 500.0));

        let bounds = chrome.bounds();
        assert_eq!(bounds.top_left(), Point::new(100.0, 250.0));
        assert_eq!(bounds.bottom_right(), Point::new(900.0, 700.0));
        assert_eq!(bounds.size(), Size::new(800.0, 450.0));
    }

    #[test]
    fn left_edge_grows_window_when_dragged_outwards() {
        let bounds = WindowBounds::new(100.0, 100.0, 800.0, 600.0);
        let next = resize(&bounds, CursorZone::Left, Point::new(40.0, 300.0), Size::new(800.0, 450.0));
        assert_eq!(next, WindowBounds::new(40.0, 100.0, 860.0, 600.0));
    }

    #[test]
    fn bottom_right_only_changes_size() {
        let bounds = WindowBounds::new(100.0, 100.0, 800.0, 600.0);
        let next = resize(
            &bounds,
            CursorZone::BottomRight,
            Point::new(1000.0, 800.0),
            Size::new(800.0, 450.0),
        );
        assert_eq!(next, WindowBounds::new(100.0, 100.0, 900.0, 700.0));
    }

    #[test]
    fn right_edge_stops_at_minimum_width() {
        let bounds = WindowBounds::new(100.0, 100.0, 900.0, 600.0);
        let next = resize(&bounds, CursorZone::Right, Point::new(300.0, 300.0), Size::new(800.0, 450.0));
        assert_eq!(next.width, 800.0);
        assert_eq!(next.x, 100.0);
    }

    #[test]
    fn each_zone_moves_only_its_own_edges() {
        let bounds = WindowBounds::new(100.0, 100.0, 800.0, 600.0);
        let min = Size::new(800.0, 450.0);
        // Off-axis pointer coordinates differ from every edge.
        let cases = [
            (CursorZone::Left, (50.0, 400.0), (50.0, 100.0, 850.0, 600.0)),
            (CursorZone::Right, (950.0, 400.0), (100.0, 100.0, 850.0, 600.0)),
            (CursorZone::Up, (500.0, 50.0), (100.0, 50.0, 800.0, 650.0)),
            (CursorZone::Down, (500.0, 750.0), (100.0, 100.0, 800.0, 650.0)),
            (CursorZone::TopLeft, (50.0, 50.0), (50.0, 50.0, 850.0, 650.0)),
            (CursorZone::TopRight, (950.0, 50.0), (100.0, 50.0, 850.0, 650.0)),
            (CursorZone::BottomLeft, (50.0, 750.0), (50.0, 100.0, 850.0, 650.0)),
            (CursorZone::BottomRight, (950.0, 750.0), (100.0, 100.0, 850.0, 650.0)),
        ];

        for (zone, (px, py), (x, y, width, height)) in cases {
            let next = resize(&bounds, zone, Point::new(px, py), min);
            assert_eq!(next, WindowBounds::new(x, y, width, height), "{zone:?}");
        }
    }

    #[test]
    fn top_right_drag_inwards_clamps_right_and_top() {
        let bounds = WindowBounds::new(100.0, 100.0, 800.0, 600.0);
        let next = resize(
            &bounds,
            CursorZone::TopRight,
            Point::new(300.0, 500.0),
            Size::new(800.0, 450.0),
        );
        assert_eq!(next, WindowBounds::new(100.0, 250.0, 800.0, 450.0));
        assert_eq!(next.bottom(), bounds.bottom());
    }

    #[test]
    fn bottom_left_drag_inwards_clamps_left_and_bottom() {
        let bounds = WindowBounds::new(100.0, 100.0, 800.0, 600.0);
        let next = resize(
            &bounds,
            CursorZone::BottomLeft,
            Point::new(750.0, 200.0),
            Size::new(800.0, 450.0),
        );
        assert_eq!(next, WindowBounds::new(100.0, 100.0, 800.0, 450.0));
        assert_eq!(next.right(), bounds.right());
    }

    fn any_zone() -> impl Strategy<Value = CursorZone> {
        prop_oneof![
            Just(CursorZone::Left),
            Just(CursorZone::Right),
            Just(CursorZone::Up),
            Just(CursorZone::Down),
            Just(CursorZone::TopLeft),
            Just(CursorZone::TopRight),
            Just(CursorZone::BottomLeft),
            Just(CursorZone::BottomRight),
        ]
    }

    proptest! {
        #[test]
        fn resize_never_goes_below_minimum(
            zone in any_zone(),
            px in -3000.0f32..3000.0,
            py in -3000.0f32..3000.0,
        ) {
            let bounds = WindowBounds::new(100.0, 100.0, 1000.0, 700.0);
            let min = Size::new(800.0, 450.0);
            let next = resize(&bounds, zone, Point::new(px, py), min);
            prop_assert!(next.width >= min.width);
            prop_assert!(next.height >= min.height);
        }
    }
}
