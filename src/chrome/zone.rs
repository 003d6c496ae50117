// SPDX-License-Identifier: MPL-2.0
//! Hit-testing of the pointer against the window border.

use super::WindowBounds;
use iced::{mouse, Point};

/// Where the pointer sits relative to the window edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorZone {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Cursor shape shown for a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorGlyph {
    #[default]
    Arrow,
    ResizeHorizontal,
    ResizeVertical,
    /// `/` shaped, for the top-right and bottom-left corners.
    ResizeDiagonalForward,
    /// `\` shaped, for the top-left and bottom-right corners.
    ResizeDiagonalBackward,
}

impl CursorZone {
    #[must_use]
    pub fn glyph(self) -> CursorGlyph {
        match self {
            CursorZone::TopLeft | CursorZone::BottomRight => CursorGlyph::ResizeDiagonalBackward,
            CursorZone::TopRight | CursorZone::BottomLeft => CursorGlyph::ResizeDiagonalForward,
            CursorZone::Left | CursorZone::Right => CursorGlyph::ResizeHorizontal,
            CursorZone::Up | CursorZone::Down => CursorGlyph::ResizeVertical,
            CursorZone::None => CursorGlyph::Arrow,
        }
    }

    #[must_use]
    pub fn is_border(self) -> bool {
        self != CursorZone::None
    }

    /// Whether dragging this zone moves the left edge.
    #[must_use]
    pub fn moves_left(self) -> bool {
        matches!(
            self,
            CursorZone::Left | CursorZone::TopLeft | CursorZone::BottomLeft
        )
    }

    #[must_use]
    pub fn moves_right(self) -> bool {
        matches!(
            self,
            CursorZone::Right | CursorZone::TopRight | CursorZone::BottomRight
        )
    }

    #[must_use]
    pub fn moves_top(self) -> bool {
        matches!(
            self,
            CursorZone::Up | CursorZone::TopLeft | CursorZone::TopRight
        )
    }

    #[must_use]
    pub fn moves_bottom(self) -> bool {
        matches!(
            self,
            CursorZone::Down | CursorZone::BottomLeft | CursorZone::BottomRight
        )
    }
}

impl From<CursorGlyph> for mouse::Interaction {
    fn from(glyph: CursorGlyph) -> Self {
        match glyph {
            CursorGlyph::Arrow => mouse::Interaction::default(),
            CursorGlyph::ResizeHorizontal => mouse::Interaction::ResizingHorizontally,
            CursorGlyph::ResizeVertical => mouse::Interaction::ResizingVertically,
            CursorGlyph::ResizeDiagonalForward => mouse::Interaction::ResizingDiagonallyUp,
            CursorGlyph::ResizeDiagonalBackward => mouse::Interaction::ResizingDiagonallyDown,
        }
    }
}

/// Classifies `pointer` against the edges of `bounds`.
///
/// Corners are tested before edges (top-left, bottom-right, bottom-left,
/// top-right) so a corner pixel never resolves to a single edge. Edge tests
/// only look at their own axis.
#[must_use]
pub fn classify(pointer: Point, bounds: &WindowBounds, tolerance: f32) -> CursorZone {
    let Point { x, y } = pointer;

    let near_left = bounds.left() <= x && x <= bounds.left() + tolerance;
    let near_right = bounds.right() - tolerance <= x && x <= bounds.right();
    let near_top = bounds.top() <= y && y <= bounds.top() + tolerance;
    let near_bottom = bounds.bottom() - tolerance <= y && y <= bounds.bottom();

    if near_left && near_top {
        CursorZone::TopLeft
    } else if near_right && near_bottom {
        CursorZone::BottomRight
    } else if near_left && near_bottom {
        CursorZone::BottomLeft
    } else if near_right && near_top {
        CursorZone::TopRight
    } else if near_left {
        CursorZone::Left
    } else if near_right {
        CursorZone::Right
    } else if near_top {
        CursorZone::Up
    } else if near_bottom {
        CursorZone::Down
    } else {
        CursorZone::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BOUNDS: WindowBounds = WindowBounds::new(100.0, 100.0, 800.0, 600.0);

    #[test]
    fn corners_win_over_edges() {
        assert_eq!(classify(Point::new(100.0, 100.0), &BOUNDS, 1.0), CursorZone::TopLeft);
        assert_eq!(classify(Point::new(900.0, 700.0), &BOUNDS, 1.0), CursorZone::BottomRight);
        assert_eq!(classify(Point::new(100.5, 699.5), &BOUNDS, 1.0), CursorZone::BottomLeft);
        assert_eq!(classify(Point::new(899.5, 100.5), &BOUNDS, 1.0), CursorZone::TopRight);
    }

    #[test]
    fn edges_classify_by_single_axis() {
        assert_eq!(classify(Point::new(100.0, 400.0), &BOUNDS, 1.0), CursorZone::Left);
        assert_eq!(classify(Point::new(899.2, 400.0), &BOUNDS, 1.0), CursorZone::Right);
        assert_eq!(classify(Point::new(500.0, 101.0), &BOUNDS, 1.0), CursorZone::Up);
        assert_eq!(classify(Point::new(500.0, 699.0), &BOUNDS, 1.0), CursorZone::Down);
    }

    #[test]
    fn just_past_the_band_is_interior() {
        assert_eq!(classify(Point::new(101.5, 400.0), &BOUNDS, 1.0), CursorZone::None);
    }

    #[test]
    fn glyphs_match_zone_kind() {
        assert_eq!(CursorZone::TopLeft.glyph(), CursorGlyph::ResizeDiagonalBackward);
        assert_eq!(CursorZone::BottomLeft.glyph(), CursorGlyph::ResizeDiagonalForward);
        assert_eq!(CursorZone::Left.glyph(), CursorGlyph::ResizeHorizontal);
        assert_eq!(CursorZone::Down.glyph(), CursorGlyph::ResizeVertical);
        assert_eq!(CursorZone::None.glyph(), CursorGlyph::Arrow);
    }

    proptest! {
        #[test]
        fn interior_points_are_none(x in 101.01f32..898.99, y in 101.01f32..698.99) {
            prop_assert_eq!(classify(Point::new(x, y), &BOUNDS, 1.0), CursorZone::None);
        }

        #[test]
        fn corner_band_never_yields_an_edge(dx in 0.0f32..=1.0, dy in 0.0f32..=1.0) {
            let corners = [
                (Point::new(100.0 + dx, 100.0 + dy), CursorZone::TopLeft),
                (Point::new(900.0 - dx, 100.0 + dy), CursorZone::TopRight),
                (Point::new(100.0 + dx, 700.0 - dy), CursorZone::BottomLeft),
                (Point::new(900.0 - dx, 700.0 - dy), CursorZone::BottomRight),
            ];
            for (point, expected) in corners {
                prop_assert_eq!(classify(point, &BOUNDS, 1.0), expected);
            }
        }
    }
}
