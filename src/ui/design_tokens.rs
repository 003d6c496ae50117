// SPDX-License-Identifier: MPL-2.0
//! Theme-independent constants for the gallery chrome.
//!
//! Anything that should follow the active theme is read from
//! `Theme::extended_palette()` at style time instead.
//!
//! ```
//! use iced::Color;
//! use iced_gallery::ui::design_tokens::{opacity, palette, spacing};
//!
//! let scrim = Color { a: opacity::OVERLAY_MEDIUM, ..palette::BLACK };
//! assert_eq!(spacing::MD, 16.0);
//! # let _ = scrim;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Toast accents.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    /// Hover color of the title-bar close button.
    pub const CLOSE_HOVER: Color = Color::from_rgb(0.91, 0.07, 0.14);
}

pub mod opacity {
    /// Modal backdrop.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Tile remove button.
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Menus and dialog panels.
    pub const SURFACE: f32 = 0.97;
}

/// 4 px grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;
    pub const LOGO: f32 = 22.0;

    pub const TITLE_BAR_HEIGHT: f32 = 36.0;
    pub const TITLE_BAR_BUTTON_WIDTH: f32 = 46.0;
    pub const TOOLBAR_HEIGHT: f32 = 40.0;

    pub const MENU_WIDTH: f32 = 180.0;
    pub const DIALOG_WIDTH: f32 = 380.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const TILE_REMOVE_BUTTON: f32 = 28.0;
}

pub mod typography {
    pub const TITLE_MD: f32 = 20.0;
    pub const TITLE_SM: f32 = 15.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Tile highlight.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Pill or circle, whatever the widget size.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Toasts and tooltips.
    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Menus and dialogs.
    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(sizing::TILE_REMOVE_BUTTON < sizing::TITLE_BAR_HEIGHT);
    assert!(sizing::ICON_SM < sizing::TOOLBAR_HEIGHT);
    assert!(typography::TITLE_MD > typography::BODY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_the_four_pixel_grid() {
        for value in [spacing::XXS, spacing::XS, spacing::SM, spacing::MD, spacing::LG] {
            assert_eq!(value % 4.0, 0.0);
        }
    }
}
