// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette::BLACK, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Title bar and toolbar strip.
pub fn chrome_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}

/// Area behind the tiles.
pub fn gallery(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Dialog and menu surface, derived from the theme background with a
/// slight opacity.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        text_color: Some(palette.background.base.text),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimmed backdrop behind modal dialogs.
pub fn scrim(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Tile frame; highlighted while hovered or engaged in a drag.
pub fn tile(highlighted: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let border = if highlighted {
            Border {
                color: palette.primary.base.color,
                width: border::WIDTH_MD,
                radius: radius::NONE.into(),
            }
        } else {
            Border {
                color: Color::TRANSPARENT,
                width: border::WIDTH_MD,
                radius: radius::NONE.into(),
            }
        };
        container::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            border,
            ..Default::default()
        }
    }
}
