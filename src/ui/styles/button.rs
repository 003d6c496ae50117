// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn transparent(theme: &Theme) -> button::Style {
    button::Style {
        background: None,
        text_color: theme.extended_palette().background.base.text,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Title bar and toolbar icon buttons: flat until hovered.
pub fn chrome(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette.background.strong.color)),
            ..transparent(theme)
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            ..transparent(theme)
        },
        _ => transparent(theme),
    }
}

/// Window close button: turns red on hover like native decorations.
pub fn chrome_close(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::CLOSE_HOVER)),
            text_color: WHITE,
            ..transparent(theme)
        },
        _ => transparent(theme),
    }
}

/// Main dialog action (OK).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let primary = theme.extended_palette().primary;
    let pair = match status {
        button::Status::Hovered => primary.strong,
        button::Status::Disabled => primary.weak,
        _ => primary.base,
    };
    button::Style {
        background: Some(Background::Color(pair.color)),
        text_color: pair.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Secondary dialog action (Cancel).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => palette.background.strong,
        _ => palette.background.weak,
    };
    button::Style {
        background: Some(Background::Color(background.color)),
        text_color: background.text,
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Entries of drop-down and context menus.
pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette.primary.weak.color)),
            text_color: palette.primary.weak.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..transparent(theme)
        },
        _ => transparent(theme),
    }
}

/// Menu entry for the active choice (current theme or language).
pub fn menu_item_selected(theme: &Theme, status: button::Status) -> button::Style {
    let primary = theme.extended_palette().primary;
    let pair = match status {
        button::Status::Hovered => primary.strong,
        _ => primary.base,
    };
    button::Style {
        background: Some(Background::Color(pair.color)),
        text_color: pair.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..transparent(theme)
    }
}

/// Round remove button shown over a hovered tile.
pub fn tile_remove(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::CLOSE_HOVER,
        _ => Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        },
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_button_is_flat_until_hovered() {
        let theme = Theme::Dark;
        assert!(chrome(&theme, button::Status::Active).background.is_none());
        assert!(chrome(&theme, button::Status::Hovered).background.is_some());
    }

    #[test]
    fn close_button_turns_red_on_hover() {
        let style = chrome_close(&Theme::Light, button::Status::Hovered);
        assert_eq!(style.background, Some(Background::Color(palette::CLOSE_HOVER)));
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn primary_button_follows_theme_palette() {
        let theme = Theme::Nord;
        let style = primary(&theme, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(theme.extended_palette().primary.base.color))
        );
    }
}
