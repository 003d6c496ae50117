// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the gallery chrome, dialogs and tiles.

pub mod button;
pub mod container;
pub mod tooltip;

/// Whether a theme reads as dark, judged by its background luminance.
#[must_use]
pub fn is_dark(theme: &iced::Theme) -> bool {
    let bg = theme.extended_palette().background.base.color;
    (bg.r + bg.g + bg.b) / 3.0 < 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Theme;

    #[test]
    fn builtin_light_and_dark_are_classified() {
        assert!(is_dark(&Theme::Dark));
        assert!(!is_dark(&Theme::Light));
    }
}
