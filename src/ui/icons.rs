// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the chrome's SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. Every icon is tinted with the text color of the
//! active theme, so one asset works on light and dark backgrounds.
//!
//! Icons use visual names (`trash`, not `clear_all`).

use crate::ui::design_tokens::sizing;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            themed(Svg::new(handle.clone()))
        }
    };
}

define_icon!(dots, "dots.svg", "Three horizontal dots (more menu).");
define_icon!(minus, "minus.svg", "Horizontal bar (minimize).");
define_icon!(square, "square.svg", "Single square (maximize).");
define_icon!(squares, "squares.svg", "Two overlapping squares (restore).");
define_icon!(cross, "cross.svg", "Diagonal cross (close, remove).");
define_icon!(folder_plus, "folder_plus.svg", "Folder with a plus sign (open).");
define_icon!(trash, "trash.svg", "Trash can (clear all).");
define_icon!(gear, "gear.svg", "Gear (settings).");

fn themed(icon: Svg<'_>) -> Svg<'_> {
    icon.width(Length::Fixed(sizing::ICON_SM))
        .height(Length::Fixed(sizing::ICON_SM))
        .style(|theme: &Theme, _status| svg::Style {
            color: Some(theme.extended_palette().background.base.text),
        })
}

/// Forces a fixed tint, used on colored backgrounds such as the tile overlay.
pub fn tinted(icon: Svg<'_>, color: Color) -> Svg<'_> {
    icon.style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}
