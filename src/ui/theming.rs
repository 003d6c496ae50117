// SPDX-License-Identifier: MPL-2.0
//! Theme selection: follow the system light/dark mode, or pin a built-in
//! Iced theme by name.

use iced::Theme;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ThemeSelection {
    #[default]
    System,
    Named(Theme),
}

impl ThemeSelection {
    /// Every choice offered by the theme picker, system first.
    #[must_use]
    pub fn all() -> Vec<Self> {
        std::iter::once(Self::System)
            .chain(Theme::ALL.iter().cloned().map(Self::Named))
            .collect()
    }

    /// Parses the `[general] theme` config value. Unknown names follow the system.
    #[must_use]
    pub fn from_config(name: Option<&str>) -> Self {
        name.and_then(|name| Theme::ALL.iter().find(|theme| theme.to_string() == name))
            .cloned()
            .map_or(Self::System, Self::Named)
    }

    /// Value written back to the config file.
    #[must_use]
    pub fn config_value(&self) -> Option<String> {
        match self {
            Self::System => None,
            Self::Named(theme) => Some(theme.to_string()),
        }
    }

    /// Concrete theme to render with.
    #[must_use]
    pub fn resolve(&self) -> Theme {
        match self {
            Self::System => system_theme(),
            Self::Named(theme) => theme.clone(),
        }
    }
}

impl fmt::Display for ThemeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // The picker replaces this with a translated label.
            Self::System => f.write_str("System"),
            Self::Named(theme) => write!(f, "{theme}"),
        }
    }
}

/// Light or dark built-in theme matching the desktop. Dark on detection error.
#[must_use]
pub fn system_theme() -> Theme {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => Theme::Light,
        _ => Theme::Dark,
    }
}
