// SPDX-License-Identifier: MPL-2.0
//! User preferences persisted in `settings.toml`.
//!
//! `[general]` holds the language and theme, `[grid]` the tile width and
//! column layout. Missing keys take their defaults from [`defaults`]. The
//! file location is resolved by [`crate::app::paths`]; tests pass an explicit
//! directory or file instead.
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("zh-CN".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::gallery::GridLayout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// How the grid picks its column count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnMode {
    /// As many columns as fit across the screen.
    #[default]
    Auto,
    /// The user-chosen `column_count`.
    Fixed,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "zh-CN").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Name of a built-in iced theme. `None` follows the system light/dark mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Tile grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    #[serde(default = "default_fit_width")]
    pub fit_width: u32,

    #[serde(default)]
    pub column_mode: ColumnMode,

    /// Only used with [`ColumnMode::Fixed`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_count: Option<u32>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            fit_width: DEFAULT_FIT_WIDTH,
            column_mode: ColumnMode::Auto,
            column_count: None,
        }
    }
}

impl GridConfig {
    /// Resolves the persisted settings into a concrete layout for a screen.
    #[must_use]
    pub fn layout(&self, screen_width: f32) -> GridLayout {
        let fit_width = self.fit_width.clamp(MIN_FIT_WIDTH, MAX_FIT_WIDTH);
        let auto = GridLayout::from_fit_width(fit_width as f32, screen_width);

        match (self.column_mode, self.column_count) {
            (ColumnMode::Fixed, Some(count)) => GridLayout {
                column_count: count.clamp(MIN_COLUMN_COUNT, MAX_COLUMN_COUNT) as usize,
                ..auto
            },
            _ => auto,
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub grid: GridConfig,
}

fn default_fit_width() -> u32 {
    DEFAULT_FIT_WIDTH
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning to show.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    let path = get_config_path_with_override(base_dir)
        .ok_or_else(|| Error::Config("no config directory available".into()))?;
    save_to_path(config, &path)
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "config saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            general: GeneralConfig {
                language: Some("zh-CN".to_string()),
                theme: Some("Dracula".to_string()),
            },
            grid: GridConfig {
                fit_width: 450,
                column_mode: ColumnMode::Fixed,
                column_count: Some(5),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("partial config should load");
        assert_eq!(loaded.general.language.as_deref(), Some("en-US"));
        assert_eq!(loaded.grid, GridConfig::default());
    }

    #[test]
    fn invalid_toml_yields_default_and_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn absent_file_yields_default_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(nested.clone())).expect("save");
        assert!(nested.join(CONFIG_FILE).exists());
    }

    #[test]
    fn auto_layout_divides_screen_width() {
        let layout = GridConfig::default().layout(1920.0);
        assert_eq!(layout.column_count, 3);
        assert_eq!(layout.fit_width, 600.0);
    }

    #[test]
    fn fixed_layout_uses_clamped_count() {
        let grid = GridConfig {
            fit_width: 600,
            column_mode: ColumnMode::Fixed,
            column_count: Some(99),
        };
        assert_eq!(grid.layout(1920.0).column_count, MAX_COLUMN_COUNT as usize);
    }

    #[test]
    fn column_mode_serializes_kebab_case() {
        let text = toml::to_string(&GridConfig {
            fit_width: 600,
            column_mode: ColumnMode::Fixed,
            column_count: Some(2),
        })
        .expect("serialize");
        assert!(text.contains("column_mode = \"fixed\""));
    }
}
