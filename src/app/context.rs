// SPDX-License-Identifier: MPL-2.0
//! Shared application context: translations, the theme choice and the
//! persisted configuration.
//!
//! Built once when the application boots and lent to the views and dialogs
//! that need it. Every setter writes the change back to `settings.toml`.

use crate::config::{self, ColumnMode, Config};
use crate::error::Result;
use crate::gallery::GridLayout;
use crate::i18n::fluent::I18n;
use crate::ui::theming::ThemeSelection;
use iced::Theme;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

#[derive(Debug)]
pub struct AppContext {
    pub i18n: I18n,
    pub theme: ThemeSelection,
    pub config: Config,
    /// Concrete theme for `theme`, refreshed by [`Self::set_theme`].
    resolved_theme: Theme,
    /// Explicit config directory; `None` resolves through [`super::paths`].
    config_dir: Option<PathBuf>,
}

impl AppContext {
    /// Loads the configuration and resolves the locale and theme from it.
    ///
    /// The second value is the i18n key of a warning to show when the config
    /// file could not be read.
    pub fn load(lang: Option<String>, config_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let (config, warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(lang, &config);
        let theme = ThemeSelection::from_config(config.general.theme.as_deref());
        tracing::info!(locale = %i18n.current_locale(), %theme, "context loaded");

        (
            Self {
                i18n,
                resolved_theme: theme.resolve(),
                theme,
                config,
                config_dir,
            },
            warning,
        )
    }

    #[must_use]
    pub fn resolved_theme(&self) -> Theme {
        self.resolved_theme.clone()
    }

    pub fn set_theme(&mut self, selection: ThemeSelection) -> Result<()> {
        self.config.general.theme = selection.config_value();
        self.resolved_theme = selection.resolve();
        self.theme = selection;
        self.persist()
    }

    /// Switches the UI language. Unknown locales leave everything unchanged.
    pub fn set_language(&mut self, locale: LanguageIdentifier) -> Result<()> {
        if !self.i18n.set_locale(locale.clone()) {
            tracing::debug!(%locale, "no translation for locale");
            return Ok(());
        }
        self.config.general.language = Some(locale.to_string());
        self.persist()
    }

    /// Records accepted grid settings.
    pub fn set_grid(&mut self, layout: GridLayout, mode: ColumnMode) -> Result<()> {
        let grid = &mut self.config.grid;
        grid.fit_width = layout.fit_width.round() as u32;
        grid.column_mode = mode;
        grid.column_count = match mode {
            ColumnMode::Fixed => Some(layout.column_count as u32),
            ColumnMode::Auto => grid.column_count,
        };
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        config::save_with_override(&self.config, self.config_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use unic_langid::langid;

    #[test]
    fn missing_config_yields_defaults_without_warning() {
        let dir = tempdir().expect("tempdir");
        let (ctx, warning) = AppContext::load(Some("en-US".into()), Some(dir.path().into()));
        assert!(warning.is_none());
        assert_eq!(ctx.config, Config::default());
        assert_eq!(ctx.theme, ThemeSelection::System);
    }

    #[test]
    fn setters_persist_to_the_config_dir() {
        let dir = tempdir().expect("tempdir");
        let (mut ctx, _) = AppContext::load(Some("en-US".into()), Some(dir.path().into()));

        ctx.set_theme(ThemeSelection::Named(Theme::Dracula))
            .expect("save theme");
        ctx.set_language(langid!("zh-CN")).expect("save language");
        let layout = GridLayout::from_fit_width(400.0, 1920.0).with_column_count(6);
        ctx.set_grid(layout, ColumnMode::Fixed).expect("save grid");

        let (reloaded, warning) = AppContext::load(None, Some(dir.path().into()));
        assert!(warning.is_none());
        assert_eq!(reloaded.theme, ThemeSelection::Named(Theme::Dracula));
        assert_eq!(reloaded.i18n.current_locale(), &langid!("zh-CN"));
        assert_eq!(reloaded.config.grid.fit_width, 400);
        assert_eq!(reloaded.config.grid.column_mode, ColumnMode::Fixed);
        assert_eq!(reloaded.config.grid.column_count, Some(6));
    }

    #[test]
    fn auto_mode_keeps_the_last_fixed_count() {
        let dir = tempdir().expect("tempdir");
        let (mut ctx, _) = AppContext::load(None, Some(dir.path().into()));
        ctx.config.grid.column_count = Some(4);

        ctx.set_grid(GridLayout::from_fit_width(600.0, 1920.0), ColumnMode::Auto)
            .expect("save grid");
        assert_eq!(ctx.config.grid.column_count, Some(4));
    }

    #[test]
    fn unknown_language_is_ignored() {
        let dir = tempdir().expect("tempdir");
        let (mut ctx, _) = AppContext::load(Some("en-US".into()), Some(dir.path().into()));
        ctx.set_language(langid!("fr-FR")).expect("no-op");
        assert_eq!(ctx.i18n.current_locale(), &langid!("en-US"));
        assert!(ctx.config.general.language.is_none());
    }
}
