// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! First match wins: an explicit directory passed by the caller, the
//! `--config-dir` flag, the `ICED_GALLERY_CONFIG_DIR` variable, then the
//! platform config directory from `dirs` joined with [`APP_NAME`].

use std::path::PathBuf;
use std::sync::OnceLock;

pub const APP_NAME: &str = "IcedGallery";

pub const ENV_CONFIG_DIR: &str = "ICED_GALLERY_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` flag. Later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override already initialized, ignoring");
    }
}

/// Resolves the config directory, `None` when the platform has none.
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(|| CLI_CONFIG_DIR.get().cloned().flatten())
        .or_else(|| from_env(std::env::var(ENV_CONFIG_DIR).ok()))
        .or_else(platform_config_dir)
}

fn from_env(value: Option<String>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn platform_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME))
}
