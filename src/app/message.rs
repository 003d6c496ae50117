// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::TileContent;
use crate::ui::dialogs::{self, settings, theme_picker};
use crate::ui::notifications;
use crate::ui::tile_view;
use crate::ui::title_bar;
use crate::ui::toolbar;
use iced::{window, Point, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    TitleBar(title_bar::Message),
    Toolbar(toolbar::Message),
    Tile(tile_view::Message),
    TileMenu(tile_view::ContextAction),
    Settings(settings::Message),
    ThemePicker(theme_picker::Message),
    /// OK/Cancel of the dialogs that carry no state of their own.
    Dialog(dialogs::Action),
    Notification(notifications::NotificationMessage),
    /// Click outside an open drop-down or context menu.
    DismissMenus,

    /// First window event; carries its id and geometry.
    WindowOpened {
        id: window::Id,
        position: Option<Point>,
        size: Size,
    },
    WindowMoved(Point),
    WindowResized(Size),
    /// Whether the window is maximized, as reported after a resize.
    MaximizedChanged(bool),
    MonitorSize(Option<Size>),
    /// Cursor position relative to the window.
    PointerMoved(Point),
    /// Left button pressed outside any interactive widget.
    PointerPressed,
    PointerReleased,
    FileDropped(PathBuf),
    Shortcut(Shortcut),

    OpenFileDialogResult(Vec<PathBuf>),
    ImagesLoaded(Vec<(PathBuf, Result<TileContent, Error>)>),
    /// Advances GIF frames.
    AnimationTick(Instant),
}

/// Keyboard shortcuts handled at the application level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Quit,
    Open,
    Clear,
    Settings,
    Paste,
    Escape,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `zh-CN`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Images added to the grid on startup.
    pub paths: Vec<PathBuf>,
}
