// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the chrome, the tile
//! grid and the dialogs.
//!
//! The `App` struct owns the two input controllers and translates their
//! effects into iced tasks: window moves and resizes for the chrome, swaps
//! for the grid. Policy such as the minimum window size or what gets
//! persisted stays close to the update loop.

mod clipboard;
pub mod context;
mod dialog;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use context::AppContext;
pub use dialog::Dialog;
pub use message::{Flags, Message, Shortcut};

use crate::chrome::{ChromeController, CursorGlyph, WindowBounds};
use crate::config::defaults::{FALLBACK_SCREEN_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::gallery::{ReorderController, TileGrid, TileId};
use crate::ui::notifications::{self, Notification};
use crate::ui::title_bar::MenuState;
use iced::widget::image;
use iced::{window, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
const LOGO_SIZE: u32 = 64;

/// Root Iced application state.
pub struct App {
    ctx: AppContext,
    grid: TileGrid,
    reorder: ReorderController,
    chrome: ChromeController,
    window_id: Option<window::Id>,
    /// Window origin as last reported by the window system.
    window_origin: Point,
    window_size: Size,
    screen: Size,
    maximized: bool,
    /// Cursor position relative to the window.
    cursor: Point,
    cursor_glyph: CursorGlyph,
    hovered: Option<TileId>,
    menu: MenuState,
    /// Tile whose context menu is open and where it was opened.
    context_menu: Option<(TileId, Point)>,
    dialog: Option<Dialog>,
    notifications: notifications::Manager,
    logo: Option<image::Handle>,
    /// Kept for the session only.
    last_open_directory: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("tiles", &self.grid.len())
            .field("dialog", &self.dialog)
            .field("maximized", &self.maximized)
            .finish_non_exhaustive()
    }
}

/// Builds the settings of the undecorated main window.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        decorations: false,
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (ctx, config_warning) = AppContext::load(flags.lang, config_dir);

        let screen = Size::new(FALLBACK_SCREEN_WIDTH, WINDOW_DEFAULT_HEIGHT);
        let grid = TileGrid::new(ctx.config.grid.layout(screen.width));
        let bounds = WindowBounds::new(0.0, 0.0, WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT);

        let mut app = Self {
            ctx,
            grid,
            reorder: ReorderController::new(),
            chrome: ChromeController::new(bounds, Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
            window_id: None,
            window_origin: Point::ORIGIN,
            window_size: bounds.size(),
            screen,
            maximized: false,
            cursor: Point::ORIGIN,
            cursor_glyph: CursorGlyph::Arrow,
            hovered: None,
            menu: MenuState::Closed,
            context_menu: None,
            dialog: None,
            notifications: notifications::Manager::new(),
            logo: crate::icon::logo_handle(LOGO_SIZE),
            last_open_directory: None,
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let task = if flags.paths.is_empty() {
            Task::none()
        } else {
            update::load_images(flags.paths)
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.ctx.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.ctx.resolved_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_animation_subscription(self.grid.has_animations()),
            subscription::create_notification_subscription(self.notifications.has_notifications()),
        ])
    }
}
