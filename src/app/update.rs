// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{clipboard, App, Dialog, Message, Shortcut};
use crate::chrome::{ChromeEffect, CursorGlyph};
use crate::error::Error;
use crate::gallery::{
    is_supported_image, load_tile_content, DragOutcome, TileContent, TileId, IMAGE_EXTENSIONS,
};
use crate::input::{DragTarget, InputHandler, PointerEvent};
use crate::ui::dialogs::{self, settings, theme_picker};
use crate::ui::notifications::Notification;
use crate::ui::tile_view::{self, ContextAction};
use crate::ui::title_bar::{self, MenuState};
use crate::ui::toolbar;
use iced::{window, Point, Size, Task};
use std::path::PathBuf;

/// Opens the multi-select file dialog, starting in `last_directory`.
pub fn open_file_dialog(
    title: String,
    filter: String,
    last_directory: Option<PathBuf>,
) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter, IMAGE_EXTENSIONS);

            if let Some(dir) = last_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog
                .pick_files()
                .await
                .map(|handles| handles.iter().map(|h| h.path().to_path_buf()).collect())
                .unwrap_or_default()
        },
        Message::OpenFileDialogResult,
    )
}

/// Decodes `paths` off the update loop.
pub fn load_images(paths: Vec<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let requested = paths.clone();
            // Decoding is CPU bound, keep it off the async workers.
            tokio::task::spawn_blocking(move || {
                paths
                    .into_iter()
                    .map(|path| {
                        let content = load_tile_content(&path);
                        (path, content)
                    })
                    .collect::<Vec<_>>()
            })
            .await
            .unwrap_or_else(|err| {
                let reason = Error::Io(err.to_string());
                requested
                    .into_iter()
                    .map(|path| (path, Err(reason.clone())))
                    .collect()
            })
        },
        Message::ImagesLoaded,
    )
}

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TitleBar(message) => self.handle_title_bar(message),
            Message::Toolbar(message) => self.handle_toolbar(message),
            Message::Tile(message) => {
                self.handle_tile(message);
                Task::none()
            }
            Message::TileMenu(action) => {
                self.handle_tile_menu(action);
                Task::none()
            }
            Message::Settings(message) => {
                self.handle_settings(message);
                Task::none()
            }
            Message::ThemePicker(message) => {
                self.handle_theme_picker(message);
                Task::none()
            }
            Message::Dialog(action) => self.handle_dialog_action(action),
            Message::Notification(message) => {
                self.notifications.handle_message(&message);
                Task::none()
            }
            Message::DismissMenus => {
                self.menu = MenuState::Closed;
                self.context_menu = None;
                Task::none()
            }
            Message::WindowOpened { id, position, size } => {
                self.handle_window_opened(id, position, size)
            }
            Message::WindowMoved(position) => {
                self.window_origin = position;
                if self.chrome.gesture().is_none() {
                    self.chrome.set_position(position);
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                if self.chrome.gesture().is_some() {
                    return Task::none();
                }
                self.chrome.set_size(size);
                // Also catches restores done by the window manager.
                self.window_id.map_or_else(Task::none, |id| {
                    window::is_maximized(id).map(Message::MaximizedChanged)
                })
            }
            Message::MaximizedChanged(maximized) => {
                if self.maximized != maximized {
                    tracing::debug!(maximized, "window maximized state changed");
                    self.maximized = maximized;
                }
                Task::none()
            }
            Message::MonitorSize(size) => {
                if let Some(size) = size {
                    tracing::debug!(width = size.width, height = size.height, "monitor size");
                    self.screen = size;
                    self.grid.reflow(self.ctx.config.grid.layout(size.width));
                }
                Task::none()
            }
            Message::PointerMoved(position) => self.handle_pointer_moved(position),
            Message::PointerPressed => self.handle_pointer_pressed(),
            Message::PointerReleased => self.handle_pointer_released(),
            Message::FileDropped(path) => self.handle_file_dropped(path),
            Message::Shortcut(shortcut) => self.handle_shortcut(shortcut),
            Message::OpenFileDialogResult(paths) => {
                if let Some(dir) = paths.first().and_then(|p| p.parent()) {
                    self.last_open_directory = Some(dir.to_path_buf());
                }
                if paths.is_empty() {
                    Task::none()
                } else {
                    load_images(paths)
                }
            }
            Message::ImagesLoaded(results) => {
                self.handle_images_loaded(results);
                Task::none()
            }
            Message::AnimationTick(now) => {
                self.grid.advance_animations(now);
                Task::none()
            }
        }
    }

    fn handle_window_opened(
        &mut self,
        id: window::Id,
        position: Option<Point>,
        size: Size,
    ) -> Task<Message> {
        if self.window_id.is_some() {
            return Task::none();
        }
        self.window_id = Some(id);
        self.window_origin = position.unwrap_or(Point::ORIGIN);
        self.window_size = size;
        self.chrome.set_position(self.window_origin);
        self.chrome.set_size(size);
        self.maximized = true;

        Task::batch([
            window::monitor_size(id).map(Message::MonitorSize),
            window::maximize(id, true),
        ])
    }

    fn handle_title_bar(&mut self, message: title_bar::Message) -> Task<Message> {
        self.context_menu = None;
        match title_bar::update(message, &mut self.menu) {
            title_bar::Event::None => Task::none(),
            title_bar::Event::OpenTheme => self.open_dialog(Dialog::Theme),
            title_bar::Event::OpenFeedback => self.open_dialog(Dialog::Feedback),
            title_bar::Event::OpenAbout => self.open_dialog(Dialog::About),
            title_bar::Event::CloseRequested => self.open_dialog(Dialog::ConfirmExit),
            title_bar::Event::SelectLanguage(locale) => {
                if let Err(err) = self.ctx.set_language(locale) {
                    self.notify_error(&err);
                }
                Task::none()
            }
            title_bar::Event::Minimize => self
                .window_id
                .map_or_else(Task::none, |id| window::minimize(id, true)),
            title_bar::Event::ToggleMaximize => {
                let Some(id) = self.window_id else {
                    return Task::none();
                };
                self.maximized = !self.maximized;
                window::maximize(id, self.maximized)
            }
        }
    }

    fn handle_toolbar(&mut self, message: toolbar::Message) -> Task<Message> {
        self.dismiss_menus();
        match message {
            toolbar::Message::Open => self.open_files(),
            toolbar::Message::ClearAll => {
                self.clear_tiles();
                Task::none()
            }
            toolbar::Message::Settings => self.open_settings(),
        }
    }

    fn handle_tile(&mut self, message: tile_view::Message) {
        match message {
            tile_view::Message::Pressed(id) => {
                self.dismiss_menus();
                if let Some(tile) = self.grid.get(id) {
                    if let DragOutcome::Rejected = self.reorder.begin(tile) {
                        tracing::debug!(tile = %id, "animated tiles are not draggable");
                    }
                }
            }
            tile_view::Message::Entered(id) => {
                self.hovered = Some(id);
                if !self.reorder.is_active() {
                    return;
                }
                if let Some(target) = self.drag_target(id) {
                    self.reorder.on_drag_enter(target);
                }
            }
            tile_view::Message::Exited(id) => {
                if self.hovered == Some(id) {
                    self.hovered = None;
                }
            }
            tile_view::Message::Remove(id) => {
                if self.grid.remove(id) {
                    if self.hovered == Some(id) {
                        self.hovered = None;
                    }
                    if self.context_menu.is_some_and(|(menu_id, _)| menu_id == id) {
                        self.context_menu = None;
                    }
                }
            }
            tile_view::Message::OpenContextMenu(id) => {
                self.menu = MenuState::Closed;
                self.reorder.cancel();
                self.context_menu = Some((id, self.cursor));
            }
        }
    }

    fn handle_tile_menu(&mut self, action: ContextAction) {
        self.context_menu = None;
        match action {
            ContextAction::Copy(id) => {
                let Some(image) = self.grid.get(id).and_then(|t| t.content.as_still()) else {
                    return;
                };
                match clipboard::copy(image) {
                    Ok(()) => self
                        .notifications
                        .push(Notification::success("notification-copied")),
                    Err(err) => self.notify_error(&err),
                }
            }
            ContextAction::ImageInfo(id) => {
                if self.grid.get(id).is_some() {
                    self.dialog = Some(Dialog::ImageInfo(id));
                }
            }
            ContextAction::OpenFolder(id) => {
                let Some(dir) = self
                    .grid
                    .get(id)
                    .and_then(|t| t.source.as_deref())
                    .and_then(std::path::Path::parent)
                else {
                    return;
                };
                if let Err(err) = open::that_detached(dir) {
                    tracing::warn!(dir = %dir.display(), error = %err, "cannot open folder");
                    self.notifications.push(
                        Notification::error("notification-open-folder-error")
                            .with_detail(dir.display().to_string()),
                    );
                }
            }
        }
    }

    fn handle_settings(&mut self, message: settings::Message) {
        let Some(Dialog::Settings(state)) = self.dialog.as_mut() else {
            return;
        };
        match state.update(message) {
            settings::Event::None => {}
            settings::Event::Cancel => self.dialog = None,
            settings::Event::Apply { layout, mode } => {
                self.dialog = None;
                self.grid.reflow(layout);
                if let Err(err) = self.ctx.set_grid(layout, mode) {
                    self.notify_error(&err);
                }
            }
        }
    }

    fn handle_theme_picker(&mut self, message: theme_picker::Message) {
        match message {
            theme_picker::Message::Select(selection) => {
                if let Err(err) = self.ctx.set_theme(selection) {
                    self.notify_error(&err);
                }
            }
            theme_picker::Message::Close => self.dialog = None,
        }
    }

    fn handle_dialog_action(&mut self, action: dialogs::Action) -> Task<Message> {
        let dialog = self.dialog.take();
        match (dialog, action) {
            (Some(Dialog::ConfirmExit), dialogs::Action::Accept) => {
                tracing::info!("exit confirmed");
                iced::exit()
            }
            _ => Task::none(),
        }
    }

    fn handle_pointer_moved(&mut self, position: Point) -> Task<Message> {
        self.cursor = position;
        if self.maximized {
            self.cursor_glyph = CursorGlyph::Arrow;
            return Task::none();
        }
        let event = self.global(position);
        let effects = self.chrome.on_pointer_move(event);
        self.apply_chrome_effects(effects)
    }

    fn handle_pointer_pressed(&mut self) -> Task<Message> {
        if self.maximized || self.dialog.is_some() {
            return Task::none();
        }
        let event = self.global(self.cursor);
        let effects = self.chrome.on_pointer_down(event);
        self.apply_chrome_effects(effects)
    }

    fn handle_pointer_released(&mut self) -> Task<Message> {
        let event = self.global(self.cursor);

        if self.reorder.is_active() {
            let outcome = match self.hovered.and_then(|id| self.drag_target(id)) {
                Some(target) => self.reorder.on_drop(target),
                None => self.reorder.on_pointer_up(event),
            };
            if let Some(DragOutcome::Swap(swap)) = outcome {
                self.grid.apply_swap(swap);
            }
        }

        let effects = self.chrome.on_pointer_up(event);
        self.apply_chrome_effects(effects)
    }

    fn handle_file_dropped(&mut self, path: PathBuf) -> Task<Message> {
        if is_supported_image(&path) {
            return load_images(vec![path]);
        }
        tracing::debug!(path = %path.display(), "unsupported drop");
        self.notifications.push(
            Notification::warning("notification-unsupported-drop")
                .with_detail(path.display().to_string()),
        );
        Task::none()
    }

    fn handle_shortcut(&mut self, shortcut: Shortcut) -> Task<Message> {
        match shortcut {
            Shortcut::Quit => iced::exit(),
            Shortcut::Open => self.open_files(),
            Shortcut::Clear => {
                self.clear_tiles();
                Task::none()
            }
            Shortcut::Settings => self.open_settings(),
            Shortcut::Paste => {
                self.paste();
                Task::none()
            }
            Shortcut::Escape => {
                if self.context_menu.is_some() {
                    self.context_menu = None;
                } else if self.menu != MenuState::Closed {
                    self.menu = MenuState::Closed;
                } else {
                    self.dialog = None;
                }
                Task::none()
            }
        }
    }

    fn handle_images_loaded(&mut self, results: Vec<(PathBuf, Result<TileContent, Error>)>) {
        for (path, result) in results {
            match result {
                Ok(content) => {
                    self.grid.add(content, Some(path));
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "image not loaded");
                    self.notifications.push(
                        Notification::error(err.i18n_key()).with_detail(path.display().to_string()),
                    );
                }
            }
        }
    }

    fn paste(&mut self) {
        match clipboard::paste() {
            Ok(Some(content)) => {
                self.grid.add(content, None);
            }
            Ok(None) => self
                .notifications
                .push(Notification::warning("notification-clipboard-empty")),
            Err(err) => self.notify_error(&err),
        }
    }

    fn open_files(&mut self) -> Task<Message> {
        if self.dialog.is_some() {
            return Task::none();
        }
        open_file_dialog(
            self.ctx.i18n.tr("open-dialog-title"),
            self.ctx.i18n.tr("open-dialog-filter"),
            self.last_open_directory.clone(),
        )
    }

    fn open_settings(&mut self) -> Task<Message> {
        let state = settings::State::new(
            self.grid.layout(),
            self.ctx.config.grid.column_mode,
            self.screen.width,
        );
        self.open_dialog(Dialog::Settings(state))
    }

    fn open_dialog(&mut self, dialog: Dialog) -> Task<Message> {
        tracing::debug!(?dialog, "dialog opened");
        self.dismiss_menus();
        self.reorder.cancel();
        self.dialog = Some(dialog);
        Task::none()
    }

    fn clear_tiles(&mut self) {
        self.grid.clear();
        self.reorder.cancel();
        self.hovered = None;
        self.context_menu = None;
        if matches!(self.dialog, Some(Dialog::ImageInfo(_))) {
            self.dialog = None;
        }
    }

    fn dismiss_menus(&mut self) {
        self.menu = MenuState::Closed;
        self.context_menu = None;
    }

    fn notify_error(&mut self, err: &Error) {
        self.notifications
            .push(Notification::error(err.i18n_key()).with_detail(err.to_string()));
    }

    fn drag_target(&self, id: TileId) -> Option<DragTarget> {
        self.grid.get(id).map(|tile| DragTarget {
            id,
            animated: tile.is_animated(),
        })
    }

    /// Converts a window-relative cursor position to screen coordinates.
    fn global(&self, local: Point) -> PointerEvent {
        PointerEvent::at(self.window_origin.x + local.x, self.window_origin.y + local.y)
    }

    fn apply_chrome_effects(&mut self, effects: Option<Vec<ChromeEffect>>) -> Task<Message> {
        let Some(effects) = effects else {
            return Task::none();
        };
        let tasks: Vec<_> = effects
            .into_iter()
            .map(|effect| self.apply_chrome_effect(effect))
            .collect();
        Task::batch(tasks)
    }

    fn apply_chrome_effect(&mut self, effect: ChromeEffect) -> Task<Message> {
        match effect {
            ChromeEffect::SetCursor(glyph) => {
                self.cursor_glyph = glyph;
                Task::none()
            }
            ChromeEffect::SetBounds(bounds) => {
                let Some(id) = self.window_id else {
                    return Task::none();
                };
                let size = bounds.size();
                if size == self.window_size {
                    return window::move_to(id, bounds.top_left());
                }
                self.window_size = size;
                Task::batch([window::move_to(id, bounds.top_left()), window::resize(id, size)])
            }
            // The window system keeps delivering cursor events while the
            // button is held, so capture needs no task.
            ChromeEffect::CapturePointer | ChromeEffect::ReleasePointer => Task::none(),
        }
    }
}
