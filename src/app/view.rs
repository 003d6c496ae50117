// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The base layer is the title bar, the toolbar and the tile grid. Open
//! menus, the modal dialog and the toasts are stacked on top of it, in that
//! order.

use super::{App, Dialog, Message};
use crate::ui::dialogs::{self, about, confirm_exit, feedback, image_info, theme_picker};
use crate::ui::notifications::Toast;
use crate::ui::tile_view::{self, ViewContext as TileViewContext};
use crate::ui::title_bar::{self, ViewContext as TitleBarViewContext};
use crate::ui::toolbar;
use iced::widget::{mouse_area, stack, Column, Space};
use iced::{mouse, Element, Length};

impl App {
    pub(super) fn view(&self) -> Element<'_, Message> {
        let i18n = &self.ctx.i18n;
        let title_bar_ctx = TitleBarViewContext {
            i18n,
            logo: self.logo.as_ref(),
            maximized: self.maximized,
            menu: self.menu,
        };

        let tiles = tile_view::view(&TileViewContext {
            grid: &self.grid,
            i18n,
            hovered: self.hovered,
            engaged: self.reorder.engaged(),
        })
        .map(Message::Tile);

        let base = Column::new()
            .push(title_bar::view(&title_bar_ctx).map(Message::TitleBar))
            .push(toolbar::view(i18n, self.grid.len()).map(Message::Toolbar))
            .push(tiles)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut content: Element<'_, Message> = mouse_area(base)
            .interaction(mouse::Interaction::from(self.cursor_glyph))
            .into();

        if let Some(menu) = title_bar::view_menu(&title_bar_ctx) {
            content = with_popup(content, menu.map(Message::TitleBar));
        }

        if let Some((id, position)) = self.context_menu {
            if let Some(tile) = self.grid.get(id) {
                let menu = tile_view::context_menu(tile, i18n, position).map(Message::TileMenu);
                content = with_popup(content, menu);
            }
        }

        if let Some(dialog) = self.view_dialog() {
            content = dialogs::modal(content, dialog, Message::Dialog(dialogs::Action::Dismiss));
        }

        if let Some(toasts) = Toast::view_overlay(&self.notifications, i18n) {
            content = stack![content, toasts.map(Message::Notification)].into();
        }

        content
    }

    fn view_dialog(&self) -> Option<Element<'_, Message>> {
        let i18n = &self.ctx.i18n;
        let dialog = match self.dialog.as_ref()? {
            Dialog::Settings(state) => state.view(i18n).map(Message::Settings),
            Dialog::Theme => theme_picker::view(&self.ctx.theme, i18n).map(Message::ThemePicker),
            Dialog::About => about::view(i18n).map(Message::Dialog),
            Dialog::Feedback => feedback::view(i18n).map(Message::Dialog),
            Dialog::ConfirmExit => confirm_exit::view(i18n).map(Message::Dialog),
            Dialog::ImageInfo(id) => {
                let tile = self.grid.get(*id)?;
                image_info::view(tile, i18n, self.screen).map(Message::Dialog)
            }
        };
        Some(dialog)
    }
}

/// Lays `popup` over `base` with a click catcher between them that closes it.
fn with_popup<'a>(base: Element<'a, Message>, popup: Element<'a, Message>) -> Element<'a, Message> {
    let catcher = mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
        .on_press(Message::DismissMenus)
        .on_right_press(Message::DismissMenus);
    stack![base, catcher, popup].into()
}
