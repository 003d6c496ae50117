// SPDX-License-Identifier: MPL-2.0
//! Modal dialogs drawn over the gallery.
//!
//! Dialogs render inside the main window on a dimmed backdrop. The simple
//! ones (about, feedback, exit confirmation, image info) only report an
//! [`Action`]; the settings dialog and theme picker carry their own state.

pub mod about;
pub mod confirm_exit;
pub mod feedback;
pub mod image_info;
pub mod settings;
pub mod theme_picker;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, center, container, mouse_area, opaque, stack, Column, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Buttons shared by the simple dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Accept,
    Dismiss,
}

/// Titled panel with a right-aligned button row.
pub fn frame<'a, M: Clone + 'a>(
    title: String,
    body: impl Into<Element<'a, M>>,
    buttons: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let actions = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Space::new().width(Length::Fill))
        .extend(buttons);

    container(
        Column::new()
            .spacing(spacing::MD)
            .push(Text::new(title).size(typography::TITLE_MD))
            .push(body)
            .push(actions),
    )
    .width(Length::Fixed(sizing::DIALOG_WIDTH))
    .padding(spacing::LG)
    .style(styles::container::panel)
    .into()
}

pub fn ok_button<'a, M: Clone + 'a>(i18n: &I18n, message: M) -> Element<'a, M> {
    button(Text::new(i18n.tr("dialog-ok")).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::primary)
        .into()
}

pub fn cancel_button<'a, M: Clone + 'a>(i18n: &I18n, message: M) -> Element<'a, M> {
    button(Text::new(i18n.tr("dialog-cancel")).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::secondary)
        .into()
}

/// Layers `dialog` centered over `base`. Clicking the backdrop sends `on_blur`.
pub fn modal<'a, M: Clone + 'a>(
    base: impl Into<Element<'a, M>>,
    dialog: impl Into<Element<'a, M>>,
    on_blur: M,
) -> Element<'a, M> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(dialog)).style(styles::container::scrim)).on_press(on_blur)
        )
    ]
    .into()
}
