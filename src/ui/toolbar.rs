// SPDX-License-Identifier: MPL-2.0
//! Toolbar under the title bar: open, clear all, settings.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, Container, Row, Space, Svg, Text};
use iced::{alignment::Vertical, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Open,
    ClearAll,
    Settings,
}

pub fn view<'a>(i18n: &I18n, tile_count: usize) -> Element<'a, Message> {
    let clear = action(icons::trash(), i18n.tr("toolbar-clear-all"));
    let clear = if tile_count > 0 {
        clear.on_press(Message::ClearAll)
    } else {
        clear
    };

    let row = Row::new()
        .spacing(spacing::XXS)
        .padding([0.0, spacing::XS])
        .align_y(Vertical::Center)
        .push(action(icons::folder_plus(), i18n.tr("toolbar-open")).on_press(Message::Open))
        .push(clear)
        .push(action(icons::gear(), i18n.tr("toolbar-settings")).on_press(Message::Settings))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(tile_count.to_string()).size(typography::CAPTION));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .center_y(Length::Fixed(sizing::TOOLBAR_HEIGHT))
        .style(styles::container::chrome_bar)
        .into()
}

fn action<'a>(icon: Svg<'a>, label: String) -> button::Button<'a, Message> {
    button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icon)
            .push(Text::new(label).size(typography::BODY)),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::chrome)
}
