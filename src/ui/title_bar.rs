// SPDX-License-Identifier: MPL-2.0
//! Custom title bar for the undecorated window.
//!
//! Shows the logo and app name on the left; the "more" menu and the
//! minimize / maximize-restore / close buttons on the right. Empty areas of
//! the bar do not capture the pointer, so pressing there moves the window.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{button, container, image, tooltip, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length, Theme};
use unic_langid::{langid, LanguageIdentifier};

/// Languages offered by the language submenu, in display order.
pub const LANGUAGES: [(LanguageIdentifier, &str); 2] = [
    (langid!("zh-CN"), "menu-chinese"),
    (langid!("en-US"), "menu-english"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Main,
    Language,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub logo: Option<&'a image::Handle>,
    pub maximized: bool,
    pub menu: MenuState,
}

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    OpenLanguageMenu,
    OpenTheme,
    SelectLanguage(LanguageIdentifier),
    OpenFeedback,
    OpenAbout,
    Minimize,
    ToggleMaximize,
    Close,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    OpenTheme,
    SelectLanguage(LanguageIdentifier),
    OpenFeedback,
    OpenAbout,
    Minimize,
    ToggleMaximize,
    /// Close button pressed; the app asks for confirmation.
    CloseRequested,
}

pub fn update(message: Message, menu: &mut MenuState) -> Event {
    let event = match message {
        Message::ToggleMenu => {
            *menu = match *menu {
                MenuState::Closed => MenuState::Main,
                MenuState::Main | MenuState::Language => MenuState::Closed,
            };
            return Event::None;
        }
        Message::OpenLanguageMenu => {
            *menu = MenuState::Language;
            return Event::None;
        }
        Message::CloseMenu => Event::None,
        Message::OpenTheme => Event::OpenTheme,
        Message::SelectLanguage(locale) => Event::SelectLanguage(locale),
        Message::OpenFeedback => Event::OpenFeedback,
        Message::OpenAbout => Event::OpenAbout,
        Message::Minimize => Event::Minimize,
        Message::ToggleMaximize => Event::ToggleMaximize,
        Message::Close => Event::CloseRequested,
    };
    *menu = MenuState::Closed;
    event
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut left = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .padding([0.0, spacing::SM]);
    if let Some(logo) = ctx.logo {
        left = left.push(
            image(logo.clone())
                .width(Length::Fixed(sizing::LOGO))
                .height(Length::Fixed(sizing::LOGO)),
        );
    }
    left = left.push(Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_SM));

    let (maximize_icon, maximize_key) = if ctx.maximized {
        (icons::squares(), "window-restore")
    } else {
        (icons::square(), "window-maximize")
    };

    let controls = Row::new()
        .height(Length::Fill)
        .push(chrome_button(icons::dots(), ctx.i18n.tr("menu-more"), Message::ToggleMenu))
        .push(chrome_button(icons::minus(), ctx.i18n.tr("window-minimize"), Message::Minimize))
        .push(chrome_button(maximize_icon, ctx.i18n.tr(maximize_key), Message::ToggleMaximize))
        .push(
            button(centered(icons::cross()))
                .on_press(Message::Close)
                .width(Length::Fixed(sizing::TITLE_BAR_BUTTON_WIDTH))
                .height(Length::Fill)
                .style(styles::button::chrome_close),
        );

    Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(left)
            .push(Space::new().width(Length::Fill))
            .push(controls),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::TITLE_BAR_HEIGHT))
    .style(styles::container::chrome_bar)
    .into()
}

/// Drop-down anchored under the "more" button. `None` while closed.
pub fn view_menu<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    let items: Vec<Element<'a, Message>> = match ctx.menu {
        MenuState::Closed => return None,
        MenuState::Main => vec![
            menu_item(ctx.i18n.tr("menu-theme"), Message::OpenTheme, false),
            menu_item(
                format!("{}  ›", ctx.i18n.tr("menu-language")),
                Message::OpenLanguageMenu,
                false,
            ),
            menu_item(ctx.i18n.tr("menu-feedback"), Message::OpenFeedback, false),
            menu_item(ctx.i18n.tr("menu-about"), Message::OpenAbout, false),
        ],
        MenuState::Language => LANGUAGES
            .iter()
            .map(|(locale, key)| {
                menu_item(
                    ctx.i18n.tr(key),
                    Message::SelectLanguage(locale.clone()),
                    ctx.i18n.current_locale() == locale,
                )
            })
            .collect(),
    };

    let menu = Container::new(Column::with_children(items).spacing(spacing::XXS))
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .padding(spacing::XXS)
        .style(styles::container::panel);

    // Right edge lines up with the "more" button.
    let right_inset = sizing::TITLE_BAR_BUTTON_WIDTH * 3.0;
    Some(
        Container::new(menu)
            .align_right(Length::Fill)
            .padding(iced::Padding {
                top: sizing::TITLE_BAR_HEIGHT,
                right: right_inset,
                ..iced::Padding::ZERO
            })
            .into(),
    )
}

fn centered<'a>(icon: iced::widget::Svg<'a>) -> Element<'a, Message> {
    container(icon).center(Length::Fill).into()
}

fn chrome_button<'a>(
    icon: iced::widget::Svg<'a>,
    tip: String,
    message: Message,
) -> Element<'a, Message> {
    let button = button(centered(icon))
        .on_press(message)
        .width(Length::Fixed(sizing::TITLE_BAR_BUTTON_WIDTH))
        .height(Length::Fill)
        .style(styles::button::chrome);
    styles::tooltip::styled(button, tip, tooltip::Position::Bottom).into()
}

pub(crate) fn menu_item<'a, M: Clone + 'a>(label: String, message: M, selected: bool) -> Element<'a, M> {
    let style: fn(&Theme, button::Status) -> button::Style = if selected {
        styles::button::menu_item_selected
    } else {
        styles::button::menu_item
    };
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(style)
        .into()
}
