// SPDX-License-Identifier: MPL-2.0
//! Theme picker. Choosing an entry applies it right away; OK closes.

use super::{frame, ok_button};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::theming::ThemeSelection;
use crate::ui::title_bar::menu_item;
use iced::widget::{scrollable, Column};
use iced::{Element, Length};

const LIST_HEIGHT: f32 = 320.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Select(ThemeSelection),
    Close,
}

pub fn view<'a>(current: &ThemeSelection, i18n: &I18n) -> Element<'a, Message> {
    let entries = ThemeSelection::all().into_iter().map(|selection| {
        let label = label(&selection, i18n);
        let selected = &selection == current;
        menu_item(label, Message::Select(selection), selected)
    });

    let list = scrollable(Column::with_children(entries).spacing(spacing::XXS))
        .height(Length::Fixed(LIST_HEIGHT));

    frame(i18n.tr("theme-title"), list, vec![ok_button(i18n, Message::Close)])
}

fn label(selection: &ThemeSelection, i18n: &I18n) -> String {
    match selection {
        ThemeSelection::System => i18n.tr("theme-system"),
        ThemeSelection::Named(theme) => theme.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Theme;

    #[test]
    fn system_entry_is_translated() {
        let i18n = I18n::default();
        assert_eq!(label(&ThemeSelection::System, &i18n), i18n.tr("theme-system"));
        assert_eq!(
            label(&ThemeSelection::Named(Theme::Nord), &i18n),
            Theme::Nord.to_string()
        );
    }
}
