// SPDX-License-Identifier: MPL-2.0
//! "Are you sure to exit?" prompt shown by the title-bar close button.

use super::{cancel_button, frame, ok_button, Action};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use iced::widget::Text;
use iced::Element;

pub fn view<'a>(i18n: &I18n) -> Element<'a, Action> {
    frame(
        i18n.tr("exit-title"),
        Text::new(i18n.tr("exit-message")).size(typography::BODY),
        vec![
            cancel_button(i18n, Action::Dismiss),
            ok_button(i18n, Action::Accept),
        ],
    )
}
