// SPDX-License-Identifier: MPL-2.0
use super::{frame, ok_button, Action};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{text, Column};
use iced::Element;

/// Contact lines for bug reports and suggestions.
pub fn view<'a>(i18n: &I18n) -> Element<'a, Action> {
    let body = Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("feedback-qq")).size(typography::BODY))
        .push(text(i18n.tr("feedback-email")).size(typography::BODY));

    frame(
        i18n.tr("feedback-title"),
        body,
        vec![ok_button(i18n, Action::Accept)],
    )
}
