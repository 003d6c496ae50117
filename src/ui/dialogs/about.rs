// SPDX-License-Identifier: MPL-2.0
//! About dialog: name, version and a short description.

use super::{frame, ok_button, Action};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{Column, Text};
use iced::Element;

pub fn view<'a>(i18n: &I18n) -> Element<'a, Action> {
    let body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(i18n.tr("app-title")).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr_with_args("about-version", &[("version", env!("CARGO_PKG_VERSION"))]))
                .size(typography::CAPTION),
        )
        .push(Text::new(i18n.tr("app-description")).size(typography::BODY));

    frame(
        i18n.tr("about-title"),
        body,
        vec![ok_button(i18n, Action::Accept)],
    )
}
