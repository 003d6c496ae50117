// SPDX-License-Identifier: MPL-2.0
//! Tooltips for the icon-only chrome buttons.

use super::is_dark;
use crate::ui::design_tokens::{radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Text and background colors swapped, so the tip stands out from the bar.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base;
    let alpha = if is_dark(theme) { 0.98 } else { 0.95 };

    container::Style {
        background: Some(Background::Color(Color { a: alpha, ..base.text })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(base.color),
        ..Default::default()
    }
}

pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::CAPTION))
        .padding(spacing::XXS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XXS)
}
