// SPDX-License-Identifier: MPL-2.0
//! Grid settings: tile width and column mode.
//!
//! Text that does not parse, or falls outside the accepted range, is kept in
//! the input but leaves the pending layout unchanged.

use super::{cancel_button, frame, ok_button};
use crate::config::defaults::{MAX_COLUMN_COUNT, MAX_FIT_WIDTH, MIN_COLUMN_COUNT, MIN_FIT_WIDTH};
use crate::config::ColumnMode;
use crate::gallery::{auto_column_count, GridLayout};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{radio, text_input, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length};

#[derive(Debug, Clone)]
pub struct State {
    width_input: String,
    column_input: String,
    mode: ColumnMode,
    layout: GridLayout,
    screen_width: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    WidthChanged(String),
    ModeSelected(ColumnMode),
    ColumnsChanged(String),
    Ok,
    Cancel,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Apply { layout: GridLayout, mode: ColumnMode },
    Cancel,
}

impl State {
    #[must_use]
    pub fn new(layout: GridLayout, mode: ColumnMode, screen_width: f32) -> Self {
        Self {
            width_input: format!("{:.0}", layout.fit_width),
            column_input: layout.column_count.to_string(),
            mode,
            layout,
            screen_width,
        }
    }

    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    #[must_use]
    pub fn mode(&self) -> ColumnMode {
        self.mode
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::WidthChanged(value) => {
                if let Some(width) = parse_in_range(&value, MIN_FIT_WIDTH, MAX_FIT_WIDTH) {
                    let columns = self.layout.column_count;
                    self.layout = GridLayout::from_fit_width(width as f32, self.screen_width);
                    if self.mode == ColumnMode::Fixed {
                        self.layout.column_count = columns;
                    }
                    self.sync_auto_columns();
                }
                self.width_input = value;
            }
            Message::ModeSelected(mode) => {
                self.mode = mode;
                match mode {
                    ColumnMode::Auto => self.sync_auto_columns(),
                    ColumnMode::Fixed => self.apply_fixed_columns(),
                }
            }
            Message::ColumnsChanged(value) => {
                self.column_input = value;
                if self.mode == ColumnMode::Fixed {
                    self.apply_fixed_columns();
                }
            }
            Message::Ok => {
                tracing::debug!(?self.layout, ?self.mode, "grid settings accepted");
                return Event::Apply {
                    layout: self.layout,
                    mode: self.mode,
                };
            }
            Message::Cancel => return Event::Cancel,
        }
        Event::None
    }

    fn sync_auto_columns(&mut self) {
        if self.mode == ColumnMode::Auto {
            self.layout.column_count = auto_column_count(self.layout.fit_width, self.screen_width);
            self.column_input = self.layout.column_count.to_string();
        }
    }

    fn apply_fixed_columns(&mut self) {
        if let Some(count) = parse_in_range(&self.column_input, MIN_COLUMN_COUNT, MAX_COLUMN_COUNT) {
            self.layout.column_count = count as usize;
        }
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let label_width = Length::Fixed(130.0);

        let width_row = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr("settings-fit-width")).width(label_width))
            .push(
                text_input(&range_hint(i18n, MIN_FIT_WIDTH, MAX_FIT_WIDTH), &self.width_input)
                    .on_input(Message::WidthChanged)
                    .size(typography::BODY),
            );

        let height_row = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(i18n.tr("settings-fit-height")).width(label_width))
            .push(Text::new(format!("{}", self.layout.fit_height as u32)));

        let column_field = text_input(
            &range_hint(i18n, MIN_COLUMN_COUNT, MAX_COLUMN_COUNT),
            &self.column_input,
        )
        .size(typography::BODY);
        let column_field = if self.mode == ColumnMode::Fixed {
            column_field.on_input(Message::ColumnsChanged)
        } else {
            column_field
        };

        let mode_rows = Column::new()
            .spacing(spacing::XS)
            .push(radio(
                i18n.tr("settings-auto-column"),
                ColumnMode::Auto,
                Some(self.mode),
                Message::ModeSelected,
            ))
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .align_y(Vertical::Center)
                    .push(radio(
                        i18n.tr("settings-fixed-column"),
                        ColumnMode::Fixed,
                        Some(self.mode),
                        Message::ModeSelected,
                    ))
                    .push(column_field),
            );

        let body = Column::new()
            .spacing(spacing::SM)
            .push(width_row)
            .push(height_row)
            .push(mode_rows);

        frame(
            i18n.tr("settings-title"),
            body,
            vec![
                cancel_button(i18n, Message::Cancel),
                ok_button(i18n, Message::Ok),
            ],
        )
    }
}

fn range_hint(i18n: &I18n, min: u32, max: u32) -> String {
    i18n.tr_with_args(
        "settings-range-hint",
        &[("min", min.to_string().as_str()), ("max", max.to_string().as_str())],
    )
}

fn parse_in_range(value: &str, min: u32, max: u32) -> Option<u32> {
    value
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|v| (min..=max).contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(mode: ColumnMode) -> State {
        State::new(GridLayout::from_fit_width(600.0, 1920.0), mode, 1920.0)
    }

    #[test]
    fn width_change_recomputes_height_and_auto_columns() {
        let mut settings = state(ColumnMode::Auto);
        settings.update(Message::WidthChanged("400".into()));

        let layout = settings.layout();
        assert_eq!(layout.fit_width, 400.0);
        assert!((layout.fit_height - 247.2).abs() < 1e-3);
        assert_eq!(layout.column_count, 4);
    }

    #[test]
    fn invalid_width_keeps_previous_layout() {
        let mut settings = state(ColumnMode::Auto);
        for value in ["abc", "50", "5000", ""] {
            settings.update(Message::WidthChanged(value.into()));
            assert_eq!(settings.layout().fit_width, 600.0);
        }
    }

    #[test]
    fn fixed_mode_uses_typed_column_count() {
        let mut settings = state(ColumnMode::Auto);
        settings.update(Message::ModeSelected(ColumnMode::Fixed));
        settings.update(Message::ColumnsChanged("7".into()));
        assert_eq!(settings.layout().column_count, 7);
    }

    #[test]
    fn non_numeric_column_count_is_no_change() {
        let mut settings = state(ColumnMode::Fixed);
        settings.update(Message::ColumnsChanged("5".into()));
        settings.update(Message::ColumnsChanged("five".into()));
        settings.update(Message::ColumnsChanged("0".into()));
        settings.update(Message::ColumnsChanged("21".into()));
        assert_eq!(settings.layout().column_count, 5);
    }

    #[test]
    fn column_text_is_ignored_in_auto_mode() {
        let mut settings = state(ColumnMode::Auto);
        settings.update(Message::ColumnsChanged("9".into()));
        assert_eq!(settings.layout().column_count, 3);
    }

    #[test]
    fn switching_back_to_auto_restores_computed_count() {
        let mut settings = state(ColumnMode::Fixed);
        settings.update(Message::ColumnsChanged("9".into()));
        settings.update(Message::ModeSelected(ColumnMode::Auto));
        assert_eq!(settings.layout().column_count, 3);
    }

    #[test]
    fn fixed_width_change_keeps_column_count() {
        let mut settings = state(ColumnMode::Fixed);
        settings.update(Message::ColumnsChanged("2".into()));
        settings.update(Message::WidthChanged("300".into()));
        assert_eq!(settings.layout().column_count, 2);
    }

    #[test]
    fn ok_applies_and_cancel_discards() {
        let mut settings = state(ColumnMode::Auto);
        settings.update(Message::WidthChanged("1000".into()));
        assert_eq!(
            settings.update(Message::Ok),
            Event::Apply {
                layout: GridLayout::from_fit_width(1000.0, 1920.0),
                mode: ColumnMode::Auto,
            }
        );
        assert_eq!(settings.update(Message::Cancel), Event::Cancel);
    }
}
