// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window, mouse and keyboard events are routed to the update loop,
//! which is the only place input reaches the chrome and reorder controllers.

use super::{Message, Shortcut};
use crate::config::defaults::ANIMATION_TICK_MS;
use crate::ui::notifications::NotificationMessage;
use iced::event::{self, Event};
use iced::keyboard::{self, key};
use iced::{mouse, time, window, Subscription};
use std::time::Duration;

const NOTIFICATION_TICK_MS: u64 = 250;

/// Routes native events.
///
/// Presses reach the chrome only when no widget captured them, so buttons,
/// inputs and tiles keep their own clicks. Releases and cursor moves are
/// always forwarded: a drag that started on a tile or the window border must
/// see the pointer wherever it goes.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        Event::Window(window::Event::Opened { position, size }) => Some(Message::WindowOpened {
            id: window_id,
            position,
            size,
        }),
        Event::Window(window::Event::Moved(position)) => Some(Message::WindowMoved(position)),
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            if status == event::Status::Ignored =>
        {
            Some(Message::PointerPressed)
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored =>
        {
            shortcut(&key, modifiers).map(Message::Shortcut)
        }
        _ => None,
    })
}

/// Maps a key press to an application shortcut.
pub fn shortcut(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<Shortcut> {
    match key.as_ref() {
        keyboard::Key::Named(key::Named::Escape) => Some(Shortcut::Escape),
        keyboard::Key::Character(c) if modifiers.command() => {
            match c.to_ascii_lowercase().as_str() {
                "q" => Some(Shortcut::Quit),
                "o" => Some(Shortcut::Open),
                "e" => Some(Shortcut::Clear),
                "t" => Some(Shortcut::Settings),
                "v" => Some(Shortcut::Paste),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Frame clock for GIF tiles, only while one exists.
pub fn create_animation_subscription(has_animations: bool) -> Subscription<Message> {
    if has_animations {
        time::every(Duration::from_millis(ANIMATION_TICK_MS)).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}

/// Expires toasts while any are shown or queued.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(NOTIFICATION_TICK_MS))
            .map(|now| Message::Notification(NotificationMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(c: &str) -> keyboard::Key {
        keyboard::Key::Character(c.into())
    }

    #[test]
    fn command_letters_map_to_shortcuts() {
        let command = keyboard::Modifiers::COMMAND;
        assert_eq!(shortcut(&character("q"), command), Some(Shortcut::Quit));
        assert_eq!(shortcut(&character("O"), command), Some(Shortcut::Open));
        assert_eq!(shortcut(&character("e"), command), Some(Shortcut::Clear));
        assert_eq!(shortcut(&character("t"), command), Some(Shortcut::Settings));
        assert_eq!(shortcut(&character("v"), command), Some(Shortcut::Paste));
        assert_eq!(shortcut(&character("x"), command), None);
    }

    #[test]
    fn letters_without_command_are_ignored() {
        let none = keyboard::Modifiers::empty();
        assert_eq!(shortcut(&character("q"), none), None);
    }

    #[test]
    fn escape_needs_no_modifier() {
        let escape = keyboard::Key::Named(key::Named::Escape);
        assert_eq!(
            shortcut(&escape, keyboard::Modifiers::empty()),
            Some(Shortcut::Escape)
        );
    }
}
