// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, a `view`, and where it owns state an `update` that
//! reports an `Event` for the application to act on.
//!
//! - [`title_bar`] - custom chrome with the "more" menu and window buttons
//! - [`toolbar`] - open, clear all, settings
//! - [`tile_view`] - the tile grid and the tile context menu
//! - [`dialogs`] - modal dialogs drawn over the gallery
//! - [`notifications`] - toast notifications
//! - [`styles`], [`design_tokens`], [`icons`], [`theming`] - shared styling

pub mod design_tokens;
pub mod dialogs;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod tile_view;
pub mod title_bar;
pub mod toolbar;
