// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a frameless image gallery built with the Iced GUI framework.
//!
//! Images are laid out as tiles in a responsive grid and can be swapped by
//! dragging one onto another. The borderless window draws its own chrome and
//! emulates moving and resizing.

pub mod app;
pub mod chrome;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod input;
pub mod ui;
