// SPDX-License-Identifier: MPL-2.0
//! Custom window chrome for the undecorated main window.
//!
//! The window has no native border, so resizing and moving are emulated:
//! every pointer move is hit-tested against the window edges to pick a
//! [`CursorZone`], and while the left button is held the controller either
//! translates the window (interior press) or drags the edges implied by the
//! zone, never shrinking below the minimum size.
//!
//! [`ChromeController`] only computes geometry. It returns [`ChromeEffect`]s
//! which the application turns into `window::move_to` / `window::resize`
//! tasks and a cursor interaction.

pub mod bounds;
pub mod controller;
pub mod zone;

pub use bounds::WindowBounds;
pub use controller::{resize, ChromeController, ChromeEffect, DragGesture};
pub use zone::{classify, CursorGlyph, CursorZone};
