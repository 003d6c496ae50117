// SPDX-License-Identifier: MPL-2.0
//! Translations for the gallery UI.
//!
//! Fluent `.ftl` files under `assets/i18n/` are embedded in the binary. The
//! active locale comes from `--lang`, then `[general] language`, then the OS
//! locale, and can be switched at runtime from the title-bar menu.

pub mod fluent;
