// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for load, clipboard and settings feedback.
//!
//! - [`notification`] - `Notification` with a severity and an i18n key
//! - [`manager`] - `Manager` queuing at most three visible toasts
//! - [`toast`] - rendering in the bottom-right corner
//!
//! Messages are i18n keys resolved at render time, so a language switch
//! also retranslates toasts already on screen.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
