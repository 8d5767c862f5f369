// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for checkout failures and startup warnings.
//!
//! - [`notification`] - `Notification` with its severity and i18n key
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering the visible notifications
//!
//! Warnings auto-dismiss after 5s. Errors stay until the user closes them.
//! At most 3 toasts are visible; others are queued.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
