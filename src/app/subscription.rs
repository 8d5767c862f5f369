// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the application.

use super::Message;
use crate::config::LOADING_STEP_INTERVAL_SECS;
use crate::ui::notifications::NotificationMessage;
use crate::ui::pricing_panel;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval at which expired toasts are removed.
const NOTIFICATION_TICK: Duration = Duration::from_millis(250);

/// Rotates the CTA label while a checkout request is pending.
///
/// Dropping the subscription when the request settles stops the rotation.
pub fn create_loading_subscription(is_submitting: bool) -> Subscription<Message> {
    if is_submitting {
        time::every(Duration::from_secs(LOADING_STEP_INTERVAL_SECS))
            .map(|_| Message::Panel(pricing_panel::Message::LoadingTick))
    } else {
        Subscription::none()
    }
}

/// Ticks only while a visible toast can expire; error toasts wait for the user.
pub fn create_notification_subscription(has_expiring: bool) -> Subscription<Message> {
    if has_expiring {
        time::every(NOTIFICATION_TICK).map(|_| Message::Notification(NotificationMessage::Tick))
    } else {
        Subscription::none()
    }
}
